//! Trait definitions for the nhdss ecosystem

pub mod scheme;
pub mod session;

pub use scheme::DssScheme;
pub use session::SessionStore;
