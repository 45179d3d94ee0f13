//! Public API traits and types for the nhdss library
//!
//! This crate provides the public API surface shared by every nhdss crate:
//! the error taxonomy, the scheme and session-store traits, and the small
//! value types (operation counters, verification results, variants) that
//! travel between the engines and the service layer.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};
pub use types::*;

pub use traits::{DssScheme, SessionStore};

// Re-export trait modules for direct access
pub use traits::{scheme, session};
