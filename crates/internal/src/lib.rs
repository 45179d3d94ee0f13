//! Internal utilities for the nhdss library
//!
//! Not part of the public API; shared by the algorithm and signature crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_padded};
