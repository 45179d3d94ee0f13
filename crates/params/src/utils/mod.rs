//! Constants shared by several algorithms

pub mod hash;
