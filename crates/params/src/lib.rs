//! Constant values for nhdss operations
//!
//! This crate provides the named curves, toy parameters, attempt budgets and
//! hashing constants used across the nhdss workspace.

#![no_std]

pub mod curves;
pub mod finite_field;
pub mod limits;
pub mod utils;
