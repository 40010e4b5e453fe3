//! # arbor-common
//!
//! Foundation layer for Arbor: vertex types, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Arbor crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Vertex, bounds checking)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Vertex, check_vertex};
pub use utils::error::{Error, Result};
