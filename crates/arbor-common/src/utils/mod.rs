//! Utility functions and helpers.
//!
//! - [`error`] - Error type shared by every Arbor crate
//! - [`hash`] - Fast hash map alias

pub mod error;
pub mod hash;
