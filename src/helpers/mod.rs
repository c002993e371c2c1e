//! Helper Utilities
//!
//! Common utilities used across the crate.

mod class_names;

pub use class_names::*;
