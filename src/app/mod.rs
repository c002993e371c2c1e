//! Application Layer
//!
//! Contains app initialization, window management, demo data and the workspace.

pub mod application;
pub mod demo;
pub mod workspace;
