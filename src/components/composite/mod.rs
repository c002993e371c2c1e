//! Composite Components
//!
//! Components assembled from several elements.

pub mod data_table;
