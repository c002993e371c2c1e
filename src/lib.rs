//! DFC Data Table Library
//!
//! A stateless table renderer: column schemas describe how each column
//! derives, formats, styles and renders its header, body cells and footer;
//! the renderer maps `(columns, rows)` to a table markup tree. A GPUI view
//! draws that tree in the desktop demo.

pub mod app;
pub mod components;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod theme;
pub mod utils;

pub use components::composite::data_table::{
    CellProps, CellValue, ColumnSchema, RowKey, TableRenderer, View, render_table,
};
pub use error::{Error, Result};
