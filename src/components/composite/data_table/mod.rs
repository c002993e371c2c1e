//! DataTable Component
//!
//! A declarative table: column schemas plus rows in, table markup out, with a
//! GPUI view that draws the markup.

pub mod column;
pub mod data_table;
pub mod markup;
pub mod renderer;

pub use column::{
    CellClassNames, CellParams, CellProps, CellValue, ColumnSchema, FooterClassNames,
    FooterParams,
};
pub use data_table::{DataTable, data_table};
pub use markup::{ElementView, IntoView, View};
pub use renderer::{RowKey, TableRenderer, render_table};
