//! Classes - Base class names for every table section
//!
//! Every rendered element starts from one of these base class strings before
//! column classes and passthrough classes are appended.

use serde::{Deserialize, Serialize};

/// Base classes and sizing for a rendered table
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTheme {
    pub table: String,
    pub thead: String,
    pub header_cell: String,
    pub tbody: String,
    pub body_row: String,
    pub body_cell: String,
    /// Cell shown when there are no rows
    pub empty_cell: String,
    pub tfoot: String,
    pub footer_cell: String,
    /// Width of one column in the desktop view, in pixels
    pub column_width: f32,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            table: "min-w-full table-auto overflow-hidden rounded-lg bg-white text-left shadow-md"
                .to_string(),
            thead: "divide-y divide-gray-200 bg-gray-100 text-sm text-gray-700".to_string(),
            header_cell: "px-6 py-3 font-medium uppercase tracking-wider text-gray-600"
                .to_string(),
            tbody: "divide-y divide-gray-200 bg-white".to_string(),
            body_row:
                "border-b bg-white transition-colors duration-150 ease-in-out hover:bg-gray-50"
                    .to_string(),
            body_cell: "px-6 py-4 whitespace-nowrap text-sm text-gray-800".to_string(),
            empty_cell: "px-6 py-4 text-center text-gray-500".to_string(),
            tfoot: "border-t border-gray-200 bg-gray-100 text-sm font-bold text-gray-700"
                .to_string(),
            footer_cell: "px-6 py-3 whitespace-nowrap text-gray-600 text-sm".to_string(),
            column_width: 160.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let theme: TableTheme = toml::from_str(
            r#"
            body_cell = "p-2"
            column_width = 96.0
            "#,
        )
        .expect("valid theme");
        assert_eq!(theme.body_cell, "p-2");
        assert_eq!(theme.column_width, 96.0);
        assert_eq!(theme.header_cell, TableTheme::default().header_cell);
    }
}
