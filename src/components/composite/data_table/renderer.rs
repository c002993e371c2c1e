//! Table Renderer
//!
//! Maps `(columns, rows)` to a table markup tree: a header row, one body row
//! per record (or an empty-state row) and an optional aggregated footer row.
//! Rendering is a single pass with no state carried between calls.

use std::borrow::Cow;

use super::column::{CellParams, CellProps, CellValue, ColumnSchema, FooterParams};
use super::markup::{ElementView, IntoView, View};
use crate::helpers::cn;
use crate::i18n::{Locale, t};
use crate::theme::TableTheme;

/// Stable identity of a row among its siblings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey(Cow<'static, str>);

impl RowKey {
    /// The key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn into_inner(self) -> Cow<'static, str> {
        self.0
    }
}

macro_rules! impl_row_key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RowKey {
                fn from(value: $t) -> Self {
                    RowKey(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

impl_row_key_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey(Cow::Owned(value.to_string()))
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey(Cow::Owned(value))
    }
}

/// Renders column schemas and rows into a table view
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    theme: TableTheme,
    locale: Locale,
}

impl TableRenderer {
    /// Create a renderer with the given theme and locale
    pub fn new(theme: TableTheme, locale: Locale) -> Self {
        Self { theme, locale }
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: TableTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the locale of the empty-state message
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Get the theme
    pub fn theme(&self) -> &TableTheme {
        &self.theme
    }

    /// Get the locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render the whole table
    ///
    /// The footer section is only present when at least one column defines a
    /// footer getter.
    pub fn render<R, K>(
        &self,
        columns: &[ColumnSchema<R>],
        data: &[R],
        key_extractor: impl Fn(&R) -> K,
    ) -> View
    where
        K: Into<RowKey>,
    {
        let has_footer = columns.iter().any(ColumnSchema::has_footer);
        tracing::trace!(
            "Rendering table: {} columns, {} rows, footer: {}",
            columns.len(),
            data.len(),
            has_footer
        );

        let mut table = View::element("table")
            .attr("class", self.theme.table.clone())
            .child(self.render_header(columns))
            .child(self.render_body(columns, data, key_extractor));

        if has_footer {
            table = table.child(self.render_footer(columns, data));
        }

        table.into_view()
    }

    /// Render the header row
    fn render_header<R>(&self, columns: &[ColumnSchema<R>]) -> ElementView {
        let cells = columns.iter().map(|col| {
            let props = col.header_cell_props.as_ref();
            let cell = View::element("th").key(col.id.clone()).attr("scope", "col");
            let prop_classes = props.map(|p| &p.class_names);
            spread_props(cell, props)
                .attr_opt(
                    "class",
                    class_attr(cn(&[
                        &self.theme.header_cell,
                        &col.header_class_names,
                        &prop_classes,
                    ])),
                )
                .child(col.header.clone().unwrap_or_default())
        });

        View::element("thead")
            .attr("class", self.theme.thead.clone())
            .child(View::element("tr").children(cells))
    }

    /// Render the body: one row per record, or the empty-state row
    fn render_body<R, K>(
        &self,
        columns: &[ColumnSchema<R>],
        data: &[R],
        key_extractor: impl Fn(&R) -> K,
    ) -> ElementView
    where
        K: Into<RowKey>,
    {
        let tbody = View::element("tbody").attr("class", self.theme.tbody.clone());

        if data.is_empty() {
            let empty = View::element("td")
                .attr("colspan", columns.len().to_string())
                .attr("class", self.theme.empty_cell.clone())
                .child(View::text(t(self.locale, "table-no-data")));
            return tbody.child(View::element("tr").child(empty));
        }

        tbody.children(data.iter().map(|item| {
            let key: RowKey = key_extractor(item).into();
            View::element("tr")
                .key(key.into_inner())
                .attr("class", self.theme.body_row.clone())
                .children(columns.iter().map(|col| self.render_body_cell(col, item)))
        }))
    }

    /// Render a single body cell
    fn render_body_cell<R>(&self, column: &ColumnSchema<R>, item: &R) -> ElementView {
        let props = column.cell_props.as_ref();

        let cell_value = column.value.as_ref().and_then(|getter| getter(item));
        let params = CellParams {
            data: item,
            value: cell_value.as_ref(),
        };

        let display_value = match &column.value_formatter {
            Some(formatter) => formatter(&params),
            None => cell_value
                .as_ref()
                .map(CellValue::to_string)
                .unwrap_or_default(),
        };

        let custom_classes = column
            .cell_class_names
            .as_ref()
            .map(|source| source.resolve(&params));

        let cell_title = column.cell_title.as_ref().and_then(|f| f(&params));

        let content = match &column.cell_renderer {
            Some(renderer) => renderer(&params),
            None => View::text(display_value),
        };

        let prop_classes = props.map(|p| &p.class_names);
        spread_props(View::element("td").key(column.id.clone()), props)
            .attr_opt(
                "class",
                class_attr(cn(&[
                    &self.theme.body_cell,
                    &custom_classes,
                    &prop_classes,
                ])),
            )
            .attr_opt("title", cell_title)
            .child(content)
    }

    /// Render the footer row
    ///
    /// A column whose footer props declare a column span is rendered alone as
    /// a merged cell. The first such column wins. When that column has no
    /// footer getter, the lone cell is the plain empty cell and carries no
    /// `colspan`.
    fn render_footer<R>(&self, columns: &[ColumnSchema<R>], data: &[R]) -> ElementView {
        let row = View::element("tr");
        let row = match columns.iter().find(|c| c.footer_col_span().is_some()) {
            Some(merged) => {
                tracing::trace!("Footer merged into column '{}'", merged.id);
                row.child(self.render_footer_cell(merged, data))
            }
            None => row.children(
                columns
                    .iter()
                    .map(|col| self.render_footer_cell(col, data)),
            ),
        };

        View::element("tfoot")
            .attr("class", self.theme.tfoot.clone())
            .child(row)
    }

    /// Render a single footer cell
    ///
    /// Columns without a footer getter render an empty cell so the footer
    /// stays aligned with the body.
    fn render_footer_cell<R>(&self, column: &ColumnSchema<R>, data: &[R]) -> ElementView {
        let cell = View::element("td").key(column.id.clone());

        let Some(getter) = &column.footer else {
            return cell.attr_opt("class", class_attr(self.theme.footer_cell.clone()));
        };

        let props = column.footer_cell_props.as_ref();

        let footer_value = getter(data);
        let params = FooterParams {
            data,
            value: footer_value.as_ref(),
        };

        let display_value = match &column.footer_formatter {
            Some(formatter) => formatter(&params),
            None => footer_value
                .as_ref()
                .map(CellValue::to_string)
                .unwrap_or_default(),
        };

        let custom_classes = column
            .footer_class_names
            .as_ref()
            .map(|source| source.resolve(&params));

        let footer_title = column.footer_title.as_ref().and_then(|f| f(&params));

        // Passthrough attributes come after the computed title and may replace it.
        let prop_classes = props.map(|p| &p.class_names);
        let cell = match footer_title {
            Some(title) => cell.attr("title", title),
            None => cell,
        };
        spread_props(cell, props)
            .attr_opt(
                "class",
                class_attr(cn(&[
                    &self.theme.footer_cell,
                    &custom_classes,
                    &prop_classes,
                ])),
            )
            .child(display_value)
    }
}

/// Apply passthrough attributes except class names, which callers fold into
/// the combined class list themselves.
fn spread_props(mut el: ElementView, props: Option<&CellProps>) -> ElementView {
    let Some(props) = props else {
        return el;
    };

    if let Some(span) = props.col_span {
        el.set_attr("colspan", span.to_string());
    }
    if let Some(title) = &props.title {
        el.set_attr("title", title.clone());
    }
    for (name, value) in &props.attributes {
        if name == "class" {
            continue;
        }
        el.set_attr(name.clone(), value.clone());
    }
    el
}

fn class_attr(joined: String) -> Option<String> {
    (!joined.is_empty()).then_some(joined)
}

/// Render a table with the default theme and locale
pub fn render_table<R, K>(
    columns: &[ColumnSchema<R>],
    data: &[R],
    key_extractor: impl Fn(&R) -> K,
) -> View
where
    K: Into<RowKey>,
{
    TableRenderer::default().render(columns, data, key_extractor)
}
