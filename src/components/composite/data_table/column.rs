//! Column Definition
//!
//! Defines how a table column derives, formats, styles and renders its
//! header, body cells and footer cell. A schema is plain data: every hook is
//! optional and nothing here is ever invoked by the schema itself.

use std::fmt;

use super::markup::View;
use crate::helpers::ClassNames;

/// A raw cell value produced by a value getter
///
/// "Absent" is modelled as `Option::None` wherever a value is passed around.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral numbers display without a fractional part: 100.0 -> "100"
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(value: $t) -> Self {
                    CellValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_number_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl CellValue {
    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

/// Parameters passed to body cell hooks
pub struct CellParams<'a, R> {
    /// The current row
    pub data: &'a R,
    /// The raw cell value, `None` when absent
    pub value: Option<&'a CellValue>,
}

/// Parameters passed to footer hooks
pub struct FooterParams<'a, R> {
    /// The entire row collection
    pub data: &'a [R],
    /// The aggregate value, `None` when absent
    pub value: Option<&'a CellValue>,
}

/// Passthrough element attributes for a header, body or footer cell
///
/// The class names are folded into the computed class list instead of
/// replacing it. Extra attributes are applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellProps {
    /// Additional class names, appended last
    pub class_names: ClassNames,
    /// Column span of the cell
    pub col_span: Option<usize>,
    /// Title (tooltip) attribute
    pub title: Option<String>,
    /// Any other attributes, e.g. `style`, `scope` or `data-*`
    pub attributes: Vec<(String, String)>,
}

impl CellProps {
    /// Create empty cell props
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class names
    pub fn class_names(mut self, class_names: impl Into<ClassNames>) -> Self {
        self.class_names = class_names.into();
        self
    }

    /// Set the column span
    pub fn col_span(mut self, col_span: usize) -> Self {
        self.col_span = Some(col_span);
        self
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an arbitrary attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Column span when set to a non-zero value
    pub fn effective_col_span(&self) -> Option<usize> {
        self.col_span.filter(|span| *span > 0)
    }
}

/// Derives a body cell's raw value from a row
pub type ValueGetterFn<R> = Box<dyn Fn(&R) -> Option<CellValue> + Send + Sync>;
/// Formats a body cell's raw value for display
pub type ValueFormatterFn<R> = Box<dyn Fn(&CellParams<'_, R>) -> String + Send + Sync>;
/// Computes a body cell's title
pub type CellTitleFn<R> = Box<dyn Fn(&CellParams<'_, R>) -> Option<String> + Send + Sync>;
/// Renders a body cell's content
pub type CellRendererFn<R> = Box<dyn Fn(&CellParams<'_, R>) -> View + Send + Sync>;
/// Derives the footer aggregate from all rows
pub type FooterGetterFn<R> = Box<dyn Fn(&[R]) -> Option<CellValue> + Send + Sync>;
/// Formats the footer aggregate for display
pub type FooterFormatterFn<R> = Box<dyn Fn(&FooterParams<'_, R>) -> String + Send + Sync>;
/// Computes the footer cell's title
pub type FooterTitleFn<R> = Box<dyn Fn(&FooterParams<'_, R>) -> Option<String> + Send + Sync>;

/// Body cell class names: static, or computed from row and value
pub enum CellClassNames<R> {
    /// The same classes for every cell
    Static(ClassNames),
    /// Classes computed per cell
    Computed(Box<dyn Fn(&CellParams<'_, R>) -> ClassNames + Send + Sync>),
}

impl<R> CellClassNames<R> {
    /// Resolve the class names for one cell
    pub fn resolve(&self, params: &CellParams<'_, R>) -> ClassNames {
        match self {
            CellClassNames::Static(classes) => classes.clone(),
            CellClassNames::Computed(f) => f(params),
        }
    }
}

/// Footer cell class names: static, or computed from rows and aggregate
pub enum FooterClassNames<R> {
    /// Fixed classes
    Static(ClassNames),
    /// Classes computed from the aggregate
    Computed(Box<dyn Fn(&FooterParams<'_, R>) -> ClassNames + Send + Sync>),
}

impl<R> FooterClassNames<R> {
    /// Resolve the class names for the footer cell
    pub fn resolve(&self, params: &FooterParams<'_, R>) -> ClassNames {
        match self {
            FooterClassNames::Static(classes) => classes.clone(),
            FooterClassNames::Computed(f) => f(params),
        }
    }
}

/// Column definition for the DataTable
pub struct ColumnSchema<R> {
    /// Column identifier, unique among a table's columns
    pub id: String,

    /// Header label
    pub header: Option<String>,
    /// Extra header classes
    pub header_class_names: ClassNames,
    /// Passthrough attributes for the header cell
    pub header_cell_props: Option<CellProps>,

    pub value: Option<ValueGetterFn<R>>,
    pub value_formatter: Option<ValueFormatterFn<R>>,
    pub cell_class_names: Option<CellClassNames<R>>,
    pub cell_title: Option<CellTitleFn<R>>,
    pub cell_renderer: Option<CellRendererFn<R>>,
    /// Passthrough attributes for body cells
    pub cell_props: Option<CellProps>,

    pub footer: Option<FooterGetterFn<R>>,
    pub footer_formatter: Option<FooterFormatterFn<R>>,
    pub footer_class_names: Option<FooterClassNames<R>>,
    pub footer_title: Option<FooterTitleFn<R>>,
    /// Passthrough attributes for the footer cell, e.g. a column span
    pub footer_cell_props: Option<CellProps>,
}

impl<R: 'static> ColumnSchema<R> {
    /// Create a column with only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: None,
            header_class_names: ClassNames::new(),
            header_cell_props: None,
            value: None,
            value_formatter: None,
            cell_class_names: None,
            cell_title: None,
            cell_renderer: None,
            cell_props: None,
            footer: None,
            footer_formatter: None,
            footer_class_names: None,
            footer_title: None,
            footer_cell_props: None,
        }
    }

    // ==================== Header ====================

    /// Set the header label
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set extra header classes
    pub fn header_class_names(mut self, class_names: impl Into<ClassNames>) -> Self {
        self.header_class_names = class_names.into();
        self
    }

    /// Set header passthrough attributes
    pub fn header_cell_props(mut self, props: CellProps) -> Self {
        self.header_cell_props = Some(props);
        self
    }

    // ==================== Body ====================

    /// Set the value getter
    pub fn value<V, F>(mut self, getter: F) -> Self
    where
        V: Into<CellValue>,
        F: Fn(&R) -> Option<V> + Send + Sync + 'static,
    {
        self.value = Some(Box::new(move |row: &R| -> Option<CellValue> {
            getter(row).map(Into::into)
        }));
        self
    }

    /// Set the value formatter
    pub fn value_formatter(
        mut self,
        formatter: impl Fn(&CellParams<'_, R>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_formatter = Some(Box::new(formatter));
        self
    }

    /// Set static body cell classes
    pub fn cell_class_names(mut self, class_names: impl Into<ClassNames>) -> Self {
        self.cell_class_names = Some(CellClassNames::Static(class_names.into()));
        self
    }

    /// Compute body cell classes from row and value
    pub fn cell_class_names_with<C>(
        mut self,
        f: impl Fn(&CellParams<'_, R>) -> C + Send + Sync + 'static,
    ) -> Self
    where
        C: Into<ClassNames>,
    {
        self.cell_class_names = Some(CellClassNames::Computed(Box::new(
            move |p: &CellParams<'_, R>| f(p).into(),
        )));
        self
    }

    /// Set the body cell title
    pub fn cell_title(
        mut self,
        f: impl Fn(&CellParams<'_, R>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.cell_title = Some(Box::new(f));
        self
    }

    /// Set a custom body cell renderer
    pub fn cell_renderer(
        mut self,
        f: impl Fn(&CellParams<'_, R>) -> View + Send + Sync + 'static,
    ) -> Self {
        self.cell_renderer = Some(Box::new(f));
        self
    }

    /// Set body cell passthrough attributes
    pub fn cell_props(mut self, props: CellProps) -> Self {
        self.cell_props = Some(props);
        self
    }

    // ==================== Footer ====================

    /// Set the footer aggregate getter
    pub fn footer<V, F>(mut self, getter: F) -> Self
    where
        V: Into<CellValue>,
        F: Fn(&[R]) -> Option<V> + Send + Sync + 'static,
    {
        self.footer = Some(Box::new(move |rows: &[R]| -> Option<CellValue> {
            getter(rows).map(Into::into)
        }));
        self
    }

    /// Set the footer formatter
    pub fn footer_formatter(
        mut self,
        formatter: impl Fn(&FooterParams<'_, R>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.footer_formatter = Some(Box::new(formatter));
        self
    }

    /// Set static footer classes
    pub fn footer_class_names(mut self, class_names: impl Into<ClassNames>) -> Self {
        self.footer_class_names = Some(FooterClassNames::Static(class_names.into()));
        self
    }

    /// Compute footer classes from rows and aggregate
    pub fn footer_class_names_with<C>(
        mut self,
        f: impl Fn(&FooterParams<'_, R>) -> C + Send + Sync + 'static,
    ) -> Self
    where
        C: Into<ClassNames>,
    {
        self.footer_class_names =
            Some(FooterClassNames::Computed(Box::new(
                move |p: &FooterParams<'_, R>| f(p).into(),
            )));
        self
    }

    /// Set the footer title
    pub fn footer_title(
        mut self,
        f: impl Fn(&FooterParams<'_, R>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.footer_title = Some(Box::new(f));
        self
    }

    /// Set footer passthrough attributes
    pub fn footer_cell_props(mut self, props: CellProps) -> Self {
        self.footer_cell_props = Some(props);
        self
    }
}

impl<R> ColumnSchema<R> {
    /// Whether this column defines a footer aggregate
    pub fn has_footer(&self) -> bool {
        self.footer.is_some()
    }

    /// Footer column span, when one is declared
    pub fn footer_col_span(&self) -> Option<usize> {
        self.footer_cell_props
            .as_ref()
            .and_then(CellProps::effective_col_span)
    }
}

impl<R> fmt::Debug for ColumnSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSchema")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("header_class_names", &self.header_class_names)
            .field("header_cell_props", &self.header_cell_props)
            .field("value", &self.value.is_some())
            .field("value_formatter", &self.value_formatter.is_some())
            .field("cell_class_names", &self.cell_class_names.is_some())
            .field("cell_title", &self.cell_title.is_some())
            .field("cell_renderer", &self.cell_renderer.is_some())
            .field("cell_props", &self.cell_props)
            .field("footer", &self.footer.is_some())
            .field("footer_formatter", &self.footer_formatter.is_some())
            .field("footer_class_names", &self.footer_class_names.is_some())
            .field("footer_title", &self.footer_title.is_some())
            .field("footer_cell_props", &self.footer_cell_props)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        amount: i64,
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(CellValue::from(100).to_string(), "100");
        assert_eq!(CellValue::from(-3.0).to_string(), "-3");
        assert_eq!(CellValue::from(1.5).to_string(), "1.5");
        assert_eq!(CellValue::from("Item 1").to_string(), "Item 1");
    }

    #[test]
    fn builder_sets_hooks() {
        let column = ColumnSchema::<Row>::new("amount")
            .header("Amount")
            .value(|row| Some(row.amount))
            .footer(|rows| Some(rows.iter().map(|r| r.amount).sum::<i64>()))
            .footer_cell_props(CellProps::new().col_span(2));

        assert_eq!(column.id, "amount");
        assert_eq!(column.header.as_deref(), Some("Amount"));
        assert!(column.has_footer());
        assert_eq!(column.footer_col_span(), Some(2));

        let rows = [Row { amount: 5 }, Row { amount: 7 }];
        let getter = column.value.as_ref().map(|g| g(&rows[0]));
        assert_eq!(getter, Some(Some(CellValue::Number(5.0))));
        let total = column.footer.as_ref().map(|g| g(&rows));
        assert_eq!(total, Some(Some(CellValue::Number(12.0))));
    }

    #[test]
    fn zero_col_span_is_not_declared() {
        let column =
            ColumnSchema::<Row>::new("a").footer_cell_props(CellProps::new().col_span(0));
        assert_eq!(column.footer_col_span(), None);
    }

    #[test]
    fn class_name_sources_resolve() {
        let row = Row { amount: -1 };
        let value = CellValue::from(row.amount);
        let params = CellParams {
            data: &row,
            value: Some(&value),
        };

        let fixed: CellClassNames<Row> = CellClassNames::Static("font-mono".into());
        assert_eq!(fixed.resolve(&params).to_string(), "font-mono");

        let computed: CellClassNames<Row> =
            CellClassNames::Computed(Box::new(|p: &CellParams<'_, Row>| {
                if p.data.amount < 0 {
                    "neg".into()
                } else {
                    ClassNames::new()
                }
            }));
        assert_eq!(computed.resolve(&params).to_string(), "neg");
    }

    #[test]
    fn debug_reports_hook_presence() {
        let column = ColumnSchema::<Row>::new("a").value(|r| Some(r.amount));
        let debug = format!("{column:?}");
        assert!(debug.contains("value: true"));
        assert!(debug.contains("footer: false"));
    }
}
