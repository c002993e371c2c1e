//! Class Names - Joining utility for element class lists
//!
//! Merges several class sources (strings, lists, absent values) into a single
//! space-separated class string, keeping source order.

use std::fmt;

use crate::components::composite::data_table::CellValue;

const POSITIVE_VALUE_CLASS: &str = "text-green-500";
const NEGATIVE_VALUE_CLASS: &str = "text-red-500";

/// An ordered list of class tokens
///
/// Each entry may itself hold several whitespace separated classes; they are
/// split when joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    /// Create an empty class list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether no non-blank class is present
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| c.trim().is_empty())
    }

    /// Iterate over individual class tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|entry| entry.split_whitespace())
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cn(&[self as &dyn ClassSource]))
    }
}

impl From<&str> for ClassNames {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ClassNames {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl<S: Into<String>> From<Vec<S>> for ClassNames {
    fn from(value: Vec<S>) -> Self {
        Self(value.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ClassNames {
    fn from(value: [S; N]) -> Self {
        Self(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassNames>> From<Option<T>> for ClassNames {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Anything that can contribute tokens to a joined class string
pub trait ClassSource {
    /// Append this source's tokens to `out`, space separated
    fn append_to(&self, out: &mut String);
}

fn append_token(out: &mut String, token: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}

impl ClassSource for str {
    fn append_to(&self, out: &mut String) {
        for token in self.split_whitespace() {
            append_token(out, token);
        }
    }
}

impl ClassSource for String {
    fn append_to(&self, out: &mut String) {
        self.as_str().append_to(out);
    }
}

impl ClassSource for ClassNames {
    fn append_to(&self, out: &mut String) {
        for token in self.tokens() {
            append_token(out, token);
        }
    }
}

impl<T: ClassSource> ClassSource for Option<T> {
    fn append_to(&self, out: &mut String) {
        if let Some(inner) = self {
            inner.append_to(out);
        }
    }
}

impl<T: ClassSource + ?Sized> ClassSource for &T {
    fn append_to(&self, out: &mut String) {
        (**self).append_to(out);
    }
}

/// Join class sources into a single class string
///
/// Blank and absent sources are skipped; order is preserved, so sources given
/// later appear later in the result.
pub fn cn(sources: &[&dyn ClassSource]) -> String {
    let mut out = String::new();
    for source in sources {
        source.append_to(&mut out);
    }
    out
}

/// Colour a numeric cell by its sign
///
/// Positive numbers get a green class, negative numbers a red one. Zero, text
/// and absent values get nothing.
pub fn number_value_cell_class_names(value: Option<&CellValue>) -> Option<&'static str> {
    match value {
        Some(CellValue::Number(n)) if *n > 0.0 => Some(POSITIVE_VALUE_CLASS),
        Some(CellValue::Number(n)) if *n < 0.0 => Some(NEGATIVE_VALUE_CLASS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_in_order_and_skips_blanks() {
        let computed = ClassNames::from(vec!["font-bold", "", "  "]);
        let passthrough: Option<ClassNames> = Some("text-right".into());
        let joined = cn(&[&"px-6 py-4", &computed, &passthrough]);
        assert_eq!(joined, "px-6 py-4 font-bold text-right");
    }

    #[test]
    fn absent_sources_contribute_nothing() {
        let none: Option<ClassNames> = None;
        assert_eq!(cn(&[&none, &""]), "");
        assert_eq!(cn(&[&"a", &none, &"b"]), "a b");
    }

    #[test]
    fn class_names_from_option() {
        let empty = ClassNames::from(None::<&str>);
        assert!(empty.is_empty());
        assert_eq!(ClassNames::from(Some("x y")).to_string(), "x y");
    }

    #[test]
    fn number_value_classes() {
        assert_eq!(
            number_value_cell_class_names(Some(&CellValue::Number(3.0))),
            Some("text-green-500")
        );
        assert_eq!(
            number_value_cell_class_names(Some(&CellValue::Number(-0.5))),
            Some("text-red-500")
        );
        assert_eq!(number_value_cell_class_names(Some(&CellValue::Number(0.0))), None);
        assert_eq!(
            number_value_cell_class_names(Some(&CellValue::Text("5".into()))),
            None
        );
        assert_eq!(number_value_cell_class_names(None), None);
    }
}
