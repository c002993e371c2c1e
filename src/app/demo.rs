//! Demo - Sample invoice table
//!
//! Column schemas exercising every hook, used by the desktop demo and by the
//! `--html` output of the binary.

use crate::components::composite::data_table::{
    CellParams, CellProps, ColumnSchema, FooterParams, IntoView, View,
};
use crate::helpers::number_value_cell_class_names;
use crate::i18n::{Locale, t};

/// One invoice line
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: u32,
    pub item: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Price change since the previous invoice, in percent
    pub change: f64,
}

impl Invoice {
    /// Line amount
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Sample rows shown by the demo
pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: 1,
            item: "Gearbox oil".to_string(),
            quantity: 4,
            unit_price: 25.0,
            change: 2.5,
        },
        Invoice {
            id: 2,
            item: "Pitch bearing".to_string(),
            quantity: 1,
            unit_price: 1200.0,
            change: -4.0,
        },
        Invoice {
            id: 3,
            item: "Yaw brake pad".to_string(),
            quantity: 8,
            unit_price: 12.5,
            change: 0.0,
        },
    ]
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}

/// Columns of the invoice table, with a merged total in the footer
pub fn invoice_columns(locale: Locale) -> Vec<ColumnSchema<Invoice>> {
    vec![
        ColumnSchema::new("item")
            .header(t(locale, "col-item"))
            .value(|i: &Invoice| Some(i.item.clone()))
            .cell_renderer(|p: &CellParams<'_, Invoice>| {
                View::element("strong").child(p.value.cloned()).into_view()
            }),
        ColumnSchema::new("quantity")
            .header(t(locale, "col-quantity"))
            .header_class_names("text-right")
            .value(|i: &Invoice| Some(i.quantity))
            .cell_class_names("text-right tabular-nums"),
        ColumnSchema::new("unit_price")
            .header(t(locale, "col-price"))
            .value(|i: &Invoice| Some(i.unit_price))
            .value_formatter(|p: &CellParams<'_, Invoice>| money(p.data.unit_price)),
        ColumnSchema::new("change")
            .header(t(locale, "col-change"))
            .value(|i: &Invoice| Some(i.change))
            .value_formatter(|p: &CellParams<'_, Invoice>| format!("{:+.1}%", p.data.change))
            .cell_class_names_with(|p: &CellParams<'_, Invoice>| {
                number_value_cell_class_names(p.value)
            })
            .cell_title(|p: &CellParams<'_, Invoice>| {
                (p.data.change != 0.0).then(|| format!("Changed for {}", p.data.item))
            }),
        ColumnSchema::new("amount")
            .header(t(locale, "col-amount"))
            .value(|i: &Invoice| Some(i.amount()))
            .value_formatter(|p: &CellParams<'_, Invoice>| money(p.data.amount()))
            .footer(|rows: &[Invoice]| Some(rows.iter().map(Invoice::amount).sum::<f64>()))
            .footer_formatter(move |p: &FooterParams<'_, Invoice>| {
                let total = p.value.and_then(|v| v.as_number()).unwrap_or_default();
                format!("{}: {}", t(locale, "footer-total"), money(total))
            })
            .footer_title(|p: &FooterParams<'_, Invoice>| Some(format!("{} lines", p.data.len())))
            .footer_class_names("text-right")
            .footer_cell_props(CellProps::new().col_span(5)),
    ]
}
