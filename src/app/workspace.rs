//! Workspace - Main Shell hosting the demo table

use gpui::{
    div, prelude::*, px, Context, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::demo::{Invoice, invoice_columns, sample_invoices};
use crate::components::composite::data_table::{DataTable, TableRenderer, data_table};
use crate::i18n::t;
use crate::theme::colors::TableColors;

/// Main workspace containing the title and the invoice table
pub struct Workspace {
    title: SharedString,
    table: Entity<DataTable<Invoice>>,
}

impl Workspace {
    pub fn new(renderer: TableRenderer, cx: &mut Context<Self>) -> Self {
        let locale = renderer.locale();
        let table = data_table(
            invoice_columns(locale),
            sample_invoices(),
            |invoice: &Invoice| invoice.id,
            cx,
        );
        table.update(cx, |table, _cx| table.set_renderer(renderer));

        Self {
            title: t(locale, "app-title").into_owned().into(),
            table,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .bg(TableColors::header_bg())
            .child(
                div()
                    .h(px(32.0))
                    .text_color(TableColors::text_primary())
                    .font_weight(FontWeight::BOLD)
                    .child(self.title.clone()),
            )
            .child(self.table.clone())
    }
}
