//! DataTable Component
//!
//! GPUI view over the table renderer. The rendered markup is cached and only
//! rebuilt after the columns, rows or renderer change.

use gpui::{
    div, prelude::*, px, AnyElement, Context, Entity, FontWeight, IntoElement, ParentElement,
    Render, Rgba, SharedString, Styled, Window,
};

use super::column::ColumnSchema;
use super::markup::{ElementView, View};
use super::renderer::{RowKey, TableRenderer};
use crate::theme::colors::TableColors;

type KeyExtractor<R> = Box<dyn Fn(&R) -> RowKey + Send + Sync>;

/// Which table section an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Head,
    Body,
    Foot,
}

impl Section {
    fn text_color(self) -> Rgba {
        match self {
            Section::Head | Section::Foot => TableColors::text_secondary(),
            Section::Body => TableColors::text_primary(),
        }
    }
}

/// DataTable component
pub struct DataTable<R: Send + Sync + 'static> {
    columns: Vec<ColumnSchema<R>>,
    rows: Vec<R>,
    key_extractor: KeyExtractor<R>,
    renderer: TableRenderer,
    rendered: Option<View>,
}

impl<R: Send + Sync + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new<K>(
        key_extractor: impl Fn(&R) -> K + Send + Sync + 'static,
        _cx: &mut Context<Self>,
    ) -> Self
    where
        K: Into<RowKey>,
    {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            key_extractor: Box::new(move |row: &R| -> RowKey { key_extractor(row).into() }),
            renderer: TableRenderer::default(),
            rendered: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<ColumnSchema<R>>) {
        self.columns = columns;
        self.rendered = None;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.rendered = None;
    }

    /// Set the renderer (theme and locale)
    pub fn set_renderer(&mut self, renderer: TableRenderer) {
        self.renderer = renderer;
        self.rendered = None;
    }

    /// The current markup, rendering it first if the cache is stale
    pub fn markup(&mut self) -> &View {
        let view = match self.rendered.take() {
            Some(view) => view,
            None => {
                tracing::debug!(
                    "Rebuilding table markup ({} columns, {} rows)",
                    self.columns.len(),
                    self.rows.len()
                );
                let key_extractor = &self.key_extractor;
                self.renderer
                    .render(&self.columns, &self.rows, |row| key_extractor(row))
            }
        };
        self.rendered.insert(view)
    }

    /// Width of a cell spanning `span` columns
    fn cell_width(&self, span: usize) -> f32 {
        self.renderer.theme().column_width * span.max(1) as f32
    }

    /// Convert a list of views, flattening fragments
    fn render_views(&self, views: &[View], section: Section, out: &mut Vec<AnyElement>) {
        for view in views {
            match view {
                View::Element(el) => out.push(self.render_element(el, section)),
                View::Text(text) => {
                    out.push(SharedString::from(text.to_string()).into_any_element())
                }
                View::Fragment(children) => self.render_views(children, section, out),
                View::Empty => {}
            }
        }
    }

    fn render_children(&self, el: &ElementView, section: Section) -> Vec<AnyElement> {
        let mut out = Vec::new();
        self.render_views(el.child_views(), section, &mut out);
        out
    }

    /// Convert one markup element into a GPUI element
    fn render_element(&self, el: &ElementView, section: Section) -> AnyElement {
        match el.tag_name() {
            "table" => div()
                .size_full()
                .flex()
                .flex_col()
                .bg(TableColors::table_bg())
                .border_1()
                .border_color(TableColors::border())
                .rounded_md()
                .overflow_hidden()
                .children(self.render_children(el, section))
                .into_any_element(),
            "thead" => div()
                .w_full()
                .bg(TableColors::header_bg())
                .border_b_1()
                .border_color(TableColors::border())
                .children(self.render_children(el, Section::Head))
                .into_any_element(),
            "tbody" => div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(self.render_children(el, Section::Body))
                .into_any_element(),
            "tfoot" => div()
                .w_full()
                .bg(TableColors::footer_bg())
                .border_t_1()
                .border_color(TableColors::border())
                .font_weight(FontWeight::BOLD)
                .children(self.render_children(el, Section::Foot))
                .into_any_element(),
            "tr" => {
                let row = div()
                    .w_full()
                    .flex()
                    .items_center()
                    .border_b_1()
                    .border_color(TableColors::border());
                let row = if section == Section::Body {
                    row.hover(|s| s.bg(TableColors::row_hover()))
                } else {
                    row
                };
                row.children(self.render_children(el, section))
                    .into_any_element()
            }
            "th" | "td" => {
                let span = el
                    .get_attr("colspan")
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(1);
                let cell = div()
                    .w(px(self.cell_width(span)))
                    .px_3()
                    .py_2()
                    .text_sm()
                    .text_color(cell_text_color(el, section))
                    .overflow_hidden();
                let cell = if el.tag_name() == "th" {
                    cell.font_weight(FontWeight::MEDIUM)
                } else {
                    cell
                };
                cell.children(self.render_children(el, section))
                    .into_any_element()
            }
            tag => {
                let inline = match Emphasis::of(tag) {
                    Some(Emphasis::Bold) => div().font_weight(FontWeight::BOLD),
                    Some(Emphasis::Italic) => div().italic(),
                    None => div(),
                };
                inline
                    .children(self.render_children(el, section))
                    .into_any_element()
            }
        }
    }
}

/// Inline text emphasis carried by a content tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Bold,
    Italic,
}

impl Emphasis {
    fn of(tag: &str) -> Option<Self> {
        match tag {
            "strong" | "b" => Some(Emphasis::Bold),
            "em" | "i" => Some(Emphasis::Italic),
            _ => None,
        }
    }
}

/// Text color from the cell's class tokens; the last recognised token wins
fn cell_text_color(el: &ElementView, section: Section) -> Rgba {
    el.get_attr("class")
        .into_iter()
        .flat_map(str::split_whitespace)
        .filter_map(TableColors::text_for_class)
        .last()
        .unwrap_or_else(|| section.text_color())
}

impl<R: Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        self.markup();
        match &self.rendered {
            Some(View::Element(el)) => self.render_element(el, Section::Body),
            _ => div().into_any_element(),
        }
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R, K, V>(
    columns: Vec<ColumnSchema<R>>,
    rows: Vec<R>,
    key_extractor: impl Fn(&R) -> K + Send + Sync + 'static,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>>
where
    R: Send + Sync + 'static,
    K: Into<RowKey>,
    V: 'static,
{
    cx.new(|cx| {
        let mut table = DataTable::new(key_extractor, cx);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_known_class_token_sets_text_color() {
        let cell =
            ElementView::new("td").attr("class", "px-6 text-gray-800 text-red-500 font-mono");
        assert_eq!(cell_text_color(&cell, Section::Body), TableColors::negative());
    }

    #[test]
    fn emphasis_tags_map_to_text_styles() {
        assert_eq!(Emphasis::of("strong"), Some(Emphasis::Bold));
        assert_eq!(Emphasis::of("b"), Some(Emphasis::Bold));
        assert_eq!(Emphasis::of("em"), Some(Emphasis::Italic));
        assert_eq!(Emphasis::of("i"), Some(Emphasis::Italic));
        assert_eq!(Emphasis::of("span"), None);
    }

    #[test]
    fn unknown_classes_fall_back_to_section_color() {
        let cell = ElementView::new("td").attr("class", "px-6 italic");
        assert_eq!(cell_text_color(&cell, Section::Foot), TableColors::text_secondary());
        let bare = ElementView::new("th");
        assert_eq!(cell_text_color(&bare, Section::Body), TableColors::text_primary());
    }
}
