use dfc_data_table::app::demo::{Invoice, invoice_columns, sample_invoices};
use dfc_data_table::components::composite::data_table::{
    CellParams, CellProps, ColumnSchema, ElementView, IntoView, View, render_table,
};
use dfc_data_table::i18n::Locale;
use rstest::*;

#[derive(Debug, Clone)]
struct TestData {
    id: u32,
    name: String,
    value: i64,
}

#[fixture]
fn test_data() -> Vec<TestData> {
    vec![
        TestData {
            id: 1,
            name: "Item 1".to_string(),
            value: 100,
        },
        TestData {
            id: 2,
            name: "Item 2".to_string(),
            value: 200,
        },
    ]
}

#[fixture]
fn columns() -> Vec<ColumnSchema<TestData>> {
    vec![
        ColumnSchema::new("name")
            .header("Name")
            .value(|d: &TestData| Some(d.name.clone())),
        ColumnSchema::new("value")
            .header("Value")
            .value(|d: &TestData| Some(d.value)),
    ]
}

fn section<'a>(view: &'a View, tag: &str) -> &'a ElementView {
    view.find_all(tag)[0]
}

/// Elements of `tag` whose whole text equals `text`
fn by_text<'a>(view: &'a View, tag: &str, text: &str) -> Vec<&'a ElementView> {
    view.find_all(tag)
        .into_iter()
        .filter(|el| el.text_content() == text)
        .collect()
}

#[rstest]
fn renders_table_with_data(columns: Vec<ColumnSchema<TestData>>, test_data: Vec<TestData>) {
    let view = render_table(&columns, &test_data, |d| d.id);

    assert_eq!(by_text(&view, "th", "Name").len(), 1);
    assert_eq!(by_text(&view, "th", "Value").len(), 1);
    for text in ["Item 1", "100", "Item 2", "200"] {
        assert_eq!(by_text(&view, "td", text).len(), 1, "missing cell {text}");
    }
}

#[rstest]
fn renders_empty_state(columns: Vec<ColumnSchema<TestData>>) {
    let view = render_table(&columns, &[], |d: &TestData| d.id);

    let cells = by_text(&view, "td", "No data available.");
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].get_attr("colspan"), Some("2"));
    assert_eq!(section(&view, "tbody").find_all("tr").len(), 1);
}

#[rstest]
fn renders_footer_total(mut columns: Vec<ColumnSchema<TestData>>, test_data: Vec<TestData>) {
    columns.push(
        ColumnSchema::new("total")
            .header("Total")
            .value(|d: &TestData| Some(d.value))
            .footer(|rows: &[TestData]| Some(rows.iter().map(|d| d.value).sum::<i64>())),
    );

    let view = render_table(&columns, &test_data, |d| d.id);

    assert_eq!(by_text(&view, "th", "Total").len(), 1);
    let footer = section(&view, "tfoot");
    assert_eq!(footer.find_all("td").len(), 3);
    assert_eq!(
        footer
            .find_all("td")
            .iter()
            .filter(|td| td.text_content() == "300")
            .count(),
        1
    );
}

#[rstest]
fn uses_value_formatter_and_cell_renderer(test_data: Vec<TestData>) {
    let columns = vec![
        ColumnSchema::new("name")
            .header("Name")
            .value(|d: &TestData| Some(d.name.clone()))
            .cell_renderer(|p: &CellParams<'_, TestData>| {
                View::element("strong").child(p.value.cloned()).into_view()
            }),
        ColumnSchema::new("value")
            .header("Value")
            .value(|d: &TestData| Some(d.value))
            .value_formatter(|p: &CellParams<'_, TestData>| {
                format!("${}", p.value.map(ToString::to_string).unwrap_or_default())
            }),
    ];

    let view = render_table(&columns, &test_data, |d| d.id);

    assert_eq!(by_text(&view, "strong", "Item 1").len(), 1);
    assert_eq!(by_text(&view, "td", "$100").len(), 1);
}

#[rstest]
fn handles_col_span_in_footer(test_data: Vec<TestData>) {
    let columns = vec![
        ColumnSchema::new("name")
            .header("Name")
            .value(|d: &TestData| Some(d.name.clone())),
        ColumnSchema::new("value")
            .header("Value")
            .value(|d: &TestData| Some(d.value))
            .footer(|rows: &[TestData]| {
                Some(format!("Total: {}", rows.iter().map(|d| d.value).sum::<i64>()))
            })
            .footer_cell_props(CellProps::new().col_span(2)),
    ];

    let view = render_table(&columns, &test_data, |d| d.id);

    let footer_cell = by_text(&view, "td", "Total: 300");
    assert_eq!(footer_cell.len(), 1);
    assert_eq!(footer_cell[0].get_attr("colspan"), Some("2"));
    assert_eq!(section(&view, "tfoot").find_all("td").len(), 1);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn body_shape_follows_input(columns: Vec<ColumnSchema<TestData>>, #[case] row_count: u32) {
    let rows: Vec<TestData> = (0..row_count)
        .map(|id| TestData {
            id,
            name: format!("Row {id}"),
            value: i64::from(id),
        })
        .collect();

    let view = render_table(&columns, &rows, |d| d.id);
    let body_rows = section(&view, "tbody").find_all("tr");

    if row_count == 0 {
        assert_eq!(body_rows.len(), 1);
    } else {
        assert_eq!(body_rows.len(), rows.len());
        assert!(body_rows.iter().all(|tr| tr.find_all("td").len() == columns.len()));
    }
}

#[rstest]
fn demo_invoice_table_renders() {
    let invoices: Vec<Invoice> = sample_invoices();
    let view = render_table(&invoice_columns(Locale::EnUS), &invoices, |i| i.id);

    assert_eq!(section(&view, "tbody").find_all("tr").len(), invoices.len());
    assert_eq!(by_text(&view, "td", "Total: $1400.00").len(), 1);
    assert_eq!(by_text(&view, "strong", "Pitch bearing").len(), 1);

    let change_cells = by_text(&view, "td", "-4.0%");
    assert_eq!(change_cells.len(), 1);
    assert!(
        change_cells[0]
            .get_attr("class")
            .is_some_and(|c| c.contains("text-red-500"))
    );
    assert_eq!(
        change_cells[0].get_attr("title"),
        Some("Changed for Pitch bearing")
    );

    let html = view.render_to_string();
    assert!(html.starts_with("<table"));
    assert!(html.contains("<tfoot"));
}
