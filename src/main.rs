//! DFC Data Table - Main Entry Point
//!
//! Opens the demo window, or prints the demo table as HTML with `--html`.

use dfc_data_table::app::application::{resolve_theme, run_app};
use dfc_data_table::app::demo::{Invoice, invoice_columns, sample_invoices};
use dfc_data_table::components::composite::data_table::TableRenderer;
use dfc_data_table::i18n::Locale;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if std::env::args().skip(1).any(|arg| arg == "--html") {
        let locale = Locale::from_system();
        let renderer = TableRenderer::new(resolve_theme(), locale);
        let view = renderer.render(
            &invoice_columns(locale),
            &sample_invoices(),
            |invoice: &Invoice| invoice.id,
        );
        println!("{}", view.render_to_string());
        return;
    }

    tracing::info!("Starting DFC Data Table demo...");

    // Run the GPUI application
    run_app();
}
