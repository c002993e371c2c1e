//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI demo.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::workspace::Workspace;
use crate::components::composite::data_table::TableRenderer;
use crate::i18n::{Locale, t};
use crate::theme::TableTheme;
use crate::utils::{load_theme, theme_config_path};

actions!(data_table, [Quit]);

/// Load the theme config, falling back to defaults on any error
pub fn resolve_theme() -> TableTheme {
    match theme_config_path().and_then(|path| load_theme(&path)) {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!("Falling back to the default table theme: {}", err);
            TableTheme::default()
        }
    }
}

/// Run the demo application
pub fn run_app() {
    let locale = Locale::from_system();
    let renderer = TableRenderer::new(resolve_theme(), locale);

    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(960.0), px(540.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(t(locale, "app-title").into_owned())),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(renderer, cx))
        }) {
            tracing::error!("Failed to open window: {}", err);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
