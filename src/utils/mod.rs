//! Utils - Configuration storage

pub mod config_store;

pub use config_store::{load_theme, save_theme, theme_config_path};
