//! ConfigStore - Table theme configuration storage
//!
//! The theme lives in a TOML file. A missing file means "use defaults".

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::ResultExt;

use crate::error::{Error, IoSnafu, Result, TomlDeSnafu};
use crate::theme::TableTheme;

/// File name of the theme config inside the config directory
pub const THEME_FILE: &str = "table-theme.toml";

/// Default location of the theme config file
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/dfc-data-table/table-theme.toml`
/// - **macOS**: `~/Library/Application Support/com.goldwind.dfc-data-table/table-theme.toml`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\dfc-data-table\config\table-theme.toml`
pub fn theme_config_path() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "goldwind", "dfc-data-table") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().join(THEME_FILE))
}

/// Load a theme from a TOML file, or the default theme if it does not exist
pub fn load_theme(path: &Path) -> Result<TableTheme> {
    if !path.exists() {
        tracing::debug!("No theme config at {}, using defaults", path.display());
        return Ok(TableTheme::default());
    }

    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    let theme: TableTheme = toml::from_str(&content).context(TomlDeSnafu { path })?;
    tracing::info!("Loaded table theme from {}", path.display());
    Ok(theme)
}

/// Save a theme as TOML, creating parent directories as needed
pub fn save_theme(path: &Path, theme: &TableTheme) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).context(IoSnafu { path: parent })?;
        }
    }

    let content = toml::to_string_pretty(theme)?;
    fs::write(path, content).context(IoSnafu { path })?;
    tracing::info!("Saved table theme to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let theme = load_theme(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(theme, TableTheme::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(THEME_FILE);
        let theme = TableTheme {
            body_cell: "p-1".to_string(),
            ..TableTheme::default()
        };
        save_theme(&path, &theme).expect("save");
        assert_eq!(load_theme(&path).expect("load"), theme);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(THEME_FILE);
        fs::write(&path, "column_width = \"wide\"").expect("write");
        let err = load_theme(&path).expect_err("should fail");
        assert!(matches!(err, Error::TomlDe { .. }));
    }
}
