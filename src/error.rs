//! Error types for DFC Data Table
//!
//! Rendering is infallible; errors only come from loading and saving the
//! table theme configuration.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error while touching a config file
    #[snafu(display("IO error on {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML deserialization error
    #[snafu(display("TOML parse error in {}: {source}", path.display()))]
    TomlDe {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
