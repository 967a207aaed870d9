//! Error types for the site binary

use std::path::PathBuf;

use folio_core::SplashError;
use folio_logging::LoggingError;
use thiserror::Error;

/// Errors raised while loading configuration or starting up
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid splash settings: {0}")]
    Splash(#[from] SplashError),

    #[error("Section id must not be empty (section titled '{0}')")]
    EmptySectionId(String),

    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),
}

/// Result type for site operations
pub type SiteResult<T> = Result<T, SiteError>;
