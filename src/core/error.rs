//! Error types for grove

use thiserror::Error;

/// Main error type for the crate.
///
/// Generation itself never fails; these cover the edges where configs and
/// forests are read from or written to disk.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
