//! Error types for the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the conversion pipeline
///
/// Every failure aborts the run; there is no retry or partial output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid or missing configuration, raised before any file I/O
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Source image could not be read or decoded
    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Source image decoded to an empty pixel grid
    #[error("image '{}' has zero area", path.display())]
    ZeroArea { path: PathBuf },

    /// Output destination could not be written
    #[error("failed to write output '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        RenderError::Config {
            message: message.into(),
        }
    }
}
