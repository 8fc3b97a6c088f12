//! Error types for touch trace annotation.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort an annotation run.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The input file could not be opened or read.
    #[error("cannot read {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document does not have the shape the annotator needs.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The annotated document could not be serialized.
    #[error("failed to render document")]
    Render(#[source] serde_json::Error),
}

/// The document is valid JSON but a required field is missing or mistyped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("top-level value is not an object")]
    NotAnObject,

    #[error("document has no `{key}` field")]
    MissingTouchData { key: String },

    #[error("`{key}` is not an array")]
    TouchDataNotArray { key: String },

    #[error("touch event {index} is not an object")]
    EventNotObject { index: usize },

    #[error("touch event {index} has no `{key}` field")]
    MissingTime { index: usize, key: String },

    #[error("touch event {index}: `{key}` is not a number")]
    NonNumericTime { index: usize, key: String },

    /// Float subtraction overflowed to infinity.
    #[error("touch event {index}: time delta is not a finite number")]
    NonFiniteDelta { index: usize },
}
