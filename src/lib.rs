//! Touch Trace Annotator - per-event time deltas for recorded touch input.
//!
//! A recording stores each touch event with its absolute `timeSinceStart`.
//! This library adds a `timeDelta` field to every event holding the time
//! elapsed since the previous event (the first event is measured from zero)
//! and renders the document back as sorted, indented JSON.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │  Recording  │──▶│  Annotate   │──▶│   Render    │──▶ stdout
//! │   (load)    │   │  (deltas)   │   │  (sorted)   │
//! └─────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use touch_trace_annotator::{annotate, Config};
//!
//! let mut document = json!({"touchData": [{"timeSinceStart": 5}, {"timeSinceStart": 12}]});
//! annotate(&mut document, &Config::default()).unwrap();
//! assert_eq!(document["touchData"][1]["timeDelta"], 7);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod recording;

use std::path::Path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError};
pub use crate::core::{annotate, render, AnnotationSummary, Timestamp};
pub use error::{AnnotateError, SchemaError};
pub use recording::{load_document, Document};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// An annotated recording, rendered and ready to print.
#[derive(Debug, Clone)]
pub struct Annotated {
    pub text: String,
    pub summary: AnnotationSummary,
}

/// Load, annotate and render the recording at `path`.
pub fn annotate_file(path: &Path, config: &Config) -> Result<Annotated, AnnotateError> {
    let mut document = load_document(path)?;
    let summary = annotate(&mut document, config)?;
    let text = render(&document, config)?;
    Ok(Annotated { text, summary })
}
