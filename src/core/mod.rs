//! Core functionality for the touch trace annotator.
//!
//! This module contains:
//! - Numeric timestamp handling
//! - Delta annotation of touch event sequences
//! - Summary statistics for an annotation pass
//! - Sorted, indented rendering of the result

pub mod annotate;
pub mod render;
pub mod summary;
pub mod timestamp;

// Re-export commonly used items
pub use annotate::{annotate, compute_deltas};
pub use render::{render, sort_keys};
pub use summary::AnnotationSummary;
pub use timestamp::Timestamp;
