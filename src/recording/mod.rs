//! Recording input for the touch trace annotator.
//!
//! This module reads recorded touch traces from disk and exposes the
//! touch event sequence for annotation.

pub mod document;

// Re-export commonly used items
pub use document::{load_document, touch_events_mut, Document};
