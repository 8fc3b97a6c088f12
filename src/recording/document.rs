//! Loading recorded touch traces and locating their events.
//!
//! A recording is kept as an untyped JSON tree so that every field the
//! annotator does not touch survives the round trip unchanged.

use crate::config::Config;
use crate::error::{AnnotateError, SchemaError};
use serde_json::Value;
use std::path::Path;

/// A parsed recording document.
pub type Document = Value;

/// Read and parse the recording at `path`.
///
/// The file is read to completion and closed before parsing begins.
pub fn load_document(path: &Path) -> Result<Document, AnnotateError> {
    let content = std::fs::read_to_string(path).map_err(|source| AnnotateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Document =
        serde_json::from_str(&content).map_err(|source| AnnotateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded recording");
    Ok(document)
}

/// Borrow the touch event array of a document.
pub fn touch_events_mut<'a>(
    document: &'a mut Document,
    config: &Config,
) -> Result<&'a mut Vec<Value>, SchemaError> {
    let root = document.as_object_mut().ok_or(SchemaError::NotAnObject)?;

    match root.get_mut(&config.touch_data_key) {
        Some(Value::Array(events)) => Ok(events),
        Some(_) => Err(SchemaError::TouchDataNotArray {
            key: config.touch_data_key.clone(),
        }),
        None => Err(SchemaError::MissingTouchData {
            key: config.touch_data_key.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_load_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"touchData": [], "entryScene": "Main"}}"#).unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document["entryScene"], "Main");
        assert_eq!(document["touchData"], json!([]));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AnnotateError::FileAccess { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"touchData\": [").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, AnnotateError::Parse { .. }));
    }

    #[test]
    fn test_touch_events_lookup() {
        let config = Config::default();

        let mut document = json!({"touchData": [{"timeSinceStart": 1}]});
        assert_eq!(touch_events_mut(&mut document, &config).unwrap().len(), 1);

        let mut document = json!([1, 2, 3]);
        assert_eq!(
            touch_events_mut(&mut document, &config),
            Err(SchemaError::NotAnObject)
        );

        let mut document = json!({"recordings": []});
        assert!(matches!(
            touch_events_mut(&mut document, &config),
            Err(SchemaError::MissingTouchData { .. })
        ));

        let mut document = json!({"touchData": {"timeSinceStart": 1}});
        assert!(matches!(
            touch_events_mut(&mut document, &config),
            Err(SchemaError::TouchDataNotArray { .. })
        ));
    }
}
