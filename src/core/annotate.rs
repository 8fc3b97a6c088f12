//! Time delta annotation for touch event sequences.

use crate::config::Config;
use crate::core::summary::AnnotationSummary;
use crate::core::timestamp::Timestamp;
use crate::error::{AnnotateError, SchemaError};
use crate::recording::{touch_events_mut, Document};
use serde_json::{Number, Value};

/// Differences between consecutive timestamps, the first taken against zero.
pub fn compute_deltas(times: &[Timestamp]) -> Vec<Timestamp> {
    times
        .iter()
        .scan(Timestamp::ZERO, |previous, &time| {
            let delta = time.delta_since(*previous);
            *previous = time;
            Some(delta)
        })
        .collect()
}

/// Add a delta field to every touch event of `document`.
///
/// Every event is checked before any is modified, so on error the document
/// is left as it was loaded.
pub fn annotate(
    document: &mut Document,
    config: &Config,
) -> Result<AnnotationSummary, AnnotateError> {
    config.validate()?;
    let events = touch_events_mut(document, config)?;

    let times = events
        .iter()
        .enumerate()
        .map(|(index, event)| event_time(index, event, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = AnnotationSummary::default();
    let mut numbers = Vec::with_capacity(times.len());
    for (index, (&time, delta)) in times.iter().zip(compute_deltas(&times)).enumerate() {
        let number = delta
            .to_number()
            .ok_or(SchemaError::NonFiniteDelta { index })?;
        if delta.is_negative() {
            tracing::warn!(index, delta = %number, "touch event timestamp went backwards");
        }
        summary.record(time, delta);
        numbers.push(number);
    }

    let annotated: Vec<Value> = std::mem::take(events)
        .into_iter()
        .zip(numbers)
        .map(|(event, delta)| with_delta(event, &config.delta_key, delta))
        .collect();
    *events = annotated;

    tracing::debug!(
        events = summary.event_count,
        negative_deltas = summary.negative_deltas,
        "annotated touch events"
    );
    Ok(summary)
}

fn event_time(index: usize, event: &Value, config: &Config) -> Result<Timestamp, SchemaError> {
    let fields = event
        .as_object()
        .ok_or(SchemaError::EventNotObject { index })?;
    let value = fields
        .get(&config.time_key)
        .ok_or_else(|| SchemaError::MissingTime {
            index,
            key: config.time_key.clone(),
        })?;
    Timestamp::from_value(value).ok_or_else(|| SchemaError::NonNumericTime {
        index,
        key: config.time_key.clone(),
    })
}

fn with_delta(mut event: Value, key: &str, delta: Number) -> Value {
    if let Value::Object(fields) = &mut event {
        fields.insert(key.to_string(), Value::Number(delta));
    }
    event
}
