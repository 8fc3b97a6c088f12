//! Statistics gathered while annotating a trace.

use crate::core::timestamp::Timestamp;

/// What a single annotation pass saw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnnotationSummary {
    /// Number of touch events annotated
    pub event_count: usize,
    /// Timestamp of the first event
    pub first_time: Option<Timestamp>,
    /// Timestamp of the last event
    pub last_time: Option<Timestamp>,
    /// Events whose timestamp is earlier than their predecessor's
    pub negative_deltas: usize,
}

impl AnnotationSummary {
    /// Account for one annotated event.
    pub fn record(&mut self, time: Timestamp, delta: Timestamp) {
        if self.first_time.is_none() {
            self.first_time = Some(time);
        }
        self.last_time = Some(time);
        self.event_count += 1;
        if delta.is_negative() {
            self.negative_deltas += 1;
        }
    }

    /// Span between the first and last event, if any were seen.
    pub fn duration(&self) -> Option<Timestamp> {
        Some(self.last_time?.delta_since(self.first_time?))
    }

    /// Whether every timestamp was at least its predecessor's.
    pub fn is_monotonic(&self) -> bool {
        self.negative_deltas == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = AnnotationSummary::default();
        assert_eq!(summary.event_count, 0);
        assert_eq!(summary.duration(), None);
        assert!(summary.is_monotonic());
    }

    #[test]
    fn test_summary_counting() {
        let mut summary = AnnotationSummary::default();
        summary.record(Timestamp::Int(5), Timestamp::Int(5));
        summary.record(Timestamp::Int(12), Timestamp::Int(7));
        summary.record(Timestamp::Int(9), Timestamp::Int(-3));

        assert_eq!(summary.event_count, 3);
        assert_eq!(summary.first_time, Some(Timestamp::Int(5)));
        assert_eq!(summary.last_time, Some(Timestamp::Int(9)));
        assert_eq!(summary.duration(), Some(Timestamp::Int(4)));
        assert_eq!(summary.negative_deltas, 1);
        assert!(!summary.is_monotonic());
    }
}
