//! Application telemetry events and sinks.
//!
//! The controller records the outcome of every server-mutating action and
//! each reveal so operators can see how often requests fail and how far
//! readers page through reviews.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the review page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The site confirmed a review deletion.
    ReviewDeleted {
        /// Identifier of the deleted review.
        review_id: u64,
    },
    /// A deletion request failed and the review was restored.
    ReviewDeleteFailed {
        /// Identifier of the review.
        review_id: u64,
        /// Failure detail.
        message: String,
    },
    /// The site accepted a flag.
    ReviewFlagged {
        /// Identifier of the flagged review.
        review_id: u64,
        /// Short name of the submitted reason.
        reason: String,
    },
    /// A flag request failed and the report control was restored.
    ReviewFlagFailed {
        /// Identifier of the review.
        review_id: u64,
        /// Failure detail.
        message: String,
    },
    /// A "load more" activation revealed reviews.
    ReviewsRevealed {
        /// Number of reviews revealed by this activation.
        revealed: usize,
        /// Cursor position after the reveal.
        visible: usize,
        /// Reviews known on the page.
        total: usize,
    },
    /// No hidden reviews remain on the page.
    RevealExhausted {
        /// Reviews known on the page.
        total: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::ReviewDeleted { review_id: 12 });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::ReviewDeleted { review_id: 12 }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::RevealExhausted { total: 12 };

        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            json,
            serde_json::json!({"type": "reveal_exhausted", "total": 12})
        );
    }
}
