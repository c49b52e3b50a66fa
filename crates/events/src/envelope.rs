use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope for a recorded event.
///
/// Notes:
/// - `sequence_number` starts at 1 and increases by one per recorded event.
/// - `recorded_at` is wall-clock time at the moment the sink took the event.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    sequence_number: u64,
    event_type: String,
    recorded_at: DateTime<Utc>,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        sequence_number: u64,
        event_type: impl Into<String>,
        recorded_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            sequence_number,
            event_type: event_type.into(),
            recorded_at,
            payload,
        }
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
