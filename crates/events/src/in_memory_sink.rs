//! In-memory event sink for tests/dev.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::envelope::EventEnvelope;
use crate::event::Event;
use crate::sink::EventSink;

/// Records every emitted event, in order, wrapped in an [`EventEnvelope`].
///
/// - No IO
/// - Sequence numbers start at 1
/// - A poisoned lock is recovered rather than dropping events
#[derive(Debug)]
pub struct InMemoryEventSink<E> {
    state: Mutex<Recorded<E>>,
}

#[derive(Debug)]
struct Recorded<E> {
    emitted: u64,
    envelopes: Vec<EventEnvelope<E>>,
}

impl<E> InMemoryEventSink<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().envelopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().envelopes.is_empty()
    }

    /// Remove and return everything recorded so far.
    ///
    /// Sequence numbering continues from where it left off.
    pub fn drain(&self) -> Vec<EventEnvelope<E>> {
        std::mem::take(&mut self.lock().envelopes)
    }
}

impl<E: Clone> InMemoryEventSink<E> {
    /// Snapshot of recorded payloads.
    pub fn events(&self) -> Vec<E> {
        self.lock().envelopes.iter().map(|e| e.payload().clone()).collect()
    }

    /// Snapshot of recorded envelopes.
    pub fn envelopes(&self) -> Vec<EventEnvelope<E>> {
        self.lock().envelopes.clone()
    }

    pub fn last(&self) -> Option<E> {
        self.lock().envelopes.last().map(|e| e.payload().clone())
    }
}

impl<E> Default for InMemoryEventSink<E> {
    fn default() -> Self {
        Self {
            state: Mutex::new(Recorded {
                emitted: 0,
                envelopes: Vec::new(),
            }),
        }
    }
}

impl<E: Event> EventSink<E> for InMemoryEventSink<E> {
    fn emit(&self, event: E) {
        let mut state = self.lock();
        state.emitted += 1;
        let sequence_number = state.emitted;
        state.envelopes.push(EventEnvelope::new(
            sequence_number,
            event.event_type(),
            Utc::now(),
            event,
        ));
    }
}
