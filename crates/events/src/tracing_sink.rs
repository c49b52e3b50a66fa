//! Event sink that renders events through `tracing`.

use core::fmt::Display;

use crate::event::Event;
use crate::sink::EventSink;

/// Logs each event at `INFO` with its type and human-readable rendering.
///
/// This is the console notification channel: install a subscriber (see
/// `bankledger-observability`) to see the output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl<E> EventSink<E> for TracingEventSink
where
    E: Event + Display,
{
    fn emit(&self, event: E) {
        tracing::info!(
            event_type = event.event_type(),
            event_version = event.version(),
            "{event}"
        );
    }
}
