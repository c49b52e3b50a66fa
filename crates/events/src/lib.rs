//! Ledger event plumbing: the `Event` contract and the sinks that receive events.
//!
//! Domain crates emit events into an [`EventSink`]; how they are rendered
//! (logs, test recordings, JSON dumps) is decided by whoever owns the sink.

pub mod envelope;
pub mod event;
pub mod in_memory_sink;
pub mod sink;
pub mod tracing_sink;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_sink::InMemoryEventSink;
pub use sink::{EventSink, NullSink};
pub use tracing_sink::TracingEventSink;

#[cfg(test)]
pub(crate) mod testing {
    use crate::Event;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Ping(pub u32);

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn version(&self) -> u32 {
            1
        }
    }

    impl core::fmt::Display for Ping {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "ping #{}", self.0)
        }
    }
}
