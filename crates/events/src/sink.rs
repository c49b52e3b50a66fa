//! Event delivery abstraction (mechanics only).
//!
//! An [`EventSink`] is the collaborator a ledger hands its notifications to.
//! The contract is deliberately small:
//!
//! - **Synchronous**: `emit` returns once the sink has taken the event.
//! - **Infallible**: a sink never fails the operation that produced the event.
//!   Operations emit only after their state change has been applied.
//! - **Ordered**: events arrive in the order they were emitted.
//!
//! ```ignore
//! let sink = InMemoryEventSink::new();
//! let mut ledger = Ledger::new(&sink);
//! ledger.add_customer("John Doe", 1000.0)?;
//! assert_eq!(sink.len(), 1);
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// Receiver of events of type `E`.
///
/// Takes `&self` so one sink can be shared between a ledger and the code
/// inspecting it. Sinks that need mutable state use interior mutability.
pub trait EventSink<E> {
    fn emit(&self, event: E);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullSink;

impl<E> EventSink<E> for NullSink {
    fn emit(&self, _event: E) {}
}

impl<E, S> EventSink<E> for &S
where
    S: EventSink<E> + ?Sized,
{
    fn emit(&self, event: E) {
        (**self).emit(event)
    }
}

impl<E, S> EventSink<E> for Arc<S>
where
    S: EventSink<E> + ?Sized,
{
    fn emit(&self, event: E) {
        (**self).emit(event)
    }
}

impl<E, S> EventSink<E> for Rc<S>
where
    S: EventSink<E> + ?Sized,
{
    fn emit(&self, event: E) {
        (**self).emit(event)
    }
}

impl<E, S> EventSink<E> for Box<S>
where
    S: EventSink<E> + ?Sized,
{
    fn emit(&self, event: E) {
        (**self).emit(event)
    }
}

/// Fan-out: every event goes to `A`, then to `B`.
impl<E, A, B> EventSink<E> for (A, B)
where
    E: Clone,
    A: EventSink<E>,
    B: EventSink<E>,
{
    fn emit(&self, event: E) {
        self.0.emit(event.clone());
        self.1.emit(event);
    }
}
