//! Ordered multicast callback registry with synchronous fan-out.
//!
//! # Design
//!
//! [`Event<T>`] holds listeners as boxed closures behind one uniform
//! signature, `FnMut(&mut T)`. [`Event::trigger`] walks the list in
//! registration order, handing every listener the *same* mutable reference:
//! a listener may mutate the value, and later listeners in the same fan-out
//! observe that mutation. Listeners are never given independent snapshots.
//!
//! # Invariants
//!
//! 1. Listeners run in registration order.
//! 2. The listener list only grows; there is no removal operation.
//! 3. `trigger` on an empty event is a no-op.
//! 4. Each listener runs exactly once per `trigger`.
//!
//! # Failure Modes
//!
//! - **Unbounded growth**: nothing deduplicates or prunes listeners. An
//!   event that keeps receiving registrations keeps all of them for its
//!   whole lifetime.
//! - **Re-entrant registration**: calling `register` on the same event from
//!   inside a listener would need a second `&mut` borrow and does not
//!   compile. The list cannot be corrupted mid-fan-out.

use tracing::trace;

/// Uniform storage for one listener.
type Listener<T> = Box<dyn FnMut(&mut T)>;

/// An ordered collection of listeners for values of type `T`, triggered
/// synchronously.
///
/// An `Event` is created empty and is owned by exactly one party (typically
/// a property); it is never shared. Dropping the owner drops the event and
/// every listener in it, with no final notification.
pub struct Event<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Event<T> {
    /// Create an event with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append `listener` to the fan-out list.
    ///
    /// The listener is moved into the event's storage and will be called,
    /// in registration order, on every subsequent [`trigger`](Self::trigger).
    /// There is no way to remove it afterwards.
    pub fn register(&mut self, listener: impl FnMut(&mut T) + 'static) {
        self.listeners.push(Box::new(listener));
        trace!(listeners = self.listeners.len(), "listener registered");
    }

    /// Invoke every listener in registration order, passing `value`.
    ///
    /// All listeners share the one `&mut T`; mutations made by a listener
    /// are visible to the listeners after it. With no listeners this is a
    /// no-op.
    pub fn trigger(&mut self, value: &mut T) {
        if self.listeners.is_empty() {
            return;
        }
        trace!(listeners = self.listeners.len(), "event fan-out");
        for listener in &mut self.listeners {
            listener(value);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
