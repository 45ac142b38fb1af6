//! Signal/slot system for slidein.
//!
//! A type-safe, Qt-inspired signal/slot mechanism. The transition engine
//! emits signals when its state changes (progress updates, completion) and
//! connected slots (callbacks) are invoked in response. This replaces the
//! delegate-protocol wiring a host toolkit would otherwise require: hosts
//! register plain closures instead of implementing delegate objects.
//!
//! All gesture samples and animation ticks are delivered on one logical UI
//! thread, so slots are always invoked directly in the emitting thread.
//!
//! # Example
//!
//! ```
//! use slidein_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello, World!".to_string());
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(&Args)>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with the
/// provided arguments, in the emitting thread.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Connect a slot and return an RAII guard that disconnects on drop.
    pub fn connect_guarded<F>(self: &Arc<Self>, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            signal: Arc::clone(self),
            id,
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in order.
    ///
    /// If the signal is blocked, this does nothing.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(
                target: crate::logging::targets::SIGNAL,
                "signal blocked, skipping emit"
            );
            return;
        }

        // Snapshot the slots so a slot may connect/disconnect reentrantly
        // without deadlocking on the connections lock.
        let slots: Vec<Arc<dyn Fn(&Args)>> = self
            .connections
            .lock()
            .iter()
            .map(|(_, conn)| Arc::clone(&conn.slot))
            .collect();

        tracing::trace!(
            target: crate::logging::targets::SIGNAL,
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

/// RAII guard for a signal connection.
///
/// Disconnects the slot when dropped.
pub struct ConnectionGuard<Args> {
    signal: Arc<Signal<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The connection ID held by this guard.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&received);
        signal.connect(move |n| sink.borrow_mut().push(*n));

        signal.emit(1);
        signal.emit(2);
        assert_eq!(*received.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let id = signal.connect(move |_| *sink.borrow_mut() += 1);

        signal.emit(());
        assert!(signal.disconnect(id));
        signal.emit(());

        assert_eq!(*count.borrow(), 1);
        // Second disconnect of the same ID is a no-op.
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<i32>::new();
        let total = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let sink = Rc::clone(&total);
            signal.connect(move |n| *sink.borrow_mut() += n);
        }
        assert_eq!(signal.connection_count(), 3);

        signal.emit(5);
        assert_eq!(*total.borrow(), 15);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_blocked() {
        let signal = Signal::<()>::new();
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        signal.connect(move |_| *sink.borrow_mut() += 1);

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(());
        assert_eq!(*count.borrow(), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Rc::new(RefCell::new(0));

        {
            let sink = Rc::clone(&count);
            let _guard = signal.connect_guarded(move |_| *sink.borrow_mut() += 1);
            signal.emit(());
        }
        // Guard dropped, slot disconnected.
        signal.emit(());
        assert_eq!(*count.borrow(), 1);
        assert_eq!(signal.connection_count(), 0);
    }
}
