//! Minimal single-threaded event emitter.

use std::fmt;

/// Handle returned by [`Emitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Listener callback stored by an [`Emitter`].
pub type Listener<T> = Box<dyn FnMut(&T)>;

/// Fans an event out to every subscribed listener, in subscription order.
///
/// Once disposed, an emitter drops its listeners and ignores further
/// subscriptions and fires.
pub struct Emitter<T> {
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
    disposed: bool,
}

impl<T> Emitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
            disposed: false,
        }
    }

    /// Register a listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        if self.disposed {
            tracing::warn!(?id, "subscribing to a disposed emitter");
            return id;
        }

        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener.
    pub fn fire(&mut self, event: &T) {
        if self.disposed {
            tracing::warn!("firing a disposed emitter");
            return;
        }
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Drop all listeners and stop delivering events.
    pub fn dispose(&mut self) {
        self.listeners.clear();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
