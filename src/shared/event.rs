//! Stateless broadcast channel.

use std::sync::{Arc, Weak};

use super::{ListenerId, ListenerList, Subscription};

type Listener<T> = dyn Fn(&T) + Send + Sync;

/// Fire-and-forget publish/subscribe channel.
///
/// Nothing is retained: a payload triggered while nobody listens is dropped,
/// and a listener added after a `trigger` never observes that payload.
pub struct EventChannel<T> {
    listeners: Arc<ListenerList<Listener<T>>>,
}

impl<T> Clone for EventChannel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T: 'static> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> EventChannel<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(ListenerList::new()),
        }
    }

    /// Deliver `payload` to the listeners registered at the time of the call.
    pub fn trigger(&self, payload: T) {
        let listeners = self.listeners.snapshot();
        for (_, listener) in listeners.iter() {
            listener(&payload);
        }
    }

    pub fn add_listener<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.listeners.add(Arc::new(listener));
        let weak: Weak<ListenerList<Listener<T>>> = Arc::downgrade(&self.listeners);
        Subscription::new(
            id,
            Box::new(move |id| {
                if let Some(listeners) = weak.upgrade() {
                    listeners.remove(id);
                }
            }),
        )
    }

    pub fn remove_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> std::fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
