//! Single-value observable container.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::{ListenerId, ListenerList, Subscription};

type Listener = dyn Fn() + Send + Sync;

struct Inner<S> {
    state: Mutex<S>,
    listeners: ListenerList<Listener>,
}

/// Holds exactly one value and tells its listeners whenever it is replaced.
///
/// `Container` is a cheap handle: clones share the same value and listener
/// list. Every [`set_state`](Container::set_state) replaces the value
/// wholesale and runs all listeners registered at that moment, in
/// subscription order, before returning. There is no diffing: setting an
/// equal value still notifies.
///
/// # Example
///
/// ```
/// use conduit::shared::Container;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let counter = Container::new(0);
/// let seen = Arc::new(AtomicUsize::new(0));
/// let seen_in_listener = Arc::clone(&seen);
/// let subscription = counter.add_listener(move || {
///     seen_in_listener.fetch_add(1, Ordering::SeqCst);
/// });
///
/// counter.set_state(1);
/// assert_eq!(counter.state(), 1);
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
///
/// subscription.unsubscribe();
/// counter.set_state(2);
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub struct Container<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for Container<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone + Send + 'static> Container<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(initial),
                listeners: ListenerList::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A copy of the value most recently passed to `set_state`.
    pub fn state(&self) -> S {
        self.lock().clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// The closure must not call back into this container.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock())
    }

    /// Replace the value and notify every listener.
    pub fn set_state(&self, state: S) {
        {
            let mut guard = self.lock();
            *guard = state;
        }
        self.notify();
    }

    /// Clone the current value, mutate the clone and store it via `set_state`.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        let mut next = self.state();
        f(&mut next);
        self.set_state(next);
    }

    pub fn add_listener<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.listeners.add(Arc::new(listener));
        let weak: Weak<Inner<S>> = Arc::downgrade(&self.inner);
        Subscription::new(
            id,
            Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    inner.listeners.remove(id);
                }
            }),
        )
    }

    /// Idempotent: removing an unknown listener is a no-op.
    pub fn remove_listener(&self, id: ListenerId) {
        self.inner.listeners.remove(id);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    fn notify(&self) {
        let listeners = self.inner.listeners.snapshot();
        for (_, listener) in listeners.iter() {
            listener();
        }
    }
}

impl<S: Clone + Send + std::fmt::Debug + 'static> std::fmt::Debug for Container<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("state", &self.state())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
