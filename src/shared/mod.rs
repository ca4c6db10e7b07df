//! Shared state primitives.
//!
//! Two publish/subscribe building blocks keep independently rendered views in
//! sync without a common parent:
//!
//! - [`Container`] - holds one value, notifies listeners on every replacement
//! - [`EventChannel`] - stateless fire-and-forget broadcast of a payload
//!
//! Both keep their listeners in a [`ListenerList`] that is replaced on write:
//! a dispatch iterates the snapshot taken when it started, so listeners added
//! or removed while a round is running only affect the next round.

pub mod container;
pub mod current_user;
pub mod event;

pub use container::Container;
pub use current_user::CurrentUser;
pub use event::EventChannel;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifies one registered listener within its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered, copy-on-write list of listeners.
pub(crate) struct ListenerList<F: ?Sized> {
    next_id: AtomicU64,
    entries: Mutex<Arc<Vec<(ListenerId, Arc<F>)>>>,
}

impl<F: ?Sized> ListenerList<F> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            entries: Mutex::new(Arc::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Arc<Vec<(ListenerId, Arc<F>)>>> {
        // A listener panicking elsewhere must not wedge the list.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn add(&self, listener: Arc<F>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut entries = self.lock();
        let mut next: Vec<_> = entries.iter().cloned().collect();
        next.push((id, listener));
        *entries = Arc::new(next);
        id
    }

    /// Removing an unknown or already removed id is a no-op.
    pub(crate) fn remove(&self, id: ListenerId) {
        let mut entries = self.lock();
        if !entries.iter().any(|(existing, _)| *existing == id) {
            return;
        }
        let next: Vec<_> = entries
            .iter()
            .filter(|(existing, _)| *existing != id)
            .cloned()
            .collect();
        *entries = Arc::new(next);
    }

    /// The listeners registered right now, in subscription order.
    pub(crate) fn snapshot(&self) -> Arc<Vec<(ListenerId, Arc<F>)>> {
        Arc::clone(&self.lock())
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Handle returned by `add_listener`.
///
/// Calling [`Subscription::unsubscribe`] removes exactly the listener it was
/// created for; calling it again does nothing. Dropping the handle does *not*
/// unsubscribe, the listener stays registered for the lifetime of its source.
pub struct Subscription {
    id: ListenerId,
    remove: Box<dyn Fn(ListenerId) + Send + Sync>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, remove: Box<dyn Fn(ListenerId) + Send + Sync>) -> Self {
        Self { id, remove }
    }

    /// The id of the listener this handle controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn unsubscribe(&self) {
        (self.remove)(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// A group of subscriptions released together, e.g. when a screen unmounts.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn extend(&mut self, subscriptions: impl IntoIterator<Item = Subscription>) {
        self.subscriptions.extend(subscriptions);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Unsubscribe everything and empty the set.
    pub fn unsubscribe_all(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
    }
}
