//! Loading lifecycle of a fetched resource and stale-result protection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// What a view currently knows about a resource it fetches.
///
/// A view starts in `Loading`, settles in one of the other three states, and
/// may go back to `Loading` when it reloads (page change, tab change, the
/// comment list changing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    /// The fetch failed; the message is shown in place of the content.
    Failed(String),
    /// The fetch succeeded but there is nothing to show.
    Empty,
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            LoadState::Loading | LoadState::Failed(_) | LoadState::Empty => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            LoadState::Loading | LoadState::Failed(_) | LoadState::Empty => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            LoadState::Loading | LoadState::Empty | LoadState::Loaded(_) => None,
        }
    }
}

/// Proof that a request was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Per-view request counter.
///
/// Every load takes a [`Ticket`] with [`begin`](Self::begin); when the
/// response arrives it is applied only if no newer load started and the view
/// was not torn down in between. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Discard every in-flight request, e.g. when the view unmounts.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_accessors() {
        let loaded = LoadState::Loaded(3);
        assert_eq!(loaded.loaded(), Some(&3));
        assert!(!loaded.is_loading());

        let failed: LoadState<u8> = LoadState::Failed("nope".into());
        assert_eq!(failed.error(), Some("nope"));
        assert_eq!(failed.loaded(), None);

        assert!(LoadState::<u8>::default().is_loading());
    }

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_discards_in_flight() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_clones_share_counter() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.clone().invalidate();
        assert!(!generation.is_current(ticket));
    }
}
