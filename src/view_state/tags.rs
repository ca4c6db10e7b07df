//! Popular tags sidebar.

use std::future::Future;

use super::load_state::{LoadState, RequestGeneration};
use crate::context::AppContext;
use crate::shared::Container;

pub const LOADING_TAGS: &str = "Loading Tags...";
pub const TAGS_UNAVAILABLE: &str = "Tags not available right now...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagListState {
    pub tags: LoadState<Vec<String>>,
    pub selected: usize,
}

impl TagListState {
    pub fn selected_tag(&self) -> Option<&str> {
        self.tags
            .loaded()
            .and_then(|tags| tags.get(self.selected))
            .map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct TagList {
    ctx: AppContext,
    pub state: Container<TagListState>,
    generation: RequestGeneration,
}

impl TagList {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: Container::new(TagListState::default()),
            generation: RequestGeneration::new(),
        }
    }

    pub fn load(&self) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.generation.begin();
        self.state.set_state(TagListState::default());

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        async move {
            let result = api.list_tags().await;
            if !generation.is_current(ticket) {
                return;
            }
            let tags = match result {
                Ok(tags) if tags.is_empty() => LoadState::Empty,
                Ok(tags) => LoadState::Loaded(tags),
                Err(e) => {
                    tracing::warn!("Loading tags failed: {}", e);
                    LoadState::Failed(TAGS_UNAVAILABLE.to_string())
                }
            };
            state.set_state(TagListState { tags, selected: 0 });
        }
    }

    pub fn select_next(&self) {
        self.state.update(|s| {
            let len = s.tags.loaded().map_or(0, Vec::len);
            if s.selected + 1 < len {
                s.selected += 1;
            }
        });
    }

    pub fn select_previous(&self) {
        self.state.update(|s| s.selected = s.selected.saturating_sub(1));
    }

    pub fn unmount(&self) {
        self.generation.invalidate();
    }
}
