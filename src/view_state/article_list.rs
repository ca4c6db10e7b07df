//! Paged article list shared by the home and profile screens.

use std::future::Future;

use super::load_state::{LoadState, RequestGeneration};
use super::optimistic::optimistic;
use super::pagination::Pagination;
use crate::api::ArticleSource;
use crate::context::AppContext;
use crate::models::Article;
use crate::shared::{Container, Subscription};

pub const ARTICLES_UNAVAILABLE: &str = "Articles not available right now...";
pub const NO_ARTICLES: &str = "No articles are here... yet.";
pub const FAVORITE_FAILED: &str = "Favorite failed.";
pub const UNFAVORITE_FAILED: &str = "Unfavorite failed.";

/// One fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListState {
    pub source: ArticleSource,
    /// Zero-based page being shown or loaded.
    pub page: u32,
    pub articles: LoadState<ArticlePage>,
    /// Row highlighted in the terminal list.
    pub selected: usize,
}

impl ArticleListState {
    pub fn pagination(&self) -> Option<Pagination> {
        self.articles
            .loaded()
            .map(|page| Pagination::new(self.page, page.total_count, self.source.page_size()))
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles
            .loaded()
            .and_then(|page| page.articles.get(self.selected))
    }
}

#[derive(Clone, Debug)]
pub struct ArticleList {
    ctx: AppContext,
    pub state: Container<ArticleListState>,
    generation: RequestGeneration,
}

impl ArticleList {
    pub fn new(ctx: AppContext, source: ArticleSource) -> Self {
        Self {
            ctx,
            state: Container::new(ArticleListState {
                source,
                page: 0,
                articles: LoadState::Loading,
                selected: 0,
            }),
            generation: RequestGeneration::new(),
        }
    }

    /// Switch to `source`/`page` and fetch it.
    ///
    /// The state flips to `Loading` before this returns; the future applies
    /// the answer unless a newer load started or the list was unmounted.
    pub fn load(&self, source: ArticleSource, page: u32) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.generation.begin();
        self.state.set_state(ArticleListState {
            source: source.clone(),
            page,
            articles: LoadState::Loading,
            selected: 0,
        });

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        async move {
            let result = api.list_articles(&source, page).await;
            if !generation.is_current(ticket) {
                tracing::debug!("Dropping stale article page {} for {:?}", page, source);
                return;
            }
            let articles = match result {
                Ok(response) if response.articles_count == 0 => LoadState::Empty,
                Ok(response) => LoadState::Loaded(ArticlePage {
                    articles: response.articles,
                    total_count: response.articles_count,
                }),
                Err(e) => {
                    tracing::warn!("Loading articles failed: {}", e);
                    LoadState::Failed(ARTICLES_UNAVAILABLE.to_string())
                }
            };
            state.update(|s| s.articles = articles);
        }
    }

    /// Reload the current source and page.
    pub fn reload(&self) -> impl Future<Output = ()> + Send + 'static {
        let (source, page) = self.state.with_state(|s| (s.source.clone(), s.page));
        self.load(source, page)
    }

    /// Jump to another page of the current source. `None` if out of range.
    pub fn go_to_page(&self, page: u32) -> Option<impl Future<Output = ()> + Send + 'static> {
        let (source, pagination) = self.state.with_state(|s| (s.source.clone(), s.pagination()));
        let pagination = pagination?;
        if page >= pagination.page_count() {
            return None;
        }
        Some(self.load(source, page))
    }

    pub fn select_next(&self) {
        self.state.update(|s| {
            let len = s.articles.loaded().map_or(0, |page| page.articles.len());
            if s.selected + 1 < len {
                s.selected += 1;
            }
        });
    }

    pub fn select_previous(&self) {
        self.state.update(|s| s.selected = s.selected.saturating_sub(1));
    }

    /// Flip the favorite state of `slug` right away and confirm it with the
    /// server.
    ///
    /// Returns `None` when the article is not on the current page.
    pub fn toggle_favorite(&self, slug: &str) -> Option<impl Future<Output = ()> + Send + 'static> {
        let before = self.state.with_state(|s| {
            s.articles
                .loaded()
                .and_then(|page| page.articles.iter().find(|a| a.slug == slug))
                .map(|a| (a.favorited, a.favorites_count))
        })?;
        let (was_favorited, previous_count) = before;

        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let slug_owned = slug.to_string();
        let revert_slug = slug.to_string();
        let action = async move {
            if was_favorited {
                api.unfavorite(&slug_owned).await
            } else {
                api.favorite(&slug_owned).await
            }
        };

        let pending = optimistic(
            &self.state,
            |s: &mut ArticleListState| {
                if let Some(article) = find_article(s, slug) {
                    article.toggle_favorite();
                }
            },
            move |s: &mut ArticleListState| {
                if let Some(article) = find_article(s, &revert_slug) {
                    article.favorited = was_favorited;
                    article.favorites_count = previous_count;
                }
            },
            action,
            move |_| {
                ctx.notify(if was_favorited {
                    UNFAVORITE_FAILED
                } else {
                    FAVORITE_FAILED
                })
            },
        );
        Some(async move {
            let _ = pending.await;
        })
    }

    /// Drop every in-flight load.
    pub fn unmount(&self) {
        self.generation.invalidate();
    }

    /// Re-render whenever the list changes.
    pub fn observe(&self, on_change: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.state.add_listener(on_change)
    }
}

fn find_article<'a>(state: &'a mut ArticleListState, slug: &str) -> Option<&'a mut Article> {
    state
        .articles
        .loaded_mut()
        .and_then(|page| page.articles.iter_mut().find(|a| a.slug == slug))
}
