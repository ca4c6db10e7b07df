//! Home screen: feed tabs plus the popular tags sidebar.

use std::future::Future;

use super::article_list::ArticleList;
use super::tags::TagList;
use crate::api::ArticleSource;
use crate::context::AppContext;
use crate::shared::Container;

pub const BANNER: &str = "A place to share your knowledge.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HomeTab {
    Feed,
    #[default]
    Global,
    Tag(String),
}

impl HomeTab {
    pub fn source(&self) -> ArticleSource {
        match self {
            HomeTab::Feed => ArticleSource::Feed,
            HomeTab::Global => ArticleSource::All,
            HomeTab::Tag(tag) => ArticleSource::Tag(tag.clone()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            HomeTab::Feed => "Your Feed".to_string(),
            HomeTab::Global => "Global Feed".to_string(),
            HomeTab::Tag(tag) => format!("#{}", tag),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HomeView {
    ctx: AppContext,
    pub tab: Container<HomeTab>,
    pub articles: ArticleList,
    pub tags: TagList,
}

impl HomeView {
    pub fn new(ctx: AppContext) -> Self {
        let tab = HomeTab::default();
        Self {
            articles: ArticleList::new(ctx.clone(), tab.source()),
            tags: TagList::new(ctx.clone()),
            tab: Container::new(tab),
            ctx,
        }
    }

    /// Load the article list for the current tab and the tags.
    pub fn mount(&self) -> impl Future<Output = ()> + Send + 'static {
        let articles = self.articles.load(self.tab.state().source(), 0);
        let tags = self.tags.load();
        async move {
            futures::join!(articles, tags);
        }
    }

    /// Tabs offered to the current user, in display order.
    pub fn tabs(&self) -> Vec<HomeTab> {
        let mut tabs = Vec::new();
        if self.ctx.current_user.with_state(|u| u.is_logged_in()) {
            tabs.push(HomeTab::Feed);
        }
        tabs.push(HomeTab::Global);
        if let HomeTab::Tag(tag) = self.tab.state() {
            tabs.push(HomeTab::Tag(tag));
        }
        tabs
    }

    /// Whether the guest banner is shown.
    pub fn shows_banner(&self) -> bool {
        !self.ctx.current_user.with_state(|u| u.is_logged_in())
    }

    /// Switch tabs; the article list restarts at the first page.
    ///
    /// Returns `None` for the feed tab while logged out.
    pub fn select_tab(&self, tab: HomeTab) -> Option<impl Future<Output = ()> + Send + 'static> {
        if tab == HomeTab::Feed && self.shows_banner() {
            return None;
        }
        tracing::debug!("Home tab: {}", tab.label());
        let source = tab.source();
        self.tab.set_state(tab);
        Some(self.articles.load(source, 0))
    }

    /// Cycle to the next offered tab.
    pub fn next_tab(&self) -> Option<impl Future<Output = ()> + Send + 'static> {
        let tabs = self.tabs();
        let current = self.tab.state();
        let index = tabs.iter().position(|t| *t == current).unwrap_or(0);
        let next = tabs.get((index + 1) % tabs.len().max(1))?.clone();
        self.select_tab(next)
    }

    pub fn unmount(&self) {
        self.articles.unmount();
        self.tags.unmount();
    }
}
