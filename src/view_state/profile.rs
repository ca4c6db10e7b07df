//! Profile page: author card, follow toggle and article tabs.

use std::future::Future;

use super::article_list::ArticleList;
use super::load_state::{LoadState, RequestGeneration};
use super::optimistic::optimistic;
use crate::api::ArticleSource;
use crate::context::AppContext;
use crate::models::Profile;
use crate::shared::Container;

pub const PROFILE_FAILED: &str = "Error while loading profile. Try again later.";
pub const FOLLOW_FAILED: &str = "Following failed.";
pub const UNFOLLOW_FAILED: &str = "Unfollowing failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    MyArticles,
    Favorited,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::MyArticles => "My Articles",
            ProfileTab::Favorited => "Favorited Articles",
        }
    }

    pub fn source(&self, username: &str) -> ArticleSource {
        match self {
            ProfileTab::MyArticles => ArticleSource::Author(username.to_string()),
            ProfileTab::Favorited => ArticleSource::Favorites(username.to_string()),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ProfileTab::MyArticles => ProfileTab::Favorited,
            ProfileTab::Favorited => ProfileTab::MyArticles,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProfileView {
    ctx: AppContext,
    pub username: String,
    pub state: Container<LoadState<Profile>>,
    pub tab: Container<ProfileTab>,
    pub articles: ArticleList,
    generation: RequestGeneration,
}

impl ProfileView {
    pub fn new(ctx: AppContext, username: impl Into<String>, tab: ProfileTab) -> Self {
        let username = username.into();
        Self {
            articles: ArticleList::new(ctx.clone(), tab.source(&username)),
            state: Container::new(LoadState::Loading),
            tab: Container::new(tab),
            generation: RequestGeneration::new(),
            username,
            ctx,
        }
    }

    pub fn mount(&self) -> impl Future<Output = ()> + Send + 'static {
        let profile = self.load();
        let articles = self
            .articles
            .load(self.tab.state().source(&self.username), 0);
        async move {
            futures::join!(profile, articles);
        }
    }

    pub fn load(&self) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.generation.begin();
        self.state.set_state(LoadState::Loading);

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        let username = self.username.clone();
        async move {
            let result = api.get_profile(&username).await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(profile) => state.set_state(LoadState::Loaded(profile)),
                Err(e) => {
                    tracing::warn!("Loading profile {} failed: {}", username, e);
                    state.set_state(LoadState::Failed(PROFILE_FAILED.to_string()));
                }
            }
        }
    }

    /// The page shows the logged-in user's own profile.
    pub fn is_own(&self) -> bool {
        self.ctx.current_user.with_state(|u| u.is(&self.username))
    }

    pub fn select_tab(&self, tab: ProfileTab) -> impl Future<Output = ()> + Send + 'static {
        self.tab.set_state(tab);
        self.articles.load(tab.source(&self.username), 0)
    }

    /// Flip `following` now and confirm with the server; on failure the
    /// previous value comes back and a notification is sent.
    ///
    /// `None` until the profile loaded.
    pub fn toggle_follow(&self) -> Option<impl Future<Output = ()> + Send + 'static> {
        let was_following = self.state.with_state(|s| s.loaded().map(|p| p.following))?;

        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let username = self.username.clone();
        let pending = optimistic(
            &self.state,
            |s: &mut LoadState<Profile>| {
                if let Some(profile) = s.loaded_mut() {
                    profile.following = !was_following;
                }
            },
            move |s: &mut LoadState<Profile>| {
                if let Some(profile) = s.loaded_mut() {
                    profile.following = was_following;
                }
            },
            async move {
                if was_following {
                    api.unfollow(&username).await
                } else {
                    api.follow(&username).await
                }
            },
            move |_| {
                ctx.notify(if was_following {
                    UNFOLLOW_FAILED
                } else {
                    FOLLOW_FAILED
                })
            },
        );
        Some(async move {
            let _ = pending.await;
        })
    }

    pub fn unmount(&self) {
        self.generation.invalidate();
        self.articles.unmount();
    }
}
