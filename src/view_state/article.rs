//! Single article page.

use std::future::Future;

use super::article_list::{FAVORITE_FAILED, UNFAVORITE_FAILED};
use super::comments::{CommentForm, CommentList};
use super::load_state::{LoadState, RequestGeneration};
use super::optimistic::optimistic;
use super::profile::{FOLLOW_FAILED, UNFOLLOW_FAILED};
use crate::context::AppContext;
use crate::models::Article;
use crate::routes::Route;
use crate::shared::Container;

pub const DELETE_ARTICLE_FAILED: &str = "Deletion of article failed.";

#[derive(Clone, Debug)]
pub struct ArticleView {
    ctx: AppContext,
    pub slug: String,
    pub state: Container<LoadState<Article>>,
    pub comments: CommentList,
    pub comment_form: CommentForm,
    generation: RequestGeneration,
}

impl ArticleView {
    pub fn new(ctx: AppContext, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            comments: CommentList::new(ctx.clone(), slug.clone()),
            comment_form: CommentForm::new(ctx.clone(), slug.clone()),
            state: Container::new(LoadState::Loading),
            generation: RequestGeneration::new(),
            slug,
            ctx,
        }
    }

    /// Fetch the article and its comments.
    pub fn mount(&self) -> impl Future<Output = ()> + Send + 'static {
        let article = self.load();
        let comments = self.comments.load();
        async move {
            futures::join!(article, comments);
        }
    }

    pub fn load(&self) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.generation.begin();
        self.state.set_state(LoadState::Loading);

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        let slug = self.slug.clone();
        async move {
            let result = api.get_article(&slug).await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(article) => state.set_state(LoadState::Loaded(article)),
                Err(e) => {
                    tracing::warn!("Loading article {} failed: {}", slug, e);
                    state.set_state(LoadState::Failed(e.user_message()));
                }
            }
        }
    }

    /// The logged-in user wrote this article.
    pub fn can_modify(&self) -> bool {
        let Some(username) = self.ctx.username() else {
            return false;
        };
        self.state
            .with_state(|s| s.loaded().is_some_and(|a| a.is_authored_by(&username)))
    }

    /// Delete the article. Resolves to the route to show afterwards, or
    /// `None` if the deletion failed (a notification has been sent).
    pub fn delete(&self) -> impl Future<Output = Option<Route>> + Send + 'static {
        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let slug = self.slug.clone();
        async move {
            match api.delete_article(&slug).await {
                Ok(()) => {
                    tracing::info!("Deleted article {}", slug);
                    Some(Route::Home)
                }
                Err(e) => {
                    tracing::warn!("Deleting article {} failed: {}", slug, e);
                    ctx.notify(DELETE_ARTICLE_FAILED);
                    None
                }
            }
        }
    }

    /// Optimistically flip the favorite flag. `None` until the article loaded.
    pub fn toggle_favorite(&self) -> Option<impl Future<Output = ()> + Send + 'static> {
        let (was_favorited, previous_count) = self
            .state
            .with_state(|s| s.loaded().map(|a| (a.favorited, a.favorites_count)))?;

        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let slug = self.slug.clone();
        let pending = optimistic(
            &self.state,
            |s: &mut LoadState<Article>| {
                if let Some(article) = s.loaded_mut() {
                    article.toggle_favorite();
                }
            },
            move |s: &mut LoadState<Article>| {
                if let Some(article) = s.loaded_mut() {
                    article.favorited = was_favorited;
                    article.favorites_count = previous_count;
                }
            },
            async move {
                if was_favorited {
                    api.unfavorite(&slug).await
                } else {
                    api.favorite(&slug).await
                }
            },
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

    /// Optimistically follow or unfollow the author.
    pub fn toggle_follow(&self) -> Option<impl Future<Output = ()> + Send + 'static> {
        let (author, was_following) = self.state.with_state(|s| {
            s.loaded()
                .map(|a| (a.author.username.clone(), a.author.following))
        })?;

        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let pending = optimistic(
            &self.state,
            |s: &mut LoadState<Article>| {
                if let Some(article) = s.loaded_mut() {
                    article.author.following = !was_following;
                }
            },
            move |s: &mut LoadState<Article>| {
                if let Some(article) = s.loaded_mut() {
                    article.author.following = was_following;
                }
            },
            async move {
                if was_following {
                    api.unfollow(&author).await
                } else {
                    api.follow(&author).await
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
        self.comments.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::context::test_support::*;
    use crate::models::fixtures;
    use crate::traits::Method;
    use serde_json::json;

    fn stub_article(http: &crate::adapters::mock::MockHttpClient) {
        http.set_response(
            Method::Get,
            &url("/articles/a"),
            MockResponse::json(200, json!({"article": fixtures::article_json("a", false, 2)})),
        );
        http.set_response(
            Method::Get,
            &url("/articles/a/comments"),
            MockResponse::json(200, json!({"comments": [fixtures::comment_json(1, "jake")]})),
        );
    }

    #[tokio::test]
    async fn test_mount_loads_article_and_comments() {
        let (ctx, http) = context();
        stub_article(&http);
        let view = ArticleView::new(ctx, "a");
        view.mount().await;

        assert_eq!(view.state.state().loaded().unwrap().slug, "a");
        assert_eq!(view.comments.state.state().loaded().unwrap().len(), 1);
        assert!(!view.can_modify());
    }

    #[tokio::test]
    async fn test_not_found() {
        let (ctx, http) = context();
        http.set_response(Method::Get, &url("/articles/gone"), MockResponse::text(404, ""));
        let view = ArticleView::new(ctx, "gone");
        view.load().await;
        assert_eq!(view.state.state(), LoadState::Failed("Not Found".to_string()));
    }

    #[tokio::test]
    async fn test_author_can_modify_and_delete() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        stub_article(&http);
        http.set_response(Method::Delete, &url("/articles/a"), MockResponse::json(200, json!({})));
        let view = ArticleView::new(ctx, "a");
        view.load().await;

        assert!(view.can_modify());
        assert_eq!(view.delete().await, Some(Route::Home));
    }

    #[tokio::test]
    async fn test_delete_failure_notifies() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(Method::Delete, &url("/articles/a"), MockResponse::text(403, ""));
        let seen = record_notifications(&ctx);
        let view = ArticleView::new(ctx, "a");

        assert_eq!(view.delete().await, None);
        assert_eq!(*seen.lock().unwrap(), vec![DELETE_ARTICLE_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn test_favorite_failure_restores_count() {
        let (ctx, http) = logged_in_context(fixtures::user("jane", "t"));
        stub_article(&http);
        http.set_response(
            Method::Post,
            &url("/articles/a/favorite"),
            MockResponse::text(500, ""),
        );
        let view = ArticleView::new(ctx, "a");
        view.load().await;

        let pending = view.toggle_favorite().unwrap();
        assert_eq!(view.state.state().loaded().unwrap().favorites_count, 3);
        pending.await;

        let article = view.state.state().loaded().cloned().unwrap();
        assert!(!article.favorited);
        assert_eq!(article.favorites_count, 2);
    }

    #[tokio::test]
    async fn test_follow_author() {
        let (ctx, http) = logged_in_context(fixtures::user("jane", "t"));
        stub_article(&http);
        http.set_response(
            Method::Post,
            &url("/profiles/jake/follow"),
            MockResponse::json(200, json!({"profile": fixtures::profile_json("jake", true)})),
        );
        let view = ArticleView::new(ctx, "a");
        view.load().await;

        view.toggle_follow().unwrap().await;
        assert!(view.state.state().loaded().unwrap().author.following);
    }
}
