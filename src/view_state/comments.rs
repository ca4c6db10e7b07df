//! Comment thread under an article and the form that posts to it.

use std::future::Future;

use super::forms::{FieldErrors, FormStatus};
use super::load_state::{LoadState, RequestGeneration};
use super::optimistic::optimistic;
use crate::context::AppContext;
use crate::models::Comment;
use crate::shared::{Container, Subscription};

pub const COMMENTS_FAILED: &str = "Comments failed loading.";
pub const DELETE_COMMENT_FAILED: &str = "Deletion of comment failed.";
pub const SIGN_IN_TO_COMMENT: &str = "Sign in or sign up to add comments on this article.";

#[derive(Clone, Debug)]
pub struct CommentList {
    ctx: AppContext,
    slug: String,
    pub state: Container<LoadState<Vec<Comment>>>,
    generation: RequestGeneration,
}

impl CommentList {
    pub fn new(ctx: AppContext, slug: impl Into<String>) -> Self {
        Self {
            ctx,
            slug: slug.into(),
            state: Container::new(LoadState::Loading),
            generation: RequestGeneration::new(),
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
            let result = api.list_comments(&slug).await;
            if !generation.is_current(ticket) {
                tracing::debug!("Dropping stale comments for {}", slug);
                return;
            }
            match result {
                Ok(comments) => state.set_state(LoadState::Loaded(comments)),
                Err(e) => {
                    tracing::warn!("Loading comments for {} failed: {}", slug, e);
                    state.set_state(LoadState::Failed(COMMENTS_FAILED.to_string()));
                }
            }
        }
    }

    /// Reload whenever a comment was posted anywhere.
    ///
    /// The reload runs on the ambient tokio runtime; outside of one the event
    /// is only logged.
    pub fn observe(&self) -> Subscription {
        let list = self.clone();
        self.ctx.comment_list_changed.add_listener(move |_| {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(list.load());
                }
                Err(_) => tracing::warn!("Comment list changed outside of a runtime"),
            }
        })
    }

    /// The logged-in user may delete `comment`.
    pub fn can_delete(&self, comment: &Comment) -> bool {
        self.ctx
            .current_user
            .with_state(|u| u.is(&comment.author.username))
    }

    /// Remove the comment right away and ask the server to delete it.
    ///
    /// On failure it is put back at its old position. `None` if the comment
    /// is not in the list.
    pub fn delete(&self, id: u64) -> Option<impl Future<Output = ()> + Send + 'static> {
        let (index, removed) = self.state.with_state(|s| {
            s.loaded().and_then(|comments| {
                comments
                    .iter()
                    .position(|c| c.id == id)
                    .map(|index| (index, comments[index].clone()))
            })
        })?;

        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let slug = self.slug.clone();
        let pending = optimistic(
            &self.state,
            |s: &mut LoadState<Vec<Comment>>| {
                if let Some(comments) = s.loaded_mut() {
                    comments.retain(|c| c.id != id);
                }
            },
            move |s: &mut LoadState<Vec<Comment>>| {
                if let Some(comments) = s.loaded_mut() {
                    if !comments.iter().any(|c| c.id == id) {
                        let at = index.min(comments.len());
                        comments.insert(at, removed);
                    }
                }
            },
            async move { api.delete_comment(&slug, id).await },
            move |_| ctx.notify(DELETE_COMMENT_FAILED),
        );
        Some(async move {
            let _ = pending.await;
        })
    }

    pub fn unmount(&self) {
        self.generation.invalidate();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentFormState {
    pub body: String,
    pub status: FormStatus,
}

#[derive(Clone, Debug)]
pub struct CommentForm {
    ctx: AppContext,
    slug: String,
    pub state: Container<CommentFormState>,
}

impl CommentForm {
    pub fn new(ctx: AppContext, slug: impl Into<String>) -> Self {
        Self {
            ctx,
            slug: slug.into(),
            state: Container::new(CommentFormState::default()),
        }
    }

    /// Guests get a sign-in prompt instead of the form.
    pub fn is_available(&self) -> bool {
        self.ctx.current_user.with_state(|u| u.is_logged_in())
    }

    pub fn edit(&self, f: impl FnOnce(&mut String)) {
        self.state.update(|s| f(&mut s.body));
    }

    /// Post the comment. On success the body is cleared and every comment
    /// list is told to reload.
    pub fn submit(&self) -> impl Future<Output = ()> + Send + 'static {
        let body = self.state.with_state(|s| s.body.clone());
        self.state.update(|s| s.status = FormStatus::Submitting);

        let api = self.ctx.api.clone();
        let ctx = self.ctx.clone();
        let state = self.state.clone();
        let slug = self.slug.clone();
        async move {
            match api.create_comment(&slug, &body).await {
                Ok(comment) => {
                    tracing::debug!("Posted comment {} on {}", comment.id, slug);
                    state.set_state(CommentFormState::default());
                    ctx.comment_list_changed.trigger(());
                }
                Err(e) => {
                    tracing::warn!("Posting comment on {} failed: {}", slug, e);
                    state.update(|s| s.status = FormStatus::Failed(FieldErrors::from_error(&e)));
                }
            }
        }
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

    fn comments_json(ids: &[u64]) -> serde_json::Value {
        let comments: Vec<_> = ids.iter().map(|id| fixtures::comment_json(*id, "jake")).collect();
        json!({ "comments": comments })
    }

    fn ids(list: &CommentList) -> Vec<u64> {
        list.state
            .state()
            .loaded()
            .map(|c| c.iter().map(|c| c.id).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_load_failure_message() {
        let (ctx, http) = context();
        http.set_default_response(MockResponse::text(500, ""));
        let list = CommentList::new(ctx, "a");
        list.load().await;
        assert_eq!(list.state.state(), LoadState::Failed(COMMENTS_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_delete_is_optimistic() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(
            Method::Get,
            &url("/articles/a/comments"),
            MockResponse::json(200, comments_json(&[1, 2, 3])),
        );
        http.set_response(
            Method::Delete,
            &url("/articles/a/comments/2"),
            MockResponse::json(200, json!({})),
        );
        let list = CommentList::new(ctx, "a");
        list.load().await;

        let comment = fixtures::comment(2, "jake");
        assert!(list.can_delete(&comment));
        let pending = list.delete(2).unwrap();
        assert_eq!(ids(&list), vec![1, 3]);
        pending.await;
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_failure_restores_position() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(
            Method::Get,
            &url("/articles/a/comments"),
            MockResponse::json(200, comments_json(&[1, 2, 3])),
        );
        http.set_response(
            Method::Delete,
            &url("/articles/a/comments/2"),
            MockResponse::text(500, ""),
        );
        let seen = record_notifications(&ctx);
        let list = CommentList::new(ctx, "a");
        list.load().await;

        list.delete(2).unwrap().await;
        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert_eq!(*seen.lock().unwrap(), vec![DELETE_COMMENT_FAILED.to_string()]);
        assert!(list.delete(9).is_none());
    }

    #[tokio::test]
    async fn test_guest_cannot_delete() {
        let (ctx, _) = context();
        let list = CommentList::new(ctx.clone(), "a");
        assert!(!list.can_delete(&fixtures::comment(1, "jake")));
        assert!(!CommentForm::new(ctx, "a").is_available());
    }

    #[tokio::test]
    async fn test_submit_clears_form_and_signals_reload() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(
            Method::Post,
            &url("/articles/a/comments"),
            MockResponse::json(200, json!({"comment": fixtures::comment_json(7, "jake")})),
        );
        let fired = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = std::sync::Arc::clone(&fired);
        ctx.comment_list_changed.add_listener(move |_| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

        let form = CommentForm::new(ctx, "a");
        form.edit(|body| body.push_str("nice"));
        form.submit().await;

        assert_eq!(form.state.state(), CommentFormState::default());
        assert_eq!(fired.load(std::sync::atomic::Ordering::SeqCst), 1);
        let request = http.get_requests().pop().unwrap();
        assert_eq!(request.json(), json!({"comment": {"body": "nice"}}));
    }

    #[tokio::test]
    async fn test_submit_validation_errors() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(
            Method::Post,
            &url("/articles/a/comments"),
            MockResponse::json(422, json!({"errors": {"body": ["can't be blank"]}})),
        );
        let form = CommentForm::new(ctx, "a");
        form.submit().await;

        let status = form.state.state().status;
        assert_eq!(
            status.errors().unwrap().lines(),
            vec!["body can't be blank".to_string()]
        );
    }

    #[tokio::test]
    async fn test_posting_reloads_observing_list() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(
            Method::Get,
            &url("/articles/a/comments"),
            MockResponse::json(200, comments_json(&[1])),
        );
        let list = CommentList::new(ctx.clone(), "a");
        let _subscription = list.observe();

        ctx.comment_list_changed.trigger(());
        for _ in 0..50 {
            if list.state.state().loaded().is_some() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(ids(&list), vec![1]);
    }
}
