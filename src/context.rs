//! State shared by every screen.

use crate::api::ApiClient;
use crate::auth::Session;
use crate::shared::{Container, CurrentUser, EventChannel};

/// Handles every view model receives at construction.
///
/// All fields are cheap clones of shared handles.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub api: ApiClient,
    pub current_user: Container<CurrentUser>,
    /// User-facing notification texts.
    pub notifications: EventChannel<String>,
    /// Fired after a comment was posted so comment lists reload.
    pub comment_list_changed: EventChannel<()>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            current_user: Container::new(CurrentUser::Loading),
            notifications: EventChannel::new(),
            comment_list_changed: EventChannel::new(),
        }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Notification: {}", message);
        self.notifications.trigger(message);
    }

    /// Username of the logged-in user, if any.
    pub fn username(&self) -> Option<String> {
        self.current_user
            .with_state(|state| state.username().map(str::to_string))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_new_context_starts_loading() {
        let (ctx, _) = context();
        assert!(ctx.current_user.state().is_loading());
        assert_eq!(ctx.username(), None);
    }

    #[test]
    fn test_notify_reaches_listeners() {
        let (ctx, _) = context();
        let seen = record_notifications(&ctx);
        ctx.notify("hello");
        assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_username() {
        let (ctx, _) = logged_in_context(fixtures::user("jake", "t"));
        assert_eq!(ctx.username(), Some("jake".to_string()));
        assert!(ctx.session().is_logged_in());
    }
}
