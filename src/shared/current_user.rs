//! Who is logged in, shared by every screen.

use crate::models::UserWithToken;

/// State of the shared current-user container.
///
/// Starts as `Loading` until the startup check finishes; afterwards it is
/// `Loaded(Some(user))` for a logged-in user or `Loaded(None)` for a guest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurrentUser {
    #[default]
    Loading,
    Loaded(Option<UserWithToken>),
}

impl CurrentUser {
    pub fn guest() -> Self {
        CurrentUser::Loaded(None)
    }

    pub fn logged_in(user: UserWithToken) -> Self {
        CurrentUser::Loaded(Some(user))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CurrentUser::Loading)
    }

    pub fn user(&self) -> Option<&UserWithToken> {
        match self {
            CurrentUser::Loaded(Some(user)) => Some(user),
            CurrentUser::Loaded(None) | CurrentUser::Loading => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user().map(|user| user.username.as_str())
    }

    /// True when `username` belongs to the logged-in user.
    pub fn is(&self, username: &str) -> bool {
        self.username() == Some(username)
    }
}
