//! Authentication: the session token and the current-user lifecycle.

pub mod session;

pub use session::{Session, TOKEN_KEY};

use crate::context::AppContext;
use crate::error::ConduitError;
use crate::models::UserWithToken;
use crate::shared::CurrentUser;

pub const LOAD_USER_FAILED: &str = "Error while loading user.";

/// Resolve the shared current user at startup.
///
/// Without a stored token the user is a guest and no request is made. A
/// rejected token is dropped silently; any other failure also leaves a guest
/// but is logged and reported as a notification.
pub async fn load_current_user(ctx: &AppContext) {
    if !ctx.session().is_logged_in() {
        tracing::debug!("No stored token, starting as guest");
        ctx.current_user.set_state(CurrentUser::guest());
        return;
    }

    match ctx.api.get_user().await {
        Ok(user) => {
            tracing::info!("Logged in as {}", user.username);
            sign_in(ctx, user);
        }
        Err(ConduitError::Unauthorized) => {
            tracing::info!("Stored token rejected, starting as guest");
            ctx.session().clear();
            ctx.current_user.set_state(CurrentUser::guest());
        }
        Err(e) => {
            tracing::error!("{}: {}", LOAD_USER_FAILED, e);
            ctx.current_user.set_state(CurrentUser::guest());
            ctx.notify(LOAD_USER_FAILED);
        }
    }
}

/// Store the user's token and publish them as the current user.
pub fn sign_in(ctx: &AppContext, user: UserWithToken) {
    ctx.session().set_token(user.token.clone());
    ctx.current_user.set_state(CurrentUser::logged_in(user));
}

pub fn logout(ctx: &AppContext) {
    tracing::info!("Logging out");
    ctx.session().clear();
    ctx.current_user.set_state(CurrentUser::guest());
}
