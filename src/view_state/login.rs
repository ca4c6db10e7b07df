//! Sign-in form.

use std::future::Future;

use super::forms::{FieldErrors, FieldSet, FormState, FormStatus};
use crate::auth;
use crate::context::AppContext;
use crate::routes::Route;
use crate::shared::Container;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl FieldSet for LoginFields {
    fn labels() -> &'static [&'static str] {
        &["Email", "Password"]
    }

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }

    fn is_secret(index: usize) -> bool {
        index == 1
    }
}

#[derive(Clone, Debug)]
pub struct LoginForm {
    ctx: AppContext,
    pub state: Container<FormState<LoginFields>>,
}

impl LoginForm {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: Container::new(FormState::default()),
        }
    }

    /// Sign in; resolves to the home route on success.
    pub fn submit(&self) -> impl Future<Output = Option<Route>> + Send + 'static {
        let fields = self.state.with_state(|s| s.fields.clone());
        self.state.update(|s| s.status = FormStatus::Submitting);

        let ctx = self.ctx.clone();
        let state = self.state.clone();
        async move {
            match ctx.api.login(&fields.email, &fields.password).await {
                Ok(response) => {
                    tracing::info!("Signed in as {}", response.user.username);
                    auth::sign_in(&ctx, response.user);
                    state.update(|s| s.status = FormStatus::Editing);
                    Some(Route::Home)
                }
                Err(e) => {
                    tracing::warn!("Sign in failed: {}", e);
                    state.update(|s| s.status = FormStatus::Failed(FieldErrors::from_error(&e)));
                    None
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

    #[tokio::test]
    async fn test_login_success_signs_in() {
        let (ctx, http) = context();
        http.set_response(
            Method::Post,
            &url("/users/login"),
            MockResponse::json(200, fixtures::user_json("jake", "jwt-1")),
        );
        let form = LoginForm::new(ctx.clone());
        form.state.update(|s| {
            s.fields.email = "jake@example.com".into();
            s.fields.password = "secret".into();
        });

        let pending = form.submit();
        assert!(form.state.state().status.is_submitting());
        assert_eq!(pending.await, Some(Route::Home));

        assert_eq!(ctx.session().token(), Some("jwt-1".to_string()));
        assert_eq!(ctx.username(), Some("jake".to_string()));
        assert_eq!(
            http.get_requests()[0].json(),
            json!({"user": {"email": "jake@example.com", "password": "secret"}})
        );
    }

    #[tokio::test]
    async fn test_login_rejected_shows_field_errors() {
        let (ctx, http) = context();
        http.set_response(
            Method::Post,
            &url("/users/login"),
            MockResponse::json(422, json!({"errors": {"email or password": ["is invalid"]}})),
        );
        let form = LoginForm::new(ctx.clone());
        assert_eq!(form.submit().await, None);

        let status = form.state.state().status;
        assert_eq!(
            status.errors().unwrap().lines(),
            vec!["email or password is invalid".to_string()]
        );
        assert!(!ctx.session().is_logged_in());
    }

    #[test]
    fn test_password_is_secret() {
        assert!(LoginFields::is_secret(1));
        assert!(!LoginFields::is_secret(0));
    }
}
