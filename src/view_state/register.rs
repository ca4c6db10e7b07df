//! Sign-up form.

use std::future::Future;

use super::forms::{FieldErrors, FieldSet, FormState, FormStatus};
use crate::auth;
use crate::context::AppContext;
use crate::routes::Route;
use crate::shared::Container;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl FieldSet for RegisterFields {
    fn labels() -> &'static [&'static str] {
        &["Username", "Email", "Password"]
    }

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.email),
            2 => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            _ => None,
        }
    }

    fn is_secret(index: usize) -> bool {
        index == 2
    }
}

#[derive(Clone, Debug)]
pub struct RegisterForm {
    ctx: AppContext,
    pub state: Container<FormState<RegisterFields>>,
}

impl RegisterForm {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: Container::new(FormState::default()),
        }
    }

    pub fn submit(&self) -> impl Future<Output = Option<Route>> + Send + 'static {
        let fields = self.state.with_state(|s| s.fields.clone());
        self.state.update(|s| s.status = FormStatus::Submitting);

        let ctx = self.ctx.clone();
        let state = self.state.clone();
        async move {
            let result = ctx
                .api
                .register(&fields.username, &fields.email, &fields.password)
                .await;
            match result {
                Ok(response) => {
                    tracing::info!("Registered {}", response.user.username);
                    auth::sign_in(&ctx, response.user);
                    state.update(|s| s.status = FormStatus::Editing);
                    Some(Route::Home)
                }
                Err(e) => {
                    tracing::warn!("Sign up failed: {}", e);
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
    async fn test_register_success() {
        let (ctx, http) = context();
        http.set_response(
            Method::Post,
            &url("/users"),
            MockResponse::json(200, fixtures::user_json("newbie", "jwt-2")),
        );
        let form = RegisterForm::new(ctx.clone());
        form.state.update(|s| {
            s.fields.username = "newbie".into();
            s.fields.email = "newbie@example.com".into();
            s.fields.password = "pw".into();
        });

        assert_eq!(form.submit().await, Some(Route::Home));
        assert_eq!(ctx.username(), Some("newbie".to_string()));
        assert_eq!(
            http.get_requests()[0].json()["user"]["username"],
            json!("newbie")
        );
    }

    #[tokio::test]
    async fn test_register_taken_username() {
        let (ctx, http) = context();
        http.set_response(
            Method::Post,
            &url("/users"),
            MockResponse::json(
                422,
                json!({"errors": {"username": ["has already been taken"], "email": ["is invalid"]}}),
            ),
        );
        let form = RegisterForm::new(ctx);
        assert_eq!(form.submit().await, None);
        assert_eq!(
            form.state.state().status.errors().unwrap().lines(),
            vec![
                "email is invalid".to_string(),
                "username has already been taken".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_answer_is_unexpected_response() {
        let (ctx, http) = context();
        http.set_response(Method::Post, &url("/users"), MockResponse::json(200, json!({"user": 1})));
        let form = RegisterForm::new(ctx);
        form.submit().await;

        let status = form.state.state().status;
        let errors = status.errors().unwrap();
        assert!(errors
            .fields
            .contains_key(crate::view_state::forms::UNEXPECTED_RESPONSE));
    }
}
