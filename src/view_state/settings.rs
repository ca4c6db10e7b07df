//! Account settings form.

use std::future::Future;

use super::forms::{FieldErrors, FieldSet, FormState, FormStatus};
use super::load_state::{LoadState, RequestGeneration};
use crate::auth;
use crate::context::AppContext;
use crate::models::{User, UserUpdate};
use crate::routes::Route;
use crate::shared::Container;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsFields {
    pub image: String,
    pub username: String,
    pub bio: String,
    pub email: String,
    /// Left empty to keep the current password.
    pub password: String,
}

impl SettingsFields {
    pub fn from_user(user: &User) -> Self {
        Self {
            image: user.image.clone().unwrap_or_default(),
            username: user.username.clone(),
            bio: user.bio.clone().unwrap_or_default(),
            email: user.email.clone(),
            password: String::new(),
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            email: self.email.clone(),
            username: self.username.clone(),
            image: Some(self.image.clone()),
            bio: Some(self.bio.clone()),
            password: None,
        }
        .with_password(&self.password)
    }
}

impl FieldSet for SettingsFields {
    fn labels() -> &'static [&'static str] {
        &["URL of profile picture", "Username", "Short bio about you", "Email", "New Password"]
    }

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.image),
            1 => Some(&self.username),
            2 => Some(&self.bio),
            3 => Some(&self.email),
            4 => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.image),
            1 => Some(&mut self.username),
            2 => Some(&mut self.bio),
            3 => Some(&mut self.email),
            4 => Some(&mut self.password),
            _ => None,
        }
    }

    fn is_secret(index: usize) -> bool {
        index == 4
    }

    fn is_multiline(index: usize) -> bool {
        index == 2
    }
}

#[derive(Clone, Debug)]
pub struct SettingsForm {
    ctx: AppContext,
    pub state: Container<LoadState<FormState<SettingsFields>>>,
    generation: RequestGeneration,
}

impl SettingsForm {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: Container::new(LoadState::Loading),
            generation: RequestGeneration::new(),
        }
    }

    /// Fetch the account from the server to fill the form.
    pub fn load(&self) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.generation.begin();
        self.state.set_state(LoadState::Loading);

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        async move {
            let result = api.get_user().await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(user) => state.set_state(LoadState::Loaded(FormState::new(
                    SettingsFields::from_user(&user.user()),
                ))),
                Err(e) => {
                    tracing::warn!("Loading settings failed: {}", e);
                    state.set_state(LoadState::Failed(e.user_message()));
                }
            }
        }
    }

    pub fn edit(&self, f: impl FnOnce(&mut FormState<SettingsFields>)) {
        self.state.update(|s| {
            if let Some(form) = s.loaded_mut() {
                f(form);
            }
        });
    }

    /// Save the settings; resolves to the user's profile route on success.
    ///
    /// Ignored while the form is not loaded or already submitting.
    pub fn submit(&self) -> impl Future<Output = Option<Route>> + Send + 'static {
        let update = self.state.with_state(|s| {
            s.loaded()
                .filter(|form| !form.status.is_submitting())
                .map(|form| form.fields.to_update())
        });
        if update.is_some() {
            self.edit(|form| form.status = FormStatus::Submitting);
        }

        let ctx = self.ctx.clone();
        let state = self.state.clone();
        async move {
            let update = update?;
            match ctx.api.update_user(&update).await {
                Ok(response) => {
                    tracing::info!("Saved settings for {}", response.user.username);
                    let username = response.user.username.clone();
                    auth::sign_in(&ctx, response.user);
                    state.update(|s| {
                        if let Some(form) = s.loaded_mut() {
                            form.status = FormStatus::Editing;
                            form.fields.password.clear();
                        }
                    });
                    Some(Route::Profile(username))
                }
                Err(e) => {
                    tracing::warn!("Saving settings failed: {}", e);
                    state.update(|s| {
                        if let Some(form) = s.loaded_mut() {
                            form.status = FormStatus::Failed(FieldErrors::from_error(&e));
                        }
                    });
                    None
                }
            }
        }
    }

    /// Log out and go home.
    pub fn logout(&self) -> Route {
        auth::logout(&self.ctx);
        Route::Home
    }

    pub fn unmount(&self) {
        self.generation.invalidate();
    }
}
