//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - the view model behind the visible route
//! - [`Focus`] - which pane of the screen takes keys
//! - [`AppMessage`] - messages posted to the UI loop
//!
//! The app owns the tasks spawned for the visible screen and aborts them
//! when it navigates away.

mod handlers;
mod messages;
mod navigation;

pub use handlers::FormAction;
pub use messages::AppMessage;
pub use navigation::{redirect, Screen};

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::context::AppContext;
use crate::routes::Route;
use crate::shared::{CurrentUser, SubscriptionSet};
use crate::view_state::Notifications;

/// Which pane of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The article list, article body or form.
    #[default]
    Main,
    /// Popular tags on the home screen.
    Tags,
    /// The comment thread of an article.
    Comments,
    /// Typing a new comment.
    CommentInput,
}

pub struct App {
    pub ctx: AppContext,
    pub route: Route,
    pub screen: Screen,
    pub focus: Focus,
    pub notifications: Notifications,
    /// Article body scroll offset in lines.
    pub scroll: u16,
    pub selected_comment: usize,
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the UI loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    history: Vec<Route>,
    tasks: Vec<JoinHandle<()>>,
    screen_subscriptions: SubscriptionSet,
    subscriptions: SubscriptionSet,
}

impl App {
    /// Nothing is fetched until [`start`](Self::start).
    pub fn new(ctx: AppContext) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let notifications = Notifications::new();

        let mut subscriptions = SubscriptionSet::new();
        subscriptions.push(notifications.observe(&ctx));
        let tx = message_tx.clone();
        subscriptions.push(notifications.items.add_listener(move || {
            let _ = tx.send(AppMessage::Redraw);
        }));
        let tx = message_tx.clone();
        subscriptions.push(ctx.current_user.add_listener(move || {
            let _ = tx.send(AppMessage::UserChanged);
        }));

        Self {
            screen: Screen::for_route(&ctx, &Route::Home),
            route: Route::Home,
            ctx,
            focus: Focus::default(),
            notifications,
            scroll: 0,
            selected_comment: 0,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
            history: Vec::new(),
            tasks: Vec::new(),
            screen_subscriptions: SubscriptionSet::new(),
            subscriptions,
        }
    }

    /// Show the first screen. Must run inside the tokio runtime.
    pub fn start(&mut self, route: Route) {
        self.route = route;
        self.show_current();
    }

    pub fn current_user(&self) -> CurrentUser {
        self.ctx.current_user.state()
    }

    pub fn is_logged_in(&self) -> bool {
        self.ctx.current_user.with_state(CurrentUser::is_logged_in)
    }

    /// Run `task` for the visible screen; it is aborted on navigation.
    pub fn spawn(&mut self, task: impl Future<Output = ()> + Send + 'static) {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(tokio::spawn(task));
    }

    /// Like [`spawn`](Self::spawn), navigating to the route `task` resolves to.
    pub fn spawn_navigation(&mut self, task: impl Future<Output = Option<Route>> + Send + 'static) {
        let tx = self.message_tx.clone();
        self.spawn(async move {
            if let Some(route) = task.await {
                let _ = tx.send(AppMessage::Navigate(route));
            }
        });
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Redraw => self.mark_dirty(),
            AppMessage::Navigate(route) => self.navigate(route),
            AppMessage::UserChanged => self.on_user_changed(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quitting");
        self.should_quit = true;
    }

    /// Unsubscribe everything and abort the screen's tasks.
    pub fn shutdown(&mut self) {
        self.screen.unmount();
        self.screen_subscriptions.unsubscribe_all();
        self.subscriptions.unsubscribe_all();
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use super::*;

    /// Apply messages until `done` holds or a second passes.
    pub async fn pump_until(app: &mut App, mut done: impl FnMut(&App) -> bool) -> bool {
        let Some(mut rx) = app.message_rx.take() else {
            return false;
        };
        let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
        let mut reached = done(app);
        while !reached {
            match tokio::time::timeout_at(deadline, rx.recv()).await {
                Ok(Some(message)) => app.handle_message(message),
                Ok(None) | Err(_) => break,
            }
            reached = done(app);
        }
        app.message_rx = Some(rx);
        reached
    }
}
