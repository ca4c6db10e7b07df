//! Screens, route guards and moving between them.

use futures::future::BoxFuture;
use futures::FutureExt;

use super::{App, AppMessage, Focus};
use crate::context::AppContext;
use crate::routes::Route;
use crate::shared::{CurrentUser, Subscription};
use crate::view_state::{
    ArticleView, EditorView, HomeTab, HomeView, LoginForm, ProfileTab, ProfileView, RegisterForm,
    SettingsForm,
};

/// The view model behind the visible screen.
#[derive(Clone, Debug)]
pub enum Screen {
    Home(HomeView),
    Login(LoginForm),
    Register(RegisterForm),
    Settings(SettingsForm),
    Editor(EditorView),
    Article(ArticleView),
    Profile(ProfileView),
    NotFound(String),
}

impl Screen {
    pub fn for_route(ctx: &AppContext, route: &Route) -> Self {
        let ctx = ctx.clone();
        match route {
            Route::Home => Screen::Home(HomeView::new(ctx)),
            Route::Login => Screen::Login(LoginForm::new(ctx)),
            Route::Register => Screen::Register(RegisterForm::new(ctx)),
            Route::Settings => Screen::Settings(SettingsForm::new(ctx)),
            Route::Editor => Screen::Editor(EditorView::new_article(ctx)),
            Route::EditArticle(slug) => Screen::Editor(EditorView::edit_article(ctx, slug.clone())),
            Route::Article(slug) => Screen::Article(ArticleView::new(ctx, slug.clone())),
            Route::Profile(username) => {
                Screen::Profile(ProfileView::new(ctx, username.clone(), ProfileTab::MyArticles))
            }
            Route::ProfileFavorites(username) => {
                Screen::Profile(ProfileView::new(ctx, username.clone(), ProfileTab::Favorited))
            }
            Route::NotFound(path) => Screen::NotFound(path.clone()),
        }
    }

    /// Initial fetches. `None` when the screen starts complete.
    pub fn mount(&self) -> Option<BoxFuture<'static, ()>> {
        match self {
            Screen::Home(view) => Some(view.mount().boxed()),
            Screen::Settings(form) => Some(form.load().boxed()),
            Screen::Editor(view) if view.slug.is_some() => Some(view.load().boxed()),
            Screen::Article(view) => Some(view.mount().boxed()),
            Screen::Profile(view) => Some(view.mount().boxed()),
            Screen::Editor(_) | Screen::Login(_) | Screen::Register(_) | Screen::NotFound(_) => {
                None
            }
        }
    }

    /// Call `on_change` whenever a container the screen renders from changes.
    pub fn watch<F>(&self, on_change: F) -> Vec<Subscription>
    where
        F: Fn() + Clone + Send + Sync + 'static,
    {
        match self {
            Screen::Home(view) => vec![
                view.tab.add_listener(on_change.clone()),
                view.articles.observe(on_change.clone()),
                view.tags.state.add_listener(on_change),
            ],
            Screen::Login(form) => vec![form.state.add_listener(on_change)],
            Screen::Register(form) => vec![form.state.add_listener(on_change)],
            Screen::Settings(form) => vec![form.state.add_listener(on_change)],
            Screen::Editor(view) => vec![view.state.add_listener(on_change)],
            Screen::Article(view) => vec![
                view.state.add_listener(on_change.clone()),
                view.comments.state.add_listener(on_change.clone()),
                view.comment_form.state.add_listener(on_change),
                view.comments.observe(),
            ],
            Screen::Profile(view) => vec![
                view.state.add_listener(on_change.clone()),
                view.tab.add_listener(on_change.clone()),
                view.articles.observe(on_change),
            ],
            Screen::NotFound(_) => Vec::new(),
        }
    }

    pub fn unmount(&self) {
        match self {
            Screen::Home(view) => view.unmount(),
            Screen::Settings(form) => form.unmount(),
            Screen::Editor(view) => view.unmount(),
            Screen::Article(view) => view.unmount(),
            Screen::Profile(view) => view.unmount(),
            Screen::Login(_) | Screen::Register(_) | Screen::NotFound(_) => {}
        }
    }
}

/// Where `route` leads instead for `user`, if anywhere.
///
/// Nothing is redirected while the current user is still loading; the
/// guards run again once it resolves.
pub fn redirect(route: &Route, user: &CurrentUser) -> Option<Route> {
    if user.is_loading() {
        return None;
    }
    if route.requires_login() && !user.is_logged_in() {
        return Some(Route::Login);
    }
    if route.guest_only() && user.is_logged_in() {
        return Some(Route::Home);
    }
    None
}

impl App {
    /// Show `route`, remembering the current one for [`back`](Self::back).
    ///
    /// Navigating to the route already shown does nothing.
    pub fn navigate(&mut self, route: Route) {
        let route = self.guarded(route);
        if route == self.route {
            return;
        }
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        self.show_current();
    }

    /// Return to the previous route, or home.
    pub fn back(&mut self) {
        let route = self.history.pop().unwrap_or(Route::Home);
        self.route = self.guarded(route);
        self.show_current();
    }

    /// Re-run the guards for the visible route after the user changed.
    pub fn on_user_changed(&mut self) {
        let user = self.ctx.current_user.state();
        if let Some(target) = redirect(&self.route, &user) {
            tracing::info!("Redirecting from {} to {}", self.route, target);
            self.navigate(target);
        } else if let Screen::Home(view) = self.screen.clone() {
            if view.tab.state() == HomeTab::Feed && !user.is_logged_in() {
                if let Some(load) = view.select_tab(HomeTab::Global) {
                    self.spawn(load);
                }
            }
        }
        self.mark_dirty();
    }

    fn guarded(&self, route: Route) -> Route {
        self.ctx
            .current_user
            .with_state(|user| redirect(&route, user))
            .unwrap_or(route)
    }

    /// Replace the screen with a fresh one for `self.route` and mount it.
    pub(super) fn show_current(&mut self) {
        tracing::info!("Showing {}", self.route);
        self.leave_screen();

        self.screen = Screen::for_route(&self.ctx, &self.route);
        self.focus = Focus::default();
        self.scroll = 0;
        self.selected_comment = 0;

        let tx = self.message_tx.clone();
        let subscriptions = self.screen.watch(move || {
            let _ = tx.send(AppMessage::Redraw);
        });
        self.screen_subscriptions.extend(subscriptions);

        if let Some(mount) = self.screen.mount() {
            self.spawn(mount);
        }
        self.mark_dirty();
    }

    fn leave_screen(&mut self) {
        self.screen.unmount();
        self.screen_subscriptions.unsubscribe_all();
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}
