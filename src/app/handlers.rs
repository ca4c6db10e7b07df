//! Key and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Screen};
use crate::routes::Route;
use crate::view_state::editor::TAG_INPUT;
use crate::view_state::{
    ArticleList, ArticleView, EditorView, FieldSet, FormState, HomeTab, HomeView, ProfileView,
    SettingsForm,
};

/// What a key did to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Edited,
    Submit,
    Ignored,
}

/// Apply a key to `form`. Nothing changes while it is submitting.
///
/// Tab/Down and BackTab/Up move between inputs. Enter inserts a newline in
/// multi-line inputs, submits from the last input and moves on otherwise.
/// Ctrl+S submits from anywhere.
pub fn form_key<F: FieldSet>(form: &mut FormState<F>, key: &KeyEvent) -> FormAction {
    if form.status.is_submitting() {
        return FormAction::Ignored;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => FormAction::Submit,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            FormAction::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_previous();
            FormAction::Edited
        }
        KeyCode::Enter if form.focused_is_multiline() => {
            form.edit_focused(|value| value.push('\n'));
            FormAction::Edited
        }
        KeyCode::Enter if form.focus + 1 >= F::labels().len() => FormAction::Submit,
        KeyCode::Enter => {
            form.focus_next();
            FormAction::Edited
        }
        KeyCode::Backspace => {
            form.edit_focused(|value| {
                value.pop();
            });
            FormAction::Edited
        }
        KeyCode::Char(c) if !ctrl => {
            form.edit_focused(|value| value.push(c));
            FormAction::Edited
        }
        _ => FormAction::Ignored,
    }
}

/// Insert pasted text into the focused input. Single-line inputs get the
/// line breaks replaced by spaces.
pub fn form_paste<F: FieldSet>(form: &mut FormState<F>, text: &str) {
    if form.status.is_submitting() {
        return;
    }
    let text = if form.focused_is_multiline() {
        text.replace("\r\n", "\n")
    } else {
        single_line(text)
    };
    form.edit_focused(|value| value.push_str(&text));
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if key.code == KeyCode::Esc {
            self.escape();
            return;
        }

        match self.screen.clone() {
            Screen::Home(view) => self.home_key(&view, key),
            Screen::Article(view) => self.article_key(&view, key),
            Screen::Profile(view) => self.profile_key(&view, key),
            Screen::NotFound(_) => {
                self.browse_key(key);
            }
            Screen::Login(form) => {
                let mut action = FormAction::Ignored;
                form.state.update(|s| action = form_key(s, &key));
                if action == FormAction::Submit {
                    self.spawn_navigation(form.submit());
                }
            }
            Screen::Register(form) => {
                let mut action = FormAction::Ignored;
                form.state.update(|s| action = form_key(s, &key));
                if action == FormAction::Submit {
                    self.spawn_navigation(form.submit());
                }
            }
            Screen::Settings(form) => self.settings_key(&form, key),
            Screen::Editor(view) => self.editor_key(&view, key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        match &self.screen {
            Screen::Login(form) => form.state.update(|s| form_paste(s, text)),
            Screen::Register(form) => form.state.update(|s| form_paste(s, text)),
            Screen::Settings(form) => form.edit(|s| form_paste(s, text)),
            Screen::Editor(view) => view.edit(|s| form_paste(s, text)),
            Screen::Article(view) if self.focus == Focus::CommentInput => {
                view.comment_form.edit(|body| body.push_str(text));
            }
            _ => {}
        }
    }

    /// Leave comment input, else dismiss the newest notification, else go back.
    fn escape(&mut self) {
        if self.focus == Focus::CommentInput {
            self.focus = Focus::Main;
        } else if !self.notifications.is_empty() {
            self.notifications.dismiss_latest();
        } else {
            self.back();
        }
    }

    /// Header navigation and quit, shared by the non-form screens.
    fn browse_key(&mut self, key: KeyEvent) -> bool {
        let route = match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Char('h') => Route::Home,
            KeyCode::Char('n') if self.is_logged_in() => Route::Editor,
            KeyCode::Char('s') if self.is_logged_in() => Route::Settings,
            KeyCode::Char('p') => match self.ctx.username() {
                Some(username) => Route::Profile(username),
                None => return false,
            },
            KeyCode::Char('l') if !self.is_logged_in() => Route::Login,
            KeyCode::Char('r') if !self.is_logged_in() => Route::Register,
            _ => return false,
        };
        self.navigate(route);
        true
    }

    fn home_key(&mut self, view: &HomeView, key: KeyEvent) {
        if self.focus == Focus::Tags {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => view.tags.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => view.tags.select_next(),
                KeyCode::Enter => {
                    let tag = view.tags.state.with_state(|s| s.selected_tag().map(str::to_string));
                    if let Some(load) = tag.and_then(|tag| view.select_tab(HomeTab::Tag(tag))) {
                        self.spawn(load);
                        self.focus = Focus::Main;
                    }
                }
                KeyCode::Char('t') | KeyCode::Tab => self.focus = Focus::Main,
                _ => {
                    self.browse_key(key);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                if let Some(load) = view.next_tab() {
                    self.spawn(load);
                }
            }
            KeyCode::Char('t') => self.focus = Focus::Tags,
            _ => {
                if !self.article_list_key(&view.articles, key) {
                    self.browse_key(key);
                }
            }
        }
    }

    /// Selection, paging, opening and favoriting in an article list.
    fn article_list_key(&mut self, list: &ArticleList, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => list.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => list.select_next(),
            KeyCode::Left | KeyCode::Right => {
                let pagination = list.state.with_state(|s| s.pagination());
                let target = pagination.and_then(|p| match key.code {
                    KeyCode::Left if p.has_previous() => Some(p.current_page - 1),
                    KeyCode::Right if p.has_next() => Some(p.current_page + 1),
                    _ => None,
                });
                if let Some(load) = target.and_then(|page| list.go_to_page(page)) {
                    self.spawn(load);
                }
            }
            KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('f') => {
                let Some(article) = list.state.with_state(|s| s.selected_article().cloned()) else {
                    return true;
                };
                match key.code {
                    KeyCode::Enter => self.navigate(Route::Article(article.slug)),
                    KeyCode::Char('a') => self.navigate(Route::Profile(article.author.username)),
                    _ if !self.is_logged_in() => self.navigate(Route::Login),
                    _ => {
                        if let Some(pending) = list.toggle_favorite(&article.slug) {
                            self.spawn(pending);
                        }
                    }
                }
            }
            _ => return false,
        }
        true
    }

    fn profile_key(&mut self, view: &ProfileView, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                let tab = view.tab.state().toggled();
                self.spawn(view.select_tab(tab));
            }
            KeyCode::Char('F') => {
                if !self.is_logged_in() {
                    self.navigate(Route::Login);
                } else if let Some(pending) = view.toggle_follow() {
                    self.spawn(pending);
                }
            }
            _ => {
                if !self.article_list_key(&view.articles, key) {
                    self.browse_key(key);
                }
            }
        }
    }

    fn article_key(&mut self, view: &ArticleView, key: KeyEvent) {
        match self.focus {
            Focus::CommentInput => self.comment_input_key(view, key),
            Focus::Comments => self.comments_key(view, key),
            Focus::Main | Focus::Tags => self.article_body_key(view, key),
        }
    }

    fn article_body_key(&mut self, view: &ArticleView, key: KeyEvent) {
        let author = view.state.with_state(|s| s.loaded().map(|a| a.author.username.clone()));
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Tab => {
                self.focus = Focus::Comments;
                self.selected_comment = 0;
            }
            KeyCode::Char('c') => {
                if view.comment_form.is_available() {
                    self.focus = Focus::CommentInput;
                } else {
                    self.navigate(Route::Login);
                }
            }
            KeyCode::Char('a') => {
                if let Some(author) = author {
                    self.navigate(Route::Profile(author));
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') if !self.is_logged_in() => {
                self.navigate(Route::Login);
            }
            KeyCode::Char('f') => {
                if let Some(pending) = view.toggle_favorite() {
                    self.spawn(pending);
                }
            }
            KeyCode::Char('F') if !view.can_modify() => {
                if let Some(pending) = view.toggle_follow() {
                    self.spawn(pending);
                }
            }
            KeyCode::Char('e') if view.can_modify() => {
                self.navigate(Route::EditArticle(view.slug.clone()));
            }
            KeyCode::Char('D') if view.can_modify() => {
                self.spawn_navigation(view.delete());
            }
            _ => {
                self.browse_key(key);
            }
        }
    }

    fn comments_key(&mut self, view: &ArticleView, key: KeyEvent) {
        let selected = view.comments.state.with_state(|s| {
            s.loaded()
                .and_then(|comments| comments.get(self.selected_comment).cloned())
        });
        let count = view
            .comments
            .state
            .with_state(|s| s.loaded().map_or(0, Vec::len));
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_comment = self.selected_comment.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_comment + 1 < count {
                    self.selected_comment += 1;
                }
            }
            KeyCode::Tab => self.focus = Focus::Main,
            KeyCode::Char('c') if view.comment_form.is_available() => {
                self.focus = Focus::CommentInput;
            }
            KeyCode::Char('x') => {
                let Some(comment) = selected else {
                    return;
                };
                if !view.comments.can_delete(&comment) {
                    return;
                }
                if let Some(pending) = view.comments.delete(comment.id) {
                    self.spawn(pending);
                }
                self.selected_comment = self.selected_comment.min(count.saturating_sub(2));
            }
            _ => {
                self.browse_key(key);
            }
        }
    }

    fn comment_input_key(&mut self, view: &ArticleView, key: KeyEvent) {
        let submitting = view.comment_form.state.with_state(|s| s.status.is_submitting());
        if submitting {
            return;
        }
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                view.comment_form.edit(|body| body.push('\n'));
            }
            KeyCode::Enter => {
                let blank = view.comment_form.state.with_state(|s| s.body.trim().is_empty());
                if !blank {
                    self.spawn(view.comment_form.submit());
                }
            }
            KeyCode::Backspace => view.comment_form.edit(|body| {
                body.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                view.comment_form.edit(|body| body.push(c));
            }
            _ => {}
        }
    }

    fn settings_key(&mut self, form: &SettingsForm, key: KeyEvent) {
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let route = form.logout();
            self.navigate(route);
            return;
        }
        let mut action = FormAction::Ignored;
        form.edit(|s| action = form_key(s, &key));
        if action == FormAction::Submit {
            self.spawn_navigation(form.submit());
        }
    }

    fn editor_key(&mut self, view: &EditorView, key: KeyEvent) {
        let mut action = FormAction::Ignored;
        view.edit(|form| {
            action = match key.code {
                KeyCode::Enter if form.focus == TAG_INPUT => {
                    form.fields.add_tag();
                    FormAction::Edited
                }
                KeyCode::Backspace if form.focus == TAG_INPUT && form.fields.tag_input.is_empty() => {
                    form.fields.tag_list.pop();
                    FormAction::Edited
                }
                _ => form_key(form, &key),
            };
        });
        if action == FormAction::Submit {
            self.spawn_navigation(view.submit());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::app::test_support::pump_until;
    use crate::context::test_support::*;
    use crate::models::fixtures;
    use crate::shared::CurrentUser;
    use crate::traits::Method;
    use crate::view_state::{LoadState, LoginFields};
    use serde_json::json;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_form_key_moves_and_edits() {
        let mut form = FormState::new(LoginFields::default());
        assert_eq!(form_key(&mut form, &press(KeyCode::Char('a'))), FormAction::Edited);
        assert_eq!(form_key(&mut form, &press(KeyCode::Enter)), FormAction::Edited);
        assert_eq!(form.focus, 1);
        form_key(&mut form, &press(KeyCode::Char('x')));
        form_key(&mut form, &press(KeyCode::Backspace));
        assert_eq!(form_key(&mut form, &press(KeyCode::Enter)), FormAction::Submit);
        assert_eq!(form.fields.email, "a");
        assert!(form.fields.password.is_empty());
        assert_eq!(form_key(&mut form, &ctrl('s')), FormAction::Submit);
        assert_eq!(form_key(&mut form, &ctrl('x')), FormAction::Ignored);
    }

    #[test]
    fn test_form_paste_flattens_single_line_inputs() {
        let mut form = FormState::new(LoginFields::default());
        form_paste(&mut form, "a@b.c\r\nmore");
        assert_eq!(form.fields.email, "a@b.c more");
    }

    #[tokio::test]
    async fn test_login_through_keys() {
        let (ctx, http) = context();
        ctx.current_user.set_state(CurrentUser::guest());
        http.set_response(
            Method::Post,
            &url("/users/login"),
            MockResponse::json(200, fixtures::user_json("jake", "tok")),
        );
        http.set_default_response(MockResponse::json(200, json!({"articles": [], "articlesCount": 0, "tags": []})));
        let mut app = App::new(ctx.clone());
        app.start(Route::Login);

        type_text(&mut app, "jake@example.com");
        app.handle_key(press(KeyCode::Tab));
        type_text(&mut app, "secret");
        app.handle_key(press(KeyCode::Enter));

        assert!(pump_until(&mut app, |app| app.route == Route::Home).await);
        assert!(app.is_logged_in());
        let login = http
            .get_requests()
            .into_iter()
            .find(|r| r.url == url("/users/login"))
            .unwrap();
        assert_eq!(login.json()["user"]["password"], json!("secret"));
    }

    #[tokio::test]
    async fn test_browse_keys_depend_on_login() {
        let (ctx, http) = context();
        ctx.current_user.set_state(CurrentUser::guest());
        http.set_default_response(MockResponse::json(200, json!({"articles": [], "articlesCount": 0, "tags": []})));
        let mut app = App::new(ctx);
        app.start(Route::Home);

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.route, Route::Home);
        app.handle_key(press(KeyCode::Char('l')));
        assert_eq!(app.route, Route::Login);
        // Letters are text on a form.
        app.handle_key(press(KeyCode::Char('h')));
        assert_eq!(app.route, Route::Login);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.route, Route::Home);
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_escape_dismisses_notification_first() {
        let (ctx, _http) = context();
        ctx.current_user.set_state(CurrentUser::guest());
        let mut app = App::new(ctx.clone());
        app.start(Route::Login);
        app.navigate(Route::Register);
        ctx.notify("oops");

        app.handle_key(press(KeyCode::Esc));
        assert!(app.notifications.is_empty());
        assert_eq!(app.route, Route::Register);
    }

    #[tokio::test]
    async fn test_editor_enter_adds_tag() {
        let (ctx, _http) = logged_in_context(fixtures::user("jake", "t"));
        let mut app = App::new(ctx);
        app.start(Route::Editor);
        for _ in 0..TAG_INPUT {
            app.handle_key(press(KeyCode::Tab));
        }
        type_text(&mut app, "rust");
        app.handle_key(press(KeyCode::Enter));

        let Screen::Editor(view) = app.screen.clone() else {
            panic!("expected editor");
        };
        let tags = view.state.with_state(|s| s.loaded().map(|f| f.fields.tag_list.clone()));
        assert_eq!(tags, Some(vec!["rust".to_string()]));

        app.handle_key(press(KeyCode::Backspace));
        let tags = view.state.with_state(|s| s.loaded().map(|f| f.fields.tag_list.len()));
        assert_eq!(tags, Some(0));
    }

    #[tokio::test]
    async fn test_guest_favorite_goes_to_login() {
        let (ctx, http) = context();
        ctx.current_user.set_state(CurrentUser::guest());
        http.set_url_response(
            &url("/articles"),
            MockResponse::json(200, fixtures::articles_json(&["a"], 1)),
        );
        http.set_url_response(&url("/tags"), MockResponse::json(200, json!({"tags": []})));
        let mut app = App::new(ctx);
        app.start(Route::Home);
        let loaded = pump_until(&mut app, |app| match &app.screen {
            Screen::Home(view) => view.articles.state.with_state(|s| s.articles.loaded().is_some()),
            _ => false,
        })
        .await;
        assert!(loaded);

        app.handle_key(press(KeyCode::Char('f')));
        assert_eq!(app.route, Route::Login);
    }

    #[tokio::test]
    async fn test_comment_input_posts_comment() {
        let (ctx, http) = logged_in_context(fixtures::user("jake", "t"));
        http.set_response(
            Method::Get,
            &url("/articles/a"),
            MockResponse::json(200, json!({"article": fixtures::article_json("a", false, 0)})),
        );
        http.set_response(
            Method::Get,
            &url("/articles/a/comments"),
            MockResponse::json(200, json!({"comments": []})),
        );
        http.set_response(
            Method::Post,
            &url("/articles/a/comments"),
            MockResponse::json(200, json!({"comment": fixtures::comment_json(1, "jake")})),
        );
        let mut app = App::new(ctx);
        app.start(Route::Article("a".into()));

        app.handle_key(press(KeyCode::Char('c')));
        assert_eq!(app.focus, Focus::CommentInput);
        type_text(&mut app, "nice");
        app.handle_key(press(KeyCode::Enter));

        let posted = pump_until(&mut app, |app| match &app.screen {
            Screen::Article(view) => view.comment_form.state.with_state(|s| s.body.is_empty()),
            _ => false,
        })
        .await;
        assert!(posted);
        let post = http
            .get_requests()
            .into_iter()
            .find(|r| r.method == Method::Post)
            .unwrap();
        assert_eq!(post.json()["comment"]["body"], json!("nice"));
        let Screen::Article(view) = &app.screen else {
            panic!("expected article");
        };
        assert!(!matches!(view.state.state(), LoadState::Failed(_)));
    }
}
