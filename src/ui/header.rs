//! Top navigation bar and bottom key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_BRAND, COLOR_DIM};
use crate::app::{App, Focus, Screen};
use crate::routes::Route;
use crate::shared::CurrentUser;

/// Navigation entries as `(key, label, route)` for `user`.
pub fn nav_items(user: &CurrentUser) -> Vec<(&'static str, String, Route)> {
    let mut items = vec![("h", "Home".to_string(), Route::Home)];
    match user {
        CurrentUser::Loading => {}
        CurrentUser::Loaded(None) => {
            items.push(("l", "Sign in".to_string(), Route::Login));
            items.push(("r", "Sign up".to_string(), Route::Register));
        }
        CurrentUser::Loaded(Some(user)) => {
            items.push(("n", "New Post".to_string(), Route::Editor));
            items.push(("s", "Settings".to_string(), Route::Settings));
            items.push((
                "p",
                format!("@{}", user.username),
                Route::Profile(user.username.clone()),
            ));
        }
    }
    items
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " conduit ",
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (key, label, route) in nav_items(&app.current_user()) {
        let style = if route == app.route {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{}] ", key), Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keys that do something on the visible screen, as `(key, action)`.
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = match (&app.screen, app.focus) {
        (Screen::Home(_), Focus::Tags) => vec![("↑↓", "tag"), ("Enter", "filter"), ("t", "articles")],
        (Screen::Home(_), _) => vec![
            ("↑↓", "select"),
            ("Enter", "open"),
            ("←→", "page"),
            ("Tab", "feed"),
            ("t", "tags"),
            ("f", "favorite"),
            ("a", "author"),
        ],
        (Screen::Profile(_), _) => vec![
            ("↑↓", "select"),
            ("Enter", "open"),
            ("←→", "page"),
            ("Tab", "tab"),
            ("F", "follow"),
            ("f", "favorite"),
        ],
        (Screen::Article(_), Focus::CommentInput) => {
            vec![("Enter", "post"), ("Alt+Enter", "newline"), ("Esc", "done")]
        }
        (Screen::Article(_), Focus::Comments) => {
            vec![("↑↓", "select"), ("x", "delete"), ("c", "comment"), ("Tab", "article")]
        }
        (Screen::Article(view), _) if view.can_modify() => vec![
            ("↑↓", "scroll"),
            ("Tab", "comments"),
            ("c", "comment"),
            ("e", "edit"),
            ("D", "delete"),
            ("f", "favorite"),
        ],
        (Screen::Article(_), _) => vec![
            ("↑↓", "scroll"),
            ("Tab", "comments"),
            ("c", "comment"),
            ("f", "favorite"),
            ("F", "follow"),
            ("a", "author"),
        ],
        (Screen::Editor(_), _) => vec![
            ("Tab", "next"),
            ("Enter", "add tag"),
            ("⌫", "remove tag"),
            ("Ctrl+S", "publish"),
        ],
        (Screen::Settings(_), _) => {
            vec![("Tab", "next"), ("Ctrl+S", "update"), ("Ctrl+L", "logout")]
        }
        (Screen::Login(_) | Screen::Register(_), _) => vec![("Tab", "next"), ("Enter", "submit")],
        (Screen::NotFound(_), _) => Vec::new(),
    };
    hints.push(("Esc", "back"));
    if !matches!(
        app.screen,
        Screen::Login(_) | Screen::Register(_) | Screen::Settings(_) | Screen::Editor(_)
    ) && app.focus != Focus::CommentInput
    {
        hints.push(("q", "quit"));
    }
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in key_hints(app) {
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn labels(user: &CurrentUser) -> Vec<String> {
        nav_items(user).into_iter().map(|(_, label, _)| label).collect()
    }

    #[test]
    fn test_nav_for_guest_and_user() {
        assert_eq!(labels(&CurrentUser::Loading), vec!["Home"]);
        assert_eq!(labels(&CurrentUser::guest()), vec!["Home", "Sign in", "Sign up"]);
        assert_eq!(
            labels(&CurrentUser::logged_in(fixtures::user("jake", "t"))),
            vec!["Home", "New Post", "Settings", "@jake"]
        );
    }

    #[tokio::test]
    async fn test_forms_do_not_offer_quit() {
        let (ctx, _http) = crate::context::test_support::context();
        ctx.current_user.set_state(CurrentUser::guest());
        let mut app = App::new(ctx);
        app.start(Route::Login);
        let hints = key_hints(&app);
        assert!(hints.contains(&("Enter", "submit")));
        assert!(!hints.iter().any(|(key, _)| *key == "q"));
    }
}
