//! UI rendering.
//!
//! Every frame is drawn from snapshots of the visible screen's containers:
//! - Header with the navigation for the current user
//! - The screen body
//! - Notifications, when there are any
//! - Key hints for the focused pane

mod article;
mod article_list;
pub mod components;
mod forms;
mod header;
mod home;
mod layout;
mod notifications;
mod profile;
mod theme;

pub use header::{key_hints, nav_items};
pub use layout::LayoutContext;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::view_state::{FormState, LoadState};

pub fn render(frame: &mut Frame, app: &App) {
    let notes = app.notifications.items.state();
    let [header_area, body, notes_area, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(notifications::notifications_height(notes.len())),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    header::render_header(frame, header_area, app);
    let body = Rect {
        y: body.y + 1,
        height: body.height.saturating_sub(1),
        ..body
    };
    render_screen(frame, body, app);
    if !notes.is_empty() {
        notifications::render_notifications(frame, notes_area, &notes);
    }
    header::render_footer(frame, footer, app);
}

fn render_screen(frame: &mut Frame, area: Rect, app: &App) {
    match &app.screen {
        Screen::Home(view) => home::render_home(frame, area, view, app.focus),
        Screen::Article(view) => article::render_article(
            frame,
            area,
            view,
            app.focus,
            app.scroll,
            app.selected_comment,
        ),
        Screen::Profile(view) => profile::render_profile(frame, area, view),
        Screen::Login(form) => {
            forms::render_form(frame, area, "Sign in", Some("Need an account? [Esc] then [r]"), &form.state.state());
        }
        Screen::Register(form) => {
            forms::render_form(frame, area, "Sign up", Some("Have an account? [Esc] then [l]"), &form.state.state());
        }
        Screen::Settings(form) => {
            let state: LoadState<FormState<_>> = form.state.state();
            forms::render_loaded_form(frame, area, "Your Settings", &state);
        }
        Screen::Editor(view) => forms::render_editor(frame, area, &view.state.state()),
        Screen::NotFound(path) => frame.render_widget(
            Paragraph::new(format!("Not Found: {}", path))
                .style(Style::default().fg(COLOR_ERROR))
                .centered(),
            area,
        ),
    }
}
