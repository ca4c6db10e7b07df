//! Notification stack above the key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::COLOR_ERROR;

/// At most this many messages are shown, newest last.
pub const MAX_VISIBLE: usize = 3;

/// Rows the stack needs for `count` messages; zero when there are none.
pub fn notifications_height(count: usize) -> u16 {
    if count == 0 {
        0
    } else {
        count.min(MAX_VISIBLE) as u16 + 2
    }
}

pub fn render_notifications(frame: &mut Frame, area: Rect, items: &[String]) {
    let hidden = items.len().saturating_sub(MAX_VISIBLE);
    let lines: Vec<Line> = items[hidden..]
        .iter()
        .map(|message| {
            Line::from(vec![
                Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
                Span::styled(message.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let title = if hidden > 0 {
        format!(" Notifications (+{} older) · Esc dismiss ", hidden)
    } else {
        " Notifications · Esc dismiss ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
