//! Profile page: user info, follow action and the two article tabs.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::article_list::render_article_list;
use super::components::render_tab_selector;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::models::Profile;
use crate::view_state::{LoadState, ProfileTab, ProfileView};

pub fn profile_lines(profile: &Profile, is_own: bool) -> Vec<Line<'static>> {
    let action = if is_own {
        "[s] Edit Profile Settings".to_string()
    } else if profile.following {
        format!("[F] Unfollow {}", profile.username)
    } else {
        format!("[F] Follow {}", profile.username)
    };
    vec![
        Line::from(Span::styled(
            profile.username.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.bio.clone().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(action, Style::default().fg(COLOR_DIM))),
    ]
}

pub fn render_profile(frame: &mut Frame, area: Rect, view: &ProfileView) {
    let [info, tabs_area, list_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let info_block = Block::default().style(Style::default().bg(Color::Rgb(30, 30, 30)));
    match view.state.state() {
        LoadState::Loaded(profile) => frame.render_widget(
            Paragraph::new(profile_lines(&profile, view.is_own()))
                .centered()
                .block(info_block),
            info,
        ),
        LoadState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(COLOR_ERROR)).block(info_block),
                info,
            );
            return;
        }
        LoadState::Loading | LoadState::Empty => frame.render_widget(
            Paragraph::new("Loading profile...").style(Style::default().fg(COLOR_DIM)).block(info_block),
            info,
        ),
    }

    let tab = view.tab.state();
    let labels: Vec<String> = [ProfileTab::MyArticles, ProfileTab::Favorited]
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    let selected = usize::from(tab == ProfileTab::Favorited);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&labels, selected, true)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        tabs_area,
    );

    render_article_list(frame, list_area, &view.articles.state.state(), true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_own_profile_offers_settings() {
        let lines = profile_lines(&fixtures::profile("jake", false), true);
        assert_eq!(texts(&lines)[2], "[s] Edit Profile Settings");
    }

    #[test]
    fn test_other_profile_offers_follow_state() {
        let lines = profile_lines(&fixtures::profile("anne", true), false);
        assert_eq!(texts(&lines)[2], "[F] Unfollow anne");
        let lines = profile_lines(&fixtures::profile("anne", false), false);
        assert_eq!(texts(&lines)[2], "[F] Follow anne");
    }
}
