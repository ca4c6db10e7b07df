//! Home screen: banner, feed tabs, article list and popular tags.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::article_list::render_article_list;
use super::components::render_tab_selector;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_TAG};
use crate::app::Focus;
use crate::view_state::home::BANNER;
use crate::view_state::tags::LOADING_TAGS;
use crate::view_state::{HomeView, LoadState, TagListState};

pub fn render_home(frame: &mut Frame, area: Rect, view: &HomeView, focus: Focus) {
    let layout = LayoutContext::from_rect(area);
    let banner = view.shows_banner() && !layout.is_compact();
    let [banner_area, content] = Layout::vertical([
        Constraint::Length(if banner { 4 } else { 0 }),
        Constraint::Min(0),
    ])
    .areas(area);
    if banner {
        render_banner(frame, banner_area);
    }

    let sidebar_width = if layout.shows_sidebar() {
        layout.bounded_width(25, 20, 32)
    } else {
        0
    };
    let [main, sidebar] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(sidebar_width)]).areas(content);

    let [tabs_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(main);
    let tabs = view.tabs();
    let current = view.tab.state();
    let selected = tabs.iter().position(|t| *t == current).unwrap_or(0);
    let labels: Vec<String> = tabs.iter().map(|t| t.label()).collect();
    frame.render_widget(
        Paragraph::new(render_tab_selector(&labels, selected, focus == Focus::Main)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        tabs_area,
    );

    let articles = view.articles.state.state();
    render_article_list(frame, list_area, &articles, focus == Focus::Main);

    if sidebar_width > 0 {
        render_tags(frame, sidebar, &view.tags.state.state(), focus == Focus::Tags);
    }
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "conduit",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(BANNER, Style::default().fg(Color::White))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .block(Block::default().style(Style::default().bg(COLOR_BRAND))),
        Rect {
            y: area.y,
            height: area.height.saturating_sub(1),
            ..area
        },
    );
}

fn render_tags(frame: &mut Frame, area: Rect, state: &TagListState, focused: bool) {
    let border = if focused { Color::White } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(" Popular Tags [t] ");

    match &state.tags {
        LoadState::Loaded(tags) => {
            let items: Vec<ListItem> = tags
                .iter()
                .map(|tag| ListItem::new(Span::styled(format!("#{}", tag), Style::default().fg(COLOR_TAG))))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_symbol(if focused { "▶ " } else { "  " })
                .highlight_style(Style::default().fg(Color::White));
            let mut list_state = ListState::default().with_selected(Some(state.selected));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
        LoadState::Loading => frame.render_widget(
            Paragraph::new(LOADING_TAGS).style(Style::default().fg(COLOR_DIM)).block(block),
            area,
        ),
        LoadState::Empty => frame.render_widget(
            Paragraph::new("No tags yet.").style(Style::default().fg(COLOR_DIM)).block(block),
            area,
        ),
        LoadState::Failed(message) => frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(COLOR_ERROR)).block(block),
            area,
        ),
    }
}
