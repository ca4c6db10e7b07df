//! Article previews with pagination, shared by home and profile.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_TAG};
use crate::models::{format_date, Article};
use crate::view_state::article_list::NO_ARTICLES;
use crate::view_state::{ArticleListState, LoadState, Pagination};

/// Pages listed on either side of the current one.
const PAGE_WINDOW: u32 = 4;

pub fn preview_item(article: &Article) -> ListItem<'static> {
    let heart_style = if article.favorited {
        Style::default().fg(COLOR_FAVORITE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let heart = if article.favorited { "♥" } else { "♡" };

    let mut tags: Vec<Span> = article
        .tag_list
        .iter()
        .map(|tag| Span::styled(format!("#{} ", tag), Style::default().fg(COLOR_TAG)))
        .collect();
    tags.insert(0, Span::styled("Read more...  ", Style::default().fg(COLOR_DIM)));

    ListItem::new(Text::from(vec![
        Line::from(vec![
            Span::styled(article.author.username.clone(), Style::default().fg(COLOR_BRAND)),
            Span::styled(
                format!("  {}  ", format_date(&article.created_at)),
                Style::default().fg(COLOR_DIM),
            ),
            Span::styled(format!("{} {}", heart, article.favorites_count), heart_style),
        ]),
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(article.description.clone(), Style::default().fg(Color::Gray))),
        Line::from(tags),
        Line::default(),
    ]))
}

/// Page numbers around the current page, one-based, current in brackets.
pub fn pagination_line(pagination: &Pagination) -> Line<'static> {
    let count = pagination.page_count();
    let current = pagination.current_page;
    let first = current.saturating_sub(PAGE_WINDOW);
    let last = (current + PAGE_WINDOW).min(count.saturating_sub(1));

    let mut spans = vec![Span::styled(" Page ", Style::default().fg(COLOR_DIM))];
    if pagination.has_previous() {
        spans.push(Span::styled("← ", Style::default().fg(COLOR_DIM)));
    }
    if first > 0 {
        spans.push(Span::styled("… ", Style::default().fg(COLOR_DIM)));
    }
    for page in first..=last {
        if page == current {
            spans.push(Span::styled(
                format!("[{}] ", page + 1),
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!("{} ", page + 1), Style::default().fg(Color::Gray)));
        }
    }
    if last + 1 < count {
        spans.push(Span::styled("… ", Style::default().fg(COLOR_DIM)));
    }
    if pagination.has_next() {
        spans.push(Span::styled("→", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn render_article_list(frame: &mut Frame, area: Rect, state: &ArticleListState, focused: bool) {
    let page = match &state.articles {
        LoadState::Loading => {
            frame.render_widget(
                Paragraph::new(" Loading articles...").style(Style::default().fg(COLOR_DIM)),
                area,
            );
            return;
        }
        LoadState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(format!(" {}", message)).style(Style::default().fg(COLOR_ERROR)),
                area,
            );
            return;
        }
        LoadState::Empty => {
            frame.render_widget(
                Paragraph::new(format!(" {}", NO_ARTICLES)).style(Style::default().fg(COLOR_DIM)),
                area,
            );
            return;
        }
        LoadState::Loaded(page) => page,
    };

    let pagination = state.pagination().filter(Pagination::is_visible);
    let [list_area, pages_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(if pagination.is_some() { 1 } else { 0 }),
    ])
    .areas(area);

    let items: Vec<ListItem> = page.articles.iter().map(preview_item).collect();
    let highlight = if focused {
        Style::default().fg(COLOR_ACCENT).bg(Color::Rgb(30, 30, 40))
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol(if focused { "▌" } else { " " });
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    if let Some(pagination) = pagination {
        frame.render_widget(Paragraph::new(pagination_line(&pagination)), pages_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pagination_line_small() {
        let line = pagination_line(&Pagination::new(1, 25, 10));
        assert_eq!(text(&line), " Page ← 1 [2] 3 →");
    }

    #[test]
    fn test_pagination_line_windowed() {
        let line = pagination_line(&Pagination::new(10, 500, 10));
        assert_eq!(text(&line), " Page ← … 7 8 9 10 [11] 12 13 14 15 … →");
    }

    #[test]
    fn test_pagination_line_first_page() {
        let line = pagination_line(&Pagination::new(0, 20, 10));
        assert_eq!(text(&line), " Page [1] 2 →");
    }

    #[test]
    fn test_preview_shows_counts_and_tags() {
        let article = crate::models::fixtures::article("a", true, 3);
        let item = preview_item(&article);
        assert_eq!(item.height(), 5);
    }
}
