//! Article page: header, markdown body, tags and the comment thread.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::components::{input_field_height, render_input_field, InputFieldConfig};
use super::theme::{
    COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_TAG,
};
use crate::app::Focus;
use crate::markdown::render_markdown;
use crate::models::{format_date, Article, Comment};
use crate::view_state::comments::SIGN_IN_TO_COMMENT;
use crate::view_state::{ArticleView, CommentFormState, LoadState};

pub fn render_article(
    frame: &mut Frame,
    area: Rect,
    view: &ArticleView,
    focus: Focus,
    scroll: u16,
    selected_comment: usize,
) {
    let article = match view.state.state() {
        LoadState::Loaded(article) => article,
        LoadState::Loading | LoadState::Empty => {
            frame.render_widget(
                Paragraph::new(" Loading article...").style(Style::default().fg(COLOR_DIM)),
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
    };

    let [header, body, comments] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Percentage(55),
        Constraint::Min(6),
    ])
    .areas(area);

    render_article_header(frame, header, &article, view.can_modify());

    let mut lines = render_markdown(&article.body);
    if !article.tag_list.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(
            article
                .tag_list
                .iter()
                .map(|tag| Span::styled(format!("#{} ", tag), Style::default().fg(COLOR_TAG)))
                .collect::<Vec<_>>(),
        ));
    }
    let body_border = if matches!(focus, Focus::Main | Focus::Tags) {
        Color::White
    } else {
        COLOR_BORDER
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(body_border)),
            ),
        body,
    );

    render_comments(frame, comments, view, focus, selected_comment);
}

/// Meta line with the actions available to the viewer.
pub fn article_meta(article: &Article, can_modify: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            article.author.username.clone(),
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}   ", format_date(&article.created_at)),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if can_modify {
        spans.push(Span::styled("[e] Edit Article  [D] Delete Article", Style::default().fg(Color::Gray)));
    } else {
        let follow = if article.author.following { "Unfollow" } else { "Follow" };
        spans.push(Span::styled(
            format!("[F] {} {}  ", follow, article.author.username),
            Style::default().fg(Color::Gray),
        ));
        let (heart, favorite) = if article.favorited {
            ("♥", "Unfavorite Article")
        } else {
            ("♡", "Favorite Article")
        };
        spans.push(Span::styled(
            format!("[f] {} {} ({})", heart, favorite, article.favorites_count),
            Style::default().fg(if article.favorited { COLOR_FAVORITE } else { Color::Gray }),
        ));
    }
    Line::from(spans)
}

fn render_article_header(frame: &mut Frame, area: Rect, article: &Article, can_modify: bool) {
    let lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(article.description.clone(), Style::default().fg(Color::Gray))),
        article_meta(article, can_modify),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().style(Style::default().bg(Color::Rgb(30, 30, 30)))),
        area,
    );
}

fn comment_item(comment: &Comment, deletable: bool) -> ListItem<'static> {
    let mut meta = vec![
        Span::styled(comment.author.username.clone(), Style::default().fg(COLOR_BRAND)),
        Span::styled(
            format!("  {}", format_date(&comment.created_at)),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if deletable {
        meta.push(Span::styled("  [x] delete", Style::default().fg(COLOR_DIM)));
    }
    let mut lines: Vec<Line> = comment
        .body
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(meta));
    lines.push(Line::default());
    ListItem::new(lines)
}

fn comment_form_lines(state: &CommentFormState) -> Vec<Line<'static>> {
    state
        .status
        .errors()
        .map(|errors| {
            errors
                .lines()
                .into_iter()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(COLOR_ERROR))))
                .collect()
        })
        .unwrap_or_default()
}

fn render_comments(
    frame: &mut Frame,
    area: Rect,
    view: &ArticleView,
    focus: Focus,
    selected_comment: usize,
) {
    let form_state = view.comment_form.state.state();
    let errors = comment_form_lines(&form_state);
    let input = InputFieldConfig::new(
        if form_state.status.is_submitting() { "Posting..." } else { "Write a comment... [c]" },
        &form_state.body,
    )
    .focused(focus == Focus::CommentInput)
    .rows(2);
    let form_height = if view.comment_form.is_available() {
        input_field_height(&input) + errors.len() as u16
    } else {
        1
    };

    let [form_area, list_area] =
        Layout::vertical([Constraint::Length(form_height), Constraint::Min(0)]).areas(area);

    if view.comment_form.is_available() {
        let used = render_input_field(frame, form_area, &input);
        let errors_area = Rect {
            y: form_area.y + used,
            height: form_area.height.saturating_sub(used),
            ..form_area
        };
        frame.render_widget(Paragraph::new(errors), errors_area);
    } else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} [l] [r]", SIGN_IN_TO_COMMENT),
                Style::default().fg(COLOR_DIM),
            )),
            form_area,
        );
    }

    let focused = focus == Focus::Comments;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(if focused { Color::White } else { COLOR_BORDER }))
        .title(" Comments [Tab] ");
    match view.comments.state.state() {
        LoadState::Loaded(comments) => {
            let items: Vec<ListItem> = comments
                .iter()
                .map(|c| comment_item(c, view.comments.can_delete(c)))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_symbol(if focused { "▌" } else { " " });
            let mut state = ListState::default().with_selected(focused.then_some(selected_comment));
            frame.render_stateful_widget(list, list_area, &mut state);
        }
        LoadState::Empty => frame.render_widget(
            Paragraph::new(" No comments yet.").style(Style::default().fg(COLOR_DIM)).block(block),
            list_area,
        ),
        LoadState::Loading => frame.render_widget(
            Paragraph::new(" Loading comments...").style(Style::default().fg(COLOR_DIM)).block(block),
            list_area,
        ),
        LoadState::Failed(message) => frame.render_widget(
            Paragraph::new(format!(" {}", message)).style(Style::default().fg(COLOR_ERROR)).block(block),
            list_area,
        ),
    }
}
