//! Form screens: sign in, sign up, settings and the article editor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{input_field_height, render_input_field, InputFieldConfig};
use super::theme::{COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_TAG};
use crate::view_state::{EditorFields, FieldSet, FormState, LoadState};

/// Rows given to multi-line inputs.
const MULTILINE_ROWS: u16 = 6;

/// Widest a form gets; it is centered in wider terminals.
const FORM_WIDTH: u16 = 72;

/// Server errors as `"<field> <message>"` lines.
pub fn error_lines<F: FieldSet>(form: &FormState<F>) -> Vec<Line<'static>> {
    form.status
        .errors()
        .map(|errors| {
            errors
                .lines()
                .into_iter()
                .map(|line| {
                    Line::from(vec![
                        Span::styled("• ", Style::default().fg(COLOR_ERROR)),
                        Span::styled(line, Style::default().fg(COLOR_ERROR)),
                    ])
                })
                .collect()
        })
        .unwrap_or_default()
}

fn centered(area: Rect) -> Rect {
    let width = area.width.min(FORM_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Title, subtitle, error lines and every input of `form`.
///
/// Returns the area left below the inputs.
pub fn render_form<F: FieldSet>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: Option<&str>,
    form: &FormState<F>,
) -> Rect {
    let area = centered(area);
    let errors = error_lines(form);
    let mut y = area.y;
    let bottom = area.y + area.height;

    let mut header = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        header.push(Line::from(Span::styled(subtitle.to_string(), Style::default().fg(COLOR_BRAND))));
    }
    header.extend(errors);
    if form.status.is_submitting() {
        header.push(Line::from(Span::styled("Submitting...", Style::default().fg(COLOR_DIM))));
    }
    let header_height = (header.len() as u16 + 1).min(area.height);
    frame.render_widget(Paragraph::new(header).centered(), Rect { height: header_height, ..area });
    y += header_height;

    for (index, label) in F::labels().iter().enumerate() {
        let value = form.fields.field(index).unwrap_or_default();
        let config = InputFieldConfig::new(label, value)
            .focused(index == form.focus && !form.status.is_submitting())
            .password(F::is_secret(index))
            .rows(if F::is_multiline(index) { MULTILINE_ROWS } else { 1 });
        let height = input_field_height(&config);
        if y + height > bottom {
            break;
        }
        y += render_input_field(frame, Rect { y, height, ..area }, &config);
    }

    Rect {
        y,
        height: bottom.saturating_sub(y),
        ..area
    }
}

/// A form that is fetched first, like settings and the editor.
pub fn render_loaded_form<F: FieldSet>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    state: &LoadState<FormState<F>>,
) -> Option<Rect> {
    match state {
        LoadState::Loaded(form) => Some(render_form(frame, area, title, None, form)),
        LoadState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(message.as_str()).style(Style::default().fg(COLOR_ERROR)).centered(),
                area,
            );
            None
        }
        LoadState::Loading | LoadState::Empty => {
            frame.render_widget(
                Paragraph::new("Loading...").style(Style::default().fg(COLOR_DIM)).centered(),
                area,
            );
            None
        }
    }
}

pub fn tag_line(fields: &EditorFields) -> Line<'static> {
    let mut spans: Vec<Span> = fields
        .tag_list
        .iter()
        .map(|tag| Span::styled(format!("✗ {}  ", tag), Style::default().fg(COLOR_TAG)))
        .collect();
    if spans.is_empty() {
        spans.push(Span::styled("No tags", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn render_editor(frame: &mut Frame, area: Rect, state: &LoadState<FormState<EditorFields>>) {
    if let Some(rest) = render_loaded_form(frame, area, "Editor", state) {
        if let Some(form) = state.loaded() {
            frame.render_widget(Paragraph::new(tag_line(&form.fields)), rest);
        }
    }
}
