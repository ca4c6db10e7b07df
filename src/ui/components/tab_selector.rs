//! Tab Selector Component
//!
//! Horizontal tabs with a `▶` marker on the selected one.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_BRAND, COLOR_DIM};

/// One line of tabs. The selected tab is bold, brighter when `focused`.
pub fn render_tab_selector(labels: &[String], selected: usize, focused: bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, label) in labels.iter().enumerate() {
        if idx == selected {
            let marker_style = if focused {
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            spans.push(Span::styled("▶ ", marker_style));
            spans.push(Span::styled(
                label.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label.clone(), Style::default().fg(COLOR_DIM)));
        }
        if idx + 1 < labels.len() {
            spans.push(Span::raw("   "));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marks_selected_tab() {
        let labels = vec!["Global Feed".to_string(), "#rust".to_string()];
        let line = render_tab_selector(&labels, 1, true);
        assert_eq!(text(&line), "   Global Feed   ▶ #rust");
    }

    #[test]
    fn test_empty_tabs() {
        assert_eq!(text(&render_tab_selector(&[], 0, false)), " ");
    }
}
