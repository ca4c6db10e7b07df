//! Input Field Component
//!
//! A bordered text input with the label as its title. The focused input shows
//! a block cursor; secret inputs are masked; multi-line inputs wrap and keep
//! their last line visible.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

const CURSOR: char = '\u{2588}';
const MASK: &str = "\u{2022}";

#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub is_password: bool,
    /// Text rows inside the border; 1 for single-line inputs.
    pub rows: u16,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            rows: 1,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Value as displayed: masked when secret, with the cursor when focused.
    pub fn display_value(&self) -> String {
        let mut content = if self.is_password {
            MASK.repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };
        if self.focused {
            content.push(CURSOR);
        }
        content
    }
}

/// Rows taken by an input including its border.
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    config.rows + 2
}

/// Rows `text` occupies when wrapped at `width`.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.split('\n')
        .map(|line| UnicodeWidthStr::width(line).max(1).div_ceil(width))
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

/// Render the input into `area` and return the rows used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let height = input_field_height(config).min(area.height);
    let area = Rect { height, ..area };

    let (border_color, text_style) = if config.focused {
        (Color::White, Style::default().fg(Color::White))
    } else {
        (COLOR_BORDER, Style::default().fg(Color::Gray))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(if config.focused { Color::White } else { COLOR_DIM }),
        ))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let content = config.display_value();
    let inner_width = area.width.saturating_sub(2);
    let visible = area.height.saturating_sub(2);
    let scroll = wrapped_rows(&content, inner_width).saturating_sub(visible);

    let text: Vec<Line> = content
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), text_style)))
        .collect();
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    height
}
