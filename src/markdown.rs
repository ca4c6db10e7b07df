//! Markdown to styled terminal lines.
//!
//! Article bodies are markdown. They are rendered to ratatui [`Line`]s once
//! per article and wrapped by the paragraph widget.
//!
//! Supports headings, paragraphs, block quotes, bullet and numbered lists,
//! fenced and indented code, inline code, bold, italic, strikethrough,
//! links (shown as `text (url)`), images and rules. Raw HTML is shown as text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);
const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);
const STYLE_HEADING: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const STYLE_LINK_URL: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
const STYLE_QUOTE: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC);
const STYLE_RULE: Style = Style::new().fg(Color::DarkGray);

/// Per-list numbering; `None` for bullet lists.
type ListStack = Vec<Option<u64>>;

/// Render `text` to lines. Blocks are separated by one blank line.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(text, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    lists: ListStack,
    quote_depth: usize,
    in_code_block: bool,
    link_url: Option<String>,
}

impl Renderer {
    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.style());
        self.styles.push(next);
    }

    fn prefix(&self) -> Vec<Span<'static>> {
        let mut prefix = Vec::new();
        for _ in 0..self.quote_depth {
            prefix.push(Span::styled("│ ".to_string(), STYLE_QUOTE));
        }
        if self.lists.len() > 1 {
            prefix.push(Span::raw("  ".repeat(self.lists.len() - 1)));
        }
        prefix
    }

    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = self.prefix();
        spans.append(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    /// A blank line between blocks, never two in a row and never at the top.
    fn separate(&mut self) {
        self.flush();
        let last_blank = self.lines.last().is_some_and(|l| l.width() == 0);
        if !self.lines.is_empty() && !last_blank && self.lists.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn text(&mut self, text: &str) {
        let style = self.style();
        if self.in_code_block {
            let mut parts = text.split('\n').peekable();
            while let Some(part) = parts.next() {
                if !part.is_empty() {
                    self.spans.push(Span::styled(format!("  {}", part), style));
                }
                if parts.peek().is_some() {
                    if self.spans.is_empty() {
                        self.lines.push(Line::default());
                    }
                    self.flush();
                }
            }
        } else {
            self.spans.push(Span::styled(text.to_string(), style));
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.spans.push(Span::styled(code.to_string(), STYLE_INLINE_CODE)),
            Event::Html(html) | Event::InlineHtml(html) => self.text(&html),
            Event::SoftBreak => self.spans.push(Span::raw(" ")),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.separate();
                self.lines.push(Line::from(Span::styled("─".repeat(40), STYLE_RULE)));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.separate();
                }
            }
            Tag::Heading { level, .. } => {
                self.separate();
                self.push_style(|_| STYLE_HEADING);
                self.spans
                    .push(Span::styled(format!("{} ", heading_marker(level)), STYLE_HEADING));
            }
            Tag::BlockQuote(_) => {
                self.separate();
                self.quote_depth += 1;
                self.push_style(|s| s.patch(STYLE_QUOTE));
            }
            Tag::CodeBlock(_) => {
                self.separate();
                self.in_code_block = true;
                self.push_style(|_| STYLE_CODE_BLOCK);
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.separate();
                } else {
                    self.flush();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    Some(None) | None => "• ".to_string(),
                };
                self.spans.push(Span::raw(marker));
            }
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(|s| s.add_modifier(Modifier::UNDERLINED));
            }
            Tag::Image { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.spans.push(Span::raw("[image: "));
                self.push_style(|s| s);
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush(),
            TagEnd::Heading(_) => {
                self.flush();
                self.styles.pop();
            }
            TagEnd::BlockQuote(_) => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.styles.pop();
            }
            TagEnd::CodeBlock => {
                self.flush();
                self.in_code_block = false;
                self.styles.pop();
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
            }
            TagEnd::Item => self.flush(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.styles.pop();
            }
            TagEnd::Link => {
                self.styles.pop();
                if let Some(url) = self.link_url.take() {
                    self.spans.push(Span::raw(" ("));
                    self.spans.push(Span::styled(url, STYLE_LINK_URL));
                    self.spans.push(Span::raw(")"));
                }
            }
            TagEnd::Image => {
                self.styles.pop();
                if let Some(url) = self.link_url.take() {
                    self.spans.push(Span::raw(" "));
                    self.spans.push(Span::styled(url, STYLE_LINK_URL));
                    self.spans.push(Span::raw("]"));
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.lines
    }
}

fn heading_marker(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "#",
        HeadingLevel::H2 => "##",
        HeadingLevel::H3 => "###",
        HeadingLevel::H4 => "####",
        HeadingLevel::H5 => "#####",
        HeadingLevel::H6 => "######",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_empty_input_yields_one_line() {
        assert_eq!(render_markdown("").len(), 1);
    }

    #[test]
    fn test_paragraphs_are_separated() {
        let lines = render_markdown("first\nstill first\n\nsecond");
        assert_eq!(plain(&lines), vec!["first still first", "", "second"]);
    }

    #[test]
    fn test_heading_is_styled() {
        let lines = render_markdown("## Title\n\nbody");
        assert_eq!(plain(&lines)[0], "## Title");
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_inline_styles() {
        let lines = render_markdown("a **bold** and *it* and `code`");
        let spans = &lines[0].spans;
        assert!(spans.iter().any(|s| s.content == "bold"
            && s.style.add_modifier.contains(Modifier::BOLD)));
        assert!(spans.iter().any(|s| s.content == "it"
            && s.style.add_modifier.contains(Modifier::ITALIC)));
        assert!(spans
            .iter()
            .any(|s| s.content == "code" && s.style == STYLE_INLINE_CODE));
    }

    #[test]
    fn test_code_block_keeps_lines() {
        let lines = render_markdown("```\nfn main() {\n\n}\n```");
        assert_eq!(plain(&lines), vec!["  fn main() {", "", "  }"]);
    }

    #[test]
    fn test_lists() {
        let lines = render_markdown("- a\n- b\n\n1. one\n2. two");
        assert_eq!(plain(&lines), vec!["• a", "• b", "", "1. one", "2. two"]);
    }

    #[test]
    fn test_nested_list_is_indented() {
        let lines = render_markdown("- a\n  - b");
        assert_eq!(plain(&lines), vec!["• a", "  • b"]);
    }

    #[test]
    fn test_link_shows_url() {
        let lines = render_markdown("see [docs](https://example.com)");
        assert_eq!(plain(&lines), vec!["see docs (https://example.com)"]);
    }

    #[test]
    fn test_block_quote_prefix() {
        let lines = render_markdown("> quoted");
        assert_eq!(plain(&lines), vec!["│ quoted"]);
    }

    #[test]
    fn test_rule() {
        let lines = render_markdown("a\n\n---\n\nb");
        assert!(plain(&lines).iter().any(|l| l.starts_with("───")));
    }
}
