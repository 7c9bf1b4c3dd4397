//! Markdown to ratatui lines for the in-terminal preview.

use pulldown_cmark::{Event, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::colors;

/// Convert markdown to owned display lines. Mirrors the subset the published
/// document uses: headings, emphasis, links, images, blockquotes, code.
pub fn to_lines(md: &str) -> Vec<Line<'static>> {
    let mut w = Walker::default();
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    for event in Parser::new_ext(md, options) {
        w.event(event);
    }
    w.finish()
}

#[derive(Default)]
struct Walker {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    bold: bool,
    emphasis: bool,
    heading: Option<usize>,
    quote_depth: usize,
    in_link: bool,
    in_code_block: bool,
    code_lines: Vec<String>,
    list_depth: usize,
    ordered_index: Option<u64>,
}

impl Walker {
    fn event(&mut self, event: Event) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                self.flush();
                self.in_code_block = true;
                self.code_lines.clear();
            }
            Event::End(Tag::CodeBlock(_)) => {
                for line in self.code_lines.drain(..) {
                    self.lines.push(Line::from(vec![
                        Span::styled("  ", Style::default().bg(colors::CODE_BG)),
                        Span::styled(line, Style::default().fg(colors::TEXT).bg(colors::CODE_BG)),
                    ]));
                }
                self.lines.push(Line::from(Span::raw("")));
                self.in_code_block = false;
            }

            Event::Start(Tag::Heading(level, ..)) => {
                self.flush();
                self.heading = Some(level as usize);
                let marker = format!("{} ", "#".repeat(level as usize));
                self.current.push(Span::styled(
                    marker,
                    Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
                ));
            }
            Event::End(Tag::Heading(..)) => {
                self.heading = None;
                self.flush();
                self.lines.push(Line::from(Span::raw("")));
            }

            Event::Start(Tag::BlockQuote) => {
                self.flush();
                self.quote_depth += 1;
            }
            Event::End(Tag::BlockQuote) => {
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }

            Event::Start(Tag::List(start)) => {
                self.flush();
                self.list_depth += 1;
                self.ordered_index = start;
            }
            Event::End(Tag::List(_)) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.ordered_index = None;
                }
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                let bullet = if let Some(idx) = self.ordered_index {
                    self.ordered_index = Some(idx + 1);
                    format!("{indent}{idx}. ")
                } else {
                    let marker = if self.list_depth <= 1 { "• " } else { "◦ " };
                    format!("{indent}{marker}")
                };
                self.current.push(Span::styled(bullet, Style::default().fg(colors::ACCENT)));
            }
            Event::End(Tag::Item) => self.flush(),

            Event::Start(Tag::Link(..)) => self.in_link = true,
            Event::End(Tag::Link(..)) => self.in_link = false,

            Event::Start(Tag::Image(_, url, _)) => {
                self.current.push(Span::styled(
                    format!("[image: {url}"),
                    Style::default().fg(colors::MUTED),
                ));
            }
            Event::End(Tag::Image(..)) => {
                self.current.push(Span::styled("]", Style::default().fg(colors::MUTED)));
            }

            Event::Text(t) => {
                let s = t.to_string();
                if self.in_code_block {
                    self.code_lines.push(s);
                } else {
                    let style = self.text_style();
                    self.current.push(Span::styled(s, style));
                }
            }

            Event::Code(t) => {
                self.current.push(Span::styled(
                    format!(" {} ", t),
                    Style::default().fg(colors::ACCENT_SOFT).bg(colors::CODE_BG),
                ));
            }

            Event::Start(Tag::Strong) => self.bold = true,
            Event::End(Tag::Strong) => self.bold = false,
            Event::Start(Tag::Emphasis) => self.emphasis = true,
            Event::End(Tag::Emphasis) => self.emphasis = false,

            Event::SoftBreak | Event::HardBreak => self.flush(),
            Event::End(Tag::Paragraph) => {
                self.flush();
                self.lines.push(Line::from(Span::raw("")));
            }

            Event::Rule => {
                self.flush();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(colors::BORDER),
                )));
            }

            _ => {}
        }
    }

    fn text_style(&self) -> Style {
        let mut style = Style::default().fg(colors::TEXT);
        if self.heading.is_some() {
            style = style.fg(colors::ACCENT).add_modifier(Modifier::BOLD);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.in_link {
            style = style.fg(colors::ACCENT_SOFT).add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(colors::BORDER),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            self.lines.push(Line::from(Span::raw("")));
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn heading_gets_a_level_marker() {
        let lines = to_lines("## Section");
        assert_eq!(text_of(&lines)[0], "## Section");
    }

    #[test]
    fn blockquote_lines_are_prefixed() {
        let lines = to_lines("> quoted text");
        assert!(text_of(&lines)[0].starts_with("│ "));
    }

    #[test]
    fn lists_render_bullets_and_numbers() {
        let lines = to_lines("- one\n- two\n\n1. first");
        let text = text_of(&lines);
        assert!(text.iter().any(|l| l == "• one"));
        assert!(text.iter().any(|l| l == "1. first"));
    }

    #[test]
    fn empty_input_still_yields_a_line() {
        assert_eq!(to_lines("").len(), 1);
    }
}
