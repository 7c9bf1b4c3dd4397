//! Header line: app name, version, creator address.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, creator: Option<&str>, area: ratatui::prelude::Rect) {
    let left = format!(" Quill v{VERSION}");
    let right = match creator {
        Some(address) => format!(" {} ", truncate_end(address, 24)),
        None => " offline ".to_string(),
    };

    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + right.chars().count());
    let line = Line::from(vec![
        Span::styled(
            " Quill ",
            Style::default().fg(colors::ACCENT).bg(colors::ELEVATED).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("v{VERSION}"), Style::default().fg(colors::MUTED).bg(colors::ELEVATED)),
        Span::styled(" ".repeat(pad), Style::default().bg(colors::ELEVATED)),
        Span::styled(right, Style::default().fg(colors::TEXT_DIM).bg(colors::ELEVATED)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Truncate to `max_chars` from the end with ellipsis.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_end("0xabc", 24), "0xabc");
    }

    #[test]
    fn truncate_ellipsizes_the_front() {
        let long = "0x1234567890abcdef1234567890abcdef";
        let out = truncate_end(long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.starts_with('…'));
        assert!(long.ends_with(&out[3..])); // '…' is 3 bytes
    }
}
