//! Draft editor pane: plain text, visible cursor, vertical follow-scroll.

use ratatui::{
    layout::Position,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    body: &str,
    cursor: usize,
    area: ratatui::prelude::Rect,
    active: bool,
) {
    let text_color = if active { colors::TEXT } else { colors::TEXT_DIM };
    let block = Block::default()
        .title(" Draft ")
        .title_style(Style::default().fg(colors::MUTED))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = body
        .split('\n')
        .map(|s| Line::from(Span::styled(s.to_string(), Style::default().fg(text_color))))
        .collect();

    let (cursor_line, cursor_col) = cursor_position(body, cursor);
    let height = inner.height as usize;
    let scroll = cursor_line.saturating_sub(height.saturating_sub(1));

    let para = Paragraph::new(lines)
        .style(Style::default().bg(colors::BG))
        .scroll((scroll as u16, 0));
    f.render_widget(para, inner);

    if active {
        let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (cursor_line - scroll) as u16;
        f.set_cursor_position(Position { x, y });
    }
}

/// (line, column-in-chars) of a byte offset into `body`.
fn cursor_position(body: &str, cursor: usize) -> (usize, usize) {
    let before = &body[..cursor.min(body.len())];
    let line = before.matches('\n').count();
    let col = before.rfind('\n').map_or(before.chars().count(), |p| {
        before[p + 1..].chars().count()
    });
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_position_tracks_lines_and_columns() {
        assert_eq!(cursor_position("", 0), (0, 0));
        assert_eq!(cursor_position("ab", 2), (0, 2));
        assert_eq!(cursor_position("ab\ncd", 3), (1, 0));
        assert_eq!(cursor_position("ab\ncd", 5), (1, 2));
    }

    #[test]
    fn cursor_position_counts_chars_not_bytes() {
        let body = "héllo";
        assert_eq!(cursor_position(body, body.len()), (0, 5));
    }
}
