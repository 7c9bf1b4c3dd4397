//! Fullscreen preview overlay: the draft rendered as styled lines.

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::markdown;
use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    body: &str,
    theme_name: &str,
    scroll: u16,
    area: ratatui::prelude::Rect,
) {
    let block = Block::default()
        .title(format!(" Preview · {theme_name} "))
        .title_style(Style::default().fg(colors::ACCENT))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let lines: Vec<Line> = markdown::to_lines(body);
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    let para = Paragraph::new(lines)
        .style(Style::default().fg(colors::TEXT).bg(colors::BG))
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    f.render_widget(para, inner);
}
