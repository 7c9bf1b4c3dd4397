//! Publish-outcome banner: success with a link, or a labeled failure.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::Notice;
use crate::ui::theme::colors;

pub fn render(f: &mut Frame, notice: &Notice, area: ratatui::prelude::Rect) {
    let (title, border, line) = match notice {
        Notice::Success { url } => {
            let line = match url {
                Some(url) => Line::from(vec![
                    Span::styled("View Post → ", Style::default().fg(colors::TEXT)),
                    Span::styled(
                        url.clone(),
                        Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::UNDERLINED),
                    ),
                ]),
                None => Line::from(Span::styled(
                    "Post published.",
                    Style::default().fg(colors::TEXT),
                )),
            };
            (" Success! ", colors::SUCCESS, line)
        }
        Notice::Failure { message } => (
            " Uh oh. ",
            colors::ERROR,
            Line::from(Span::styled(message.clone(), Style::default().fg(colors::TEXT))),
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);
}
