//! Status bar: mode indicator left, fading key hints right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::state::Mode;
use crate::ui::fade;
use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    mode: &Mode,
    theme_name: &str,
    spinner_char: char,
    hint_level: f32,
) {
    let left = match mode {
        Mode::Publishing => format!(" {spinner_char} Publishing…"),
        Mode::Previewing { .. } => " Preview".to_string(),
        Mode::Editing => " Ready".to_string(),
    };
    let right = match mode {
        Mode::Previewing { .. } => " ↑↓ scroll  o open in browser  any key closes ".to_string(),
        _ => format!(" ^P preview  ^S publish  ^T theme ({theme_name})  ^Q quit "),
    };

    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);

    let hint_color = fade::dim(colors::MUTED, colors::ELEVATED, hint_level);
    let line = ratatui::text::Line::from(vec![
        Span::styled(left, Style::default().fg(colors::TEXT_DIM).bg(colors::ELEVATED)),
        Span::styled(" ".repeat(pad), Style::default().bg(colors::ELEVATED)),
        Span::styled(right, Style::default().fg(hint_color).bg(colors::ELEVATED)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
