//! Theme picker overlay: query line plus a selectable list.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::PickerState;
use crate::themes::Theme;
use crate::ui::theme::colors;

/// Query line + one row per theme + borders.
pub fn overlay_height() -> u16 {
    Theme::all().len() as u16 + 3
}

pub fn render(f: &mut Frame, picker: &PickerState, area: ratatui::prelude::Rect) {
    if !picker.visible {
        return;
    }
    let block = Block::default()
        .title(" Theme ")
        .title_style(Style::default().fg(colors::ACCENT))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("› ", Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(picker.query.clone(), Style::default().fg(colors::TEXT)),
    ])];

    if picker.filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no matching theme",
            Style::default().fg(colors::MUTED),
        )));
    }

    for (i, &idx) in picker.filtered.iter().enumerate() {
        let theme = &Theme::all()[idx];
        let selected = i == picker.selected_index;
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "▎ " } else { "  " },
                Style::default().fg(colors::ACCENT),
            ),
            Span::styled(
                format!("{:<12}", theme.name),
                if selected {
                    Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT_DIM)
                },
            ),
            Span::styled(
                theme.description,
                Style::default().fg(if selected { colors::TEXT_DIM } else { colors::MUTED }),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
