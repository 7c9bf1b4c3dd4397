//! Vertical regions: header, optional notice banner, editor, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HEADER_HEIGHT, MARGIN_X, NOTICE_HEIGHT, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub notice: Option<Rect>,
    pub editor: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect, has_notice: bool) -> LayoutRegions {
    let notice_height = if has_notice { NOTICE_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(notice_height),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let editor = Rect {
        x: area.x + MARGIN_X,
        y: chunks[2].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[2].height,
    };
    LayoutRegions {
        header: chunks[0],
        notice: has_notice.then_some(chunks[1]),
        editor,
        status: chunks[3],
    }
}

/// Fullscreen-minus-status rect for the preview overlay.
pub fn preview_rect(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(STATUS_HEIGHT),
    }
}

/// Bottom-anchored rect for the theme picker overlay.
pub fn picker_rect(area: Rect, height: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height + STATUS_HEIGHT + 1),
        width: area.width,
        height,
    }
}
