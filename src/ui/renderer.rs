//! Mode-aware frame render: editor view, preview overlay, picker overlay.

use ratatui::Frame;

use crate::app::App;
use crate::state::Mode;
use crate::ui::layout;
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{
    picker_overlay_height, render_editor, render_header, render_notice, render_picker,
    render_preview, render_status,
};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let area = f.area();
    let regions = layout::compute(area, app.state.notice.is_some());
    let spinner_char = SPINNER[tick % SPINNER.len()];

    render_header(f, app.creator_address(), regions.header);
    if let Some(notice_area) = regions.notice {
        if let Some(notice) = &app.state.notice {
            render_notice(f, notice, notice_area);
        }
    }

    let editing = matches!(app.state.mode, Mode::Editing) && !app.state.picker.visible;
    render_editor(
        f,
        &app.state.draft.body,
        app.state.cursor,
        regions.editor,
        editing,
    );

    if let Mode::Previewing { scroll, .. } = app.state.mode {
        render_preview(
            f,
            &app.state.draft.body,
            app.state.theme.name,
            scroll,
            layout::preview_rect(area),
        );
    }

    render_status(
        f,
        regions.status,
        &app.state.mode,
        app.state.theme.name,
        spinner_char,
        app.fade.level(),
    );

    if app.state.picker.visible {
        let picker_area = layout::picker_rect(area, picker_overlay_height());
        render_picker(f, &app.state.picker, picker_area);
    }
}
