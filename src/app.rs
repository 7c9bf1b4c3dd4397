//! Action dispatch and the publish pipeline.

use std::fs;

use tracing::warn;

use crate::actions::Action;
use crate::picker::update_picker_filter;
use crate::render::render_document;
use crate::state::{AppState, Mode, Notice};
use crate::store::{Draft, DraftStore, DRAFT_KEY};
use crate::studio::{JobRequest, JobTask, PublishReceipt, StudioApi, StudioError, TaskInputs};
use crate::themes::Theme;
use crate::ui::fade::Fade;
use crate::ui::theme::{HINT_FADE_DELAY, HINT_FADE_FROM, HINT_FADE_RAMP, HINT_FADE_TO};

pub struct App {
    pub state: AppState,
    store: Box<dyn DraftStore>,
    client: Box<dyn StudioApi>,
    creator: Option<String>,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
    /// Idle fade for the hint bar; touched on every action.
    pub fade: Fade,
}

impl App {
    pub fn new(store: Box<dyn DraftStore>, client: Box<dyn StudioApi>) -> Self {
        Self {
            state: AppState::default(),
            store,
            client,
            creator: None,
            should_quit: false,
            tick: 0,
            fade: Fade::new(HINT_FADE_DELAY, HINT_FADE_RAMP, HINT_FADE_FROM, HINT_FADE_TO),
        }
    }

    pub fn bootstrap(&mut self) {
        let _connected = self.client.health_check();
        match self.client.creator() {
            Ok(info) => self.creator = Some(info.address),
            Err(err) => warn!(error = %err, "creator lookup failed"),
        }
        self.state.draft = self.store.read(DRAFT_KEY, Draft::default());
        self.state.cursor = self.state.draft.body.len();
    }

    pub fn creator_address(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn dispatch(&mut self, action: Action) {
        self.fade.touch();
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                if self.state.picker.visible {
                    self.state.picker.query.push(c);
                    update_picker_filter(&mut self.state.picker);
                } else {
                    self.state.draft.body.insert(self.state.cursor, c);
                    self.state.cursor += c.len_utf8();
                    self.persist_draft();
                }
            }
            Action::Backspace => {
                if self.state.picker.visible {
                    self.state.picker.query.pop();
                    update_picker_filter(&mut self.state.picker);
                } else if self.state.cursor > 0 {
                    let prev = prev_char_start(&self.state.draft.body, self.state.cursor);
                    self.state.draft.body.remove(prev);
                    self.state.cursor = prev;
                    self.persist_draft();
                }
            }
            Action::Newline => {
                self.state.draft.body.insert(self.state.cursor, '\n');
                self.state.cursor += 1;
                self.persist_draft();
            }

            Action::CursorLeft => {
                self.state.cursor = prev_char_start(&self.state.draft.body, self.state.cursor);
            }
            Action::CursorRight => {
                self.state.cursor = next_char_end(&self.state.draft.body, self.state.cursor);
            }
            Action::CursorUp => {
                self.state.cursor = cursor_up(&self.state.draft.body, self.state.cursor);
            }
            Action::CursorDown => {
                self.state.cursor = cursor_down(&self.state.draft.body, self.state.cursor);
            }
            Action::CursorHome => {
                self.state.cursor = line_start(&self.state.draft.body, self.state.cursor);
            }
            Action::CursorEnd => {
                self.state.cursor = line_end(&self.state.draft.body, self.state.cursor);
            }

            Action::Preview => {
                if !self.state.mode.is_publishing() {
                    let document = render_document(&self.state.draft.body, self.state.theme.css);
                    self.state.mode = Mode::Previewing { document, scroll: 0 };
                }
            }
            Action::ClosePreview => {
                if self.state.mode.is_previewing() {
                    self.state.mode = Mode::Editing;
                }
            }
            Action::PreviewScrollUp => self.scroll_preview(-1),
            Action::PreviewScrollDown => self.scroll_preview(1),
            Action::PreviewScrollPageUp => self.scroll_preview(-10),
            Action::PreviewScrollPageDown => self.scroll_preview(10),
            Action::OpenPreviewInBrowser => self.open_preview_in_browser(),

            Action::Publish => self.publish(),
            Action::DismissNotice => self.state.notice = None,

            Action::PickerShow => {
                if !self.state.mode.is_publishing() {
                    self.state.picker.visible = true;
                    self.state.picker.query.clear();
                    update_picker_filter(&mut self.state.picker);
                }
            }
            Action::PickerHide => self.state.picker.visible = false,
            Action::PickerUp => {
                let len = self.state.picker.filtered.len();
                if len > 0 {
                    self.state.picker.selected_index =
                        (self.state.picker.selected_index + len - 1) % len;
                }
            }
            Action::PickerDown => {
                let len = self.state.picker.filtered.len();
                if len > 0 {
                    self.state.picker.selected_index = (self.state.picker.selected_index + 1) % len;
                }
            }
            Action::PickerSelect => {
                if let Some(theme) = self.state.picker.selected_theme() {
                    self.state.theme = theme;
                }
                self.state.picker.visible = false;
            }
        }
    }

    /// The publish sequence: asset, render, upload, job — in that order,
    /// stopping at the first failure. The draft is only reset once the whole
    /// chain settled successfully.
    fn publish(&mut self) {
        if self.state.mode.is_publishing() {
            return;
        }
        self.state.notice = None;
        self.state.mode = Mode::Publishing;

        let result = self.run_publish();
        self.state.mode = Mode::Editing;

        match result {
            Ok(receipt) => {
                self.state.draft = Draft::default();
                self.state.cursor = self.state.draft.body.len();
                self.persist_draft();
                let url = receipt.reference_url().map(str::to_string);
                self.state.notice = Some(Notice::Success { url });
            }
            Err(err) => {
                self.state.notice = Some(Notice::Failure { message: err.to_string() });
            }
        }
    }

    fn run_publish(&self) -> Result<PublishReceipt, StudioError> {
        let asset = self.client.create_asset()?;

        let html = render_document(&self.state.draft.body, Theme::default_theme().css);
        let address = self.creator.as_deref().unwrap_or("creator");
        let file_name = format!("{address}-post.html");
        self.client.upload_file(&asset.id, &file_name, html.into_bytes())?;

        let request = JobRequest {
            tasks: vec![JobTask {
                task_ref: "arweave".to_string(),
                name: "Publish Post".to_string(),
                description: "Uploading your post to decentralized storage".to_string(),
                task_type: "arweave-upload".to_string(),
                inputs: TaskInputs { asset_id: asset.id },
            }],
        };
        self.client.create_job(&request)
    }

    fn persist_draft(&mut self) {
        if let Err(err) = self.store.write(DRAFT_KEY, &self.state.draft) {
            warn!(error = %err, "failed to persist draft");
        }
    }

    fn scroll_preview(&mut self, delta: i32) {
        if let Mode::Previewing { scroll, .. } = &mut self.state.mode {
            *scroll = scroll.saturating_add_signed(delta as i16);
        }
    }

    fn open_preview_in_browser(&self) {
        if let Mode::Previewing { document, .. } = &self.state.mode {
            let path = std::env::temp_dir().join("quill-preview.html");
            match fs::write(&path, document) {
                Ok(()) => {
                    if let Err(err) = open::that(&path) {
                        warn!(error = %err, "could not open preview in browser");
                    }
                }
                Err(err) => warn!(error = %err, "could not write preview file"),
            }
        }
    }
}

fn prev_char_start(s: &str, at: usize) -> usize {
    s[..at].chars().next_back().map(|c| at - c.len_utf8()).unwrap_or(0)
}

fn next_char_end(s: &str, at: usize) -> usize {
    s[at..].chars().next().map(|c| at + c.len_utf8()).unwrap_or(at)
}

fn line_start(s: &str, at: usize) -> usize {
    s[..at].rfind('\n').map(|p| p + 1).unwrap_or(0)
}

fn line_end(s: &str, at: usize) -> usize {
    s[at..].find('\n').map(|p| at + p).unwrap_or(s.len())
}

fn cursor_up(s: &str, at: usize) -> usize {
    let start = line_start(s, at);
    if start == 0 {
        return at;
    }
    let col = s[start..at].chars().count();
    let prev_start = line_start(s, start - 1);
    advance_by_chars(s, prev_start, start - 1, col)
}

fn cursor_down(s: &str, at: usize) -> usize {
    let end = line_end(s, at);
    if end == s.len() {
        return at;
    }
    let col = s[line_start(s, at)..at].chars().count();
    let next_start = end + 1;
    advance_by_chars(s, next_start, line_end(s, next_start), col)
}

/// Byte index after walking at most `col` chars from `start`, capped at `end`.
fn advance_by_chars(s: &str, start: usize, end: usize, col: usize) -> usize {
    let mut idx = start;
    for c in s[start..end].chars().take(col) {
        idx += c.len_utf8();
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::studio::{AssetRef, CreatorInfo};
    use reqwest::StatusCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeStudio {
        calls: Rc<RefCell<Vec<String>>>,
        fail_create_asset: bool,
        receipt: Rc<serde_json::Value>,
    }

    impl FakeStudio {
        fn with_receipt(value: serde_json::Value) -> Self {
            Self { receipt: Rc::new(value), ..Default::default() }
        }

        fn failing_at_asset_creation() -> Self {
            Self { fail_create_asset: true, ..Default::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl StudioApi for FakeStudio {
        fn create_asset(&self) -> Result<AssetRef, StudioError> {
            self.calls.borrow_mut().push("create_asset".into());
            if self.fail_create_asset {
                return Err(StudioError::Api {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "asset service down".into(),
                });
            }
            Ok(AssetRef { id: "asset-1".into() })
        }

        fn upload_file(&self, asset_id: &str, file_name: &str, _bytes: Vec<u8>) -> Result<(), StudioError> {
            self.calls.borrow_mut().push(format!("upload_file {asset_id} {file_name}"));
            Ok(())
        }

        fn create_job(&self, request: &JobRequest) -> Result<PublishReceipt, StudioError> {
            self.calls
                .borrow_mut()
                .push(format!("create_job {}", request.tasks[0].inputs.asset_id));
            Ok(PublishReceipt((*self.receipt).clone()))
        }

        fn creator(&self) -> Result<CreatorInfo, StudioError> {
            Ok(CreatorInfo { address: "0xabc".into() })
        }

        fn health_check(&self) -> bool {
            true
        }
    }

    fn app_with(client: FakeStudio) -> App {
        let mut app = App::new(Box::new(MemoryStore::new()), Box::new(client));
        app.bootstrap();
        app
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                app.dispatch(Action::Newline);
            } else {
                app.dispatch(Action::Char(c));
            }
        }
    }

    #[test]
    fn typing_writes_through_the_store() {
        let mut app = app_with(FakeStudio::default());
        type_str(&mut app, "Hello");
        assert_eq!(app.state.draft.body, "# Hello");
        let stored = app.store.read(DRAFT_KEY, Draft { body: String::new() });
        assert_eq!(stored.body, "# Hello");
    }

    #[test]
    fn preview_computes_document_without_mutating_draft() {
        let mut app = app_with(FakeStudio::default());
        type_str(&mut app, "Hello");
        app.dispatch(Action::Preview);
        match &app.state.mode {
            Mode::Previewing { document, .. } => {
                assert!(document.contains("<h1>Hello</h1>"));
                assert!(document.contains(Theme::get("retro").unwrap().css));
            }
            other => panic!("expected preview mode, got {other:?}"),
        }
        assert_eq!(app.state.draft.body, "# Hello");
        app.dispatch(Action::ClosePreview);
        assert!(matches!(app.state.mode, Mode::Editing));
        assert_eq!(app.state.draft.body, "# Hello");
    }

    #[test]
    fn publish_success_resets_draft_and_surfaces_url() {
        let client = FakeStudio::with_receipt(serde_json::json!({
            "context": { "arweave": { "output": { "asset": {
                "files": [{ "arweaveURL": "https://arweave.net/tx9" }]
            }}}}
        }));
        let mut app = app_with(client.clone());
        type_str(&mut app, "Post body");
        app.dispatch(Action::Publish);

        assert_eq!(app.state.draft.body, "# ");
        assert!(matches!(app.state.mode, Mode::Editing));
        assert_eq!(
            app.state.notice,
            Some(Notice::Success { url: Some("https://arweave.net/tx9".into()) })
        );
        // The reset is persisted, not just in memory.
        assert_eq!(app.store.read(DRAFT_KEY, Draft { body: String::new() }).body, "# ");
        assert_eq!(
            client.calls(),
            vec![
                "create_asset".to_string(),
                "upload_file asset-1 0xabc-post.html".to_string(),
                "create_job asset-1".to_string(),
            ]
        );
    }

    #[test]
    fn publish_failure_leaves_draft_and_stops_the_chain() {
        let client = FakeStudio::failing_at_asset_creation();
        let mut app = app_with(client.clone());
        type_str(&mut app, "Keep me");
        app.dispatch(Action::Publish);

        assert_eq!(app.state.draft.body, "# Keep me");
        assert!(matches!(app.state.mode, Mode::Editing));
        match &app.state.notice {
            Some(Notice::Failure { message }) => assert!(message.contains("asset service down")),
            other => panic!("expected failure notice, got {other:?}"),
        }
        // Short-circuit: no upload, no job.
        assert_eq!(client.calls(), vec!["create_asset".to_string()]);
    }

    #[test]
    fn publish_while_publishing_is_a_no_op() {
        let client = FakeStudio::default();
        let mut app = app_with(client.clone());
        app.state.mode = Mode::Publishing;
        app.dispatch(Action::Publish);
        assert!(client.calls().is_empty());
        assert_eq!(app.state.notice, None);
        assert!(app.state.mode.is_publishing());
    }

    #[test]
    fn preview_is_disabled_while_publishing() {
        let mut app = app_with(FakeStudio::default());
        app.state.mode = Mode::Publishing;
        app.dispatch(Action::Preview);
        assert!(app.state.mode.is_publishing());
    }

    #[test]
    fn publish_without_receipt_url_still_succeeds() {
        let client = FakeStudio::with_receipt(serde_json::json!({ "jobId": 3 }));
        let mut app = app_with(client);
        app.dispatch(Action::Publish);
        assert_eq!(app.state.notice, Some(Notice::Success { url: None }));
    }

    #[test]
    fn picker_selects_the_preview_theme() {
        let mut app = app_with(FakeStudio::default());
        app.dispatch(Action::PickerShow);
        type_str(&mut app, "air");
        app.dispatch(Action::PickerSelect);
        assert_eq!(app.state.theme.name, "air");
        assert!(!app.state.picker.visible);
        // The draft was untouched while the picker had focus.
        assert_eq!(app.state.draft.body, "# ");

        app.dispatch(Action::Preview);
        match &app.state.mode {
            Mode::Previewing { document, .. } => {
                assert!(document.contains(Theme::get("air").unwrap().css));
            }
            other => panic!("expected preview mode, got {other:?}"),
        }
    }

    #[test]
    fn bootstrap_reads_existing_draft() {
        let mut store = MemoryStore::new();
        store.write(DRAFT_KEY, &Draft { body: "# resumed".into() }).unwrap();
        let mut app = App::new(Box::new(store), Box::new(FakeStudio::default()));
        app.bootstrap();
        assert_eq!(app.state.draft.body, "# resumed");
        assert_eq!(app.state.cursor, "# resumed".len());
        assert_eq!(app.creator_address(), Some("0xabc"));
    }

    #[test]
    fn cursor_moves_between_lines() {
        let body = "alpha\nbeta\ngamma";
        assert_eq!(cursor_up(body, 8), 2); // "be|ta" -> "al|pha"
        assert_eq!(cursor_down(body, 2), 8);
        assert_eq!(cursor_up(body, 2), 2); // first line: no-op
        assert_eq!(cursor_down(body, 12), 12); // last line: no-op
        assert_eq!(line_start(body, 8), 6);
        assert_eq!(line_end(body, 8), 10);
    }

    #[test]
    fn cursor_clamps_to_shorter_lines() {
        let body = "long line\nhi";
        // From the end of "long line" down to "hi" lands at the end of "hi".
        assert_eq!(cursor_down(body, 9), body.len());
        // And back up preserves the (clamped) column count.
        assert_eq!(cursor_up(body, body.len()), 2);
    }

    #[test]
    fn backspace_respects_utf8_boundaries() {
        let mut app = app_with(FakeStudio::default());
        type_str(&mut app, "é");
        assert_eq!(app.state.draft.body, "# é");
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.draft.body, "# ");
    }
}
