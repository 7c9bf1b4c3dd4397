//! Writer state: draft, mode machine, notices, theme picker.

use crate::store::Draft;
use crate::themes::Theme;

/// What the writer is doing. Preview and publish are modes of the whole
/// screen, so combinations like "previewing while publishing" cannot exist.
#[derive(Debug)]
pub enum Mode {
    Editing,
    /// Holds the exact document a publish would upload right now; the
    /// overlay renders the draft, `o` opens this document in a browser.
    Previewing { document: String, scroll: u16 },
    Publishing,
}

impl Mode {
    pub fn is_publishing(&self) -> bool {
        matches!(self, Mode::Publishing)
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self, Mode::Previewing { .. })
    }
}

/// Outcome banner from the last publish attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// The job was scheduled; `url` is the published file's public URL when
    /// the receipt carried one.
    Success { url: Option<String> },
    Failure { message: String },
}

/// Theme picker overlay: query, fuzzy-filtered indices into `Theme::all()`.
#[derive(Clone, Debug, Default)]
pub struct PickerState {
    pub visible: bool,
    pub query: String,
    pub filtered: Vec<usize>,
    pub selected_index: usize,
}

impl PickerState {
    pub fn selected_theme(&self) -> Option<&'static Theme> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&i| Theme::all().get(i))
    }
}

pub struct AppState {
    pub draft: Draft,
    /// Byte offset of the editor cursor into `draft.body`.
    pub cursor: usize,
    pub mode: Mode,
    pub notice: Option<Notice>,
    /// Theme used for previews. Publishing always uses the default theme.
    pub theme: &'static Theme,
    pub picker: PickerState,
}

impl Default for AppState {
    fn default() -> Self {
        let draft = Draft::default();
        let cursor = draft.body.len();
        Self {
            draft,
            cursor,
            mode: Mode::Editing,
            notice: None,
            theme: Theme::default_theme(),
            picker: PickerState::default(),
        }
    }
}
