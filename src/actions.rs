//! User actions.

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Quit,

    Char(char),
    Backspace,
    Newline,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,

    Preview,
    ClosePreview,
    PreviewScrollUp,
    PreviewScrollDown,
    PreviewScrollPageUp,
    PreviewScrollPageDown,
    OpenPreviewInBrowser,

    Publish,
    DismissNotice,

    PickerShow,
    PickerHide,
    PickerUp,
    PickerDown,
    PickerSelect,
}
