//! Palette and metrics: dark canvas, restrained accents.

use ratatui::style::Color;
use std::time::Duration;

pub mod colors {
    use super::*;
    /// Main canvas (editor area).
    pub const BG: Color = Color::Rgb(0x16, 0x18, 0x1d);
    /// Header, status, picker.
    pub const ELEVATED: Color = Color::Rgb(0x13, 0x15, 0x1a);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2b, 0x31, 0x3b);
    /// Primary accent (title, bullets, selection bar).
    pub const ACCENT: Color = Color::Rgb(0x8f, 0xb8, 0x72);
    /// Links, secondary accent.
    pub const ACCENT_SOFT: Color = Color::Rgb(0xb9, 0xd4, 0x9f);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xec, 0xef, 0xf4);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0xb4, 0xbd, 0xc9);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x8d, 0x97, 0xa6);
    /// Code blocks.
    pub const CODE_BG: Color = Color::Rgb(0x1d, 0x22, 0x2b);
    /// Publish failed.
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
    /// Publish succeeded.
    pub const SUCCESS: Color = Color::Rgb(0x7d, 0xc9, 0x83);
}

pub const HEADER_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;
/// Bordered banner for publish results.
pub const NOTICE_HEIGHT: u16 = 3;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Hint-bar fade: full strength for 2 s of idleness, then a slow 30 s ramp
/// down to a tenth; any key restores it instantly.
pub const HINT_FADE_DELAY: Duration = Duration::from_millis(2000);
pub const HINT_FADE_RAMP: Duration = Duration::from_secs(30);
pub const HINT_FADE_FROM: f32 = 1.0;
pub const HINT_FADE_TO: f32 = 0.1;
