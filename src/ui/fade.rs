//! Idle fade for decorative chrome. A terminal has no opacity, so the fade
//! level blends the foreground toward the background instead.

use ratatui::style::Color;
use std::time::{Duration, Instant};

pub struct Fade {
    start_delay: Duration,
    duration: Duration,
    from: f32,
    to: f32,
    armed_at: Instant,
}

impl Fade {
    pub fn new(start_delay: Duration, duration: Duration, from: f32, to: f32) -> Self {
        Self { start_delay, duration, from, to, armed_at: Instant::now() }
    }

    /// Restore full strength and re-arm the timer.
    pub fn touch(&mut self) {
        self.armed_at = Instant::now();
    }

    pub fn level(&self) -> f32 {
        self.level_at(Instant::now())
    }

    /// `from` until `start_delay` of idleness has passed, then a linear ramp
    /// to `to` over `duration`, where it stays.
    pub fn level_at(&self, now: Instant) -> f32 {
        let idle = now.saturating_duration_since(self.armed_at);
        if idle <= self.start_delay {
            return self.from;
        }
        let progress = (idle - self.start_delay).as_secs_f32() / self.duration.as_secs_f32();
        if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * progress
        }
    }
}

/// Blend `fg` toward `bg` by `level` (1.0 = pure fg, 0.0 = pure bg).
/// Non-RGB colors pass through unchanged.
pub fn dim(fg: Color, bg: Color, level: f32) -> Color {
    let level = level.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * level).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}
