//! UI layer: layout, theme, markdown, fade, renderer, widgets.

pub mod fade;
mod layout;
mod markdown;
mod renderer;
pub mod theme;
pub mod widgets;

pub use renderer::render;
