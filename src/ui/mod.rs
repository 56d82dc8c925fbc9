//! User Interface layer for vortexflow
//!
//! Contains all drawing code:
//! - Dark and light palettes
//! - Reusable widgets (status bar, flash line, centering)
//! - The render pass for intro, main view, sidebar and overlay

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
