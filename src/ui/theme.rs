//! Colour palettes for vortexflow
//!
//! One palette per theme mode. Both share the green accent; the dark one
//! sits on near-black greys, the light one on warm off-white.

use crate::types::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Complete palette with all required colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub bg_raised: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    /// Text drawn on top of an accent background
    pub on_accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Backdrop particles and the dimming overlay
    pub particle: Color,
    pub overlay: Color,
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x1D, 0x1E, 0x1E),
            bg_raised: Color::Rgb(0x24, 0x24, 0x24),
            fg: Color::Rgb(0xE6, 0xE6, 0xE6),
            fg_dim: Color::Rgb(0x8A, 0x8C, 0x8B),
            accent: Color::Rgb(0x2C, 0xC9, 0x85),
            on_accent: Color::Rgb(0x00, 0x00, 0x00),
            success: Color::Rgb(0x2C, 0xC9, 0x85),
            error: Color::Rgb(0xE5, 0x39, 0x35),
            border: Color::Rgb(0x32, 0x33, 0x32),
            selection_bg: Color::Rgb(0x32, 0x33, 0x32),
            selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            particle: Color::Rgb(0x2C, 0x6E, 0x52),
            overlay: Color::Rgb(0x45, 0x46, 0x46),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xF4, 0xF5, 0xF2),
            bg_raised: Color::Rgb(0xFF, 0xFF, 0xFF),
            fg: Color::Rgb(0x1D, 0x1E, 0x1E),
            fg_dim: Color::Rgb(0x6B, 0x6E, 0x6C),
            accent: Color::Rgb(0x1F, 0x9E, 0x67),
            on_accent: Color::Rgb(0xFF, 0xFF, 0xFF),
            success: Color::Rgb(0x1F, 0x9E, 0x67),
            error: Color::Rgb(0xC6, 0x28, 0x28),
            border: Color::Rgb(0xD0, 0xD3, 0xD0),
            selection_bg: Color::Rgb(0xDD, 0xF4, 0xE9),
            selection_fg: Color::Rgb(0x1D, 0x1E, 0x1E),
            particle: Color::Rgb(0x9F, 0xDC, 0xC0),
            overlay: Color::Rgb(0xB8, 0xBB, 0xB8),
        }
    }

    // === STYLE HELPERS ===

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlight for the active widget and active category
    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg_raised)
    }

    pub fn overlay_style(&self) -> Style {
        Style::default()
            .fg(self.overlay)
            .add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_mode() {
        let dark = Theme::from_mode(ThemeMode::Dark);
        assert_eq!(dark.bg, Color::Rgb(29, 30, 30));
        assert_eq!(dark.accent, Color::Rgb(44, 201, 133));

        let light = Theme::from_mode(ThemeMode::Light);
        assert_ne!(light.bg, dark.bg);
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
    }
}
