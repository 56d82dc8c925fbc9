//! Core data types shared across the shell
//!
//! Theme mode, view regions and the temporary flash message used by the
//! status bar.

use std::fmt;
use std::time::Instant;

/// Identifier of a selectable widget (the `data-widget` value of a control)
pub type WidgetId = String;

/// Identifier of a collapsible navigation category
pub type CategoryId = String;

/// Identifier of a toggle switch inside a widget
pub type SwitchId = String;

/// Colour scheme of the whole shell. Always starts as `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn opposite(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Value written to the root theme attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regions of the view whose visibility the core controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Intro,
    Main,
    Sidebar,
    Overlay,
}

#[cfg(test)]
impl Region {
    pub const ALL: [Region; 4] = [Region::Intro, Region::Main, Region::Sidebar, Region::Overlay];
}

/// A temporary UI message shown in the status bar
#[derive(Clone, Debug)]
pub struct FlashMessage {
    pub text: String,
    pub is_error: bool,
    pub created: Instant,
}

impl FlashMessage {
    pub fn new(text: String, is_error: bool) -> Self {
        Self {
            text,
            is_error,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, seconds: u64) -> bool {
        self.created.elapsed().as_secs() >= seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_opposite_is_involution() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_ne!(mode.opposite(), mode);
            assert_eq!(mode.opposite().opposite(), mode);
        }
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::Light.as_str(), "light");
    }

    #[test]
    fn test_flash_message_expiry() {
        let msg = FlashMessage::new("test".into(), false);
        assert!(!msg.is_expired(3));
        assert_eq!(msg.text, "test");
        assert!(!msg.is_error);
    }
}
