//! Theme controller
//!
//! Owns the current dark/light mode and mirrors it onto the view: the root
//! theme attribute and the icon of the theme toggle.

use crate::types::ThemeMode;
use crate::view::ViewSurface;

pub const SUN_ICON: &str = "☀";
pub const MOON_ICON: &str = "☾";

/// Icon shown on the theme toggle. The sun offers "switch to light" while dark.
pub fn icon_for(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => SUN_ICON,
        ThemeMode::Light => MOON_ICON,
    }
}

#[derive(Debug, Default)]
pub struct ThemeController {
    current: ThemeMode,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn apply_theme(&mut self, theme: ThemeMode, view: &mut dyn ViewSurface) {
        self.current = theme;
        view.set_theme_attribute(theme);
        view.set_theme_icon(icon_for(theme));
        tracing::info!(theme = %theme, "theme applied");
    }

    /// Flip to the opposite theme, returning the new one
    pub fn toggle(&mut self, view: &mut dyn ViewSurface) -> ThemeMode {
        let next = self.current.opposite();
        self.apply_theme(next, view);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    #[test]
    fn test_icon_for_theme() {
        assert_eq!(icon_for(ThemeMode::Dark), SUN_ICON);
        assert_eq!(icon_for(ThemeMode::Light), MOON_ICON);
    }

    #[test]
    fn test_apply_theme_updates_view() {
        let mut view = RecordingView::default();
        let mut ctl = ThemeController::new();
        ctl.apply_theme(ThemeMode::Light, &mut view);
        assert_eq!(ctl.current(), ThemeMode::Light);
        assert_eq!(view.theme, Some(ThemeMode::Light));
        assert_eq!(view.icon, Some(MOON_ICON));
    }

    #[test]
    fn test_toggle_twice_restores_theme_and_icon() {
        let mut view = RecordingView::default();
        let mut ctl = ThemeController::new();
        ctl.apply_theme(ThemeMode::Dark, &mut view);

        assert_eq!(ctl.toggle(&mut view), ThemeMode::Light);
        assert_eq!(ctl.toggle(&mut view), ThemeMode::Dark);
        assert_eq!(view.theme, Some(ThemeMode::Dark));
        assert_eq!(view.icon, Some(SUN_ICON));
        assert_eq!(view.count("theme"), 3);
    }
}
