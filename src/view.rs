//! View surface
//!
//! The capability interface between the shell's state machine and whatever
//! draws it. The controllers only ever write through [`ViewSurface`]; the
//! terminal renderer reads the resulting [`ViewModel`].
//!
//! Writes that target an element the view does not have (an unknown widget,
//! a missing theme toggle) are silently ignored.

use crate::catalog::Catalog;
use crate::types::{CategoryId, Region, SwitchId, ThemeMode, WidgetId};
use std::collections::BTreeMap;

pub trait ViewSurface {
    fn set_visible(&mut self, region: Region, visible: bool);
    fn set_theme_attribute(&mut self, theme: ThemeMode);
    /// Replace the theme toggle's icon. No-op when the toggle is absent.
    fn set_theme_icon(&mut self, icon: &'static str);
    fn set_widget_active(&mut self, id: &str, active: bool);
    fn set_category_expanded(&mut self, id: &str, expanded: bool);
    fn set_category_active(&mut self, id: &str, active: bool);
    /// Flip a toggle switch, returning its new state if it exists
    fn toggle_switch(&mut self, id: &str) -> Option<bool>;
    fn set_cycling_text(&mut self, text: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryMarks {
    pub expanded: bool,
    pub active: bool,
}

/// In-memory view consumed by the terminal renderer
#[derive(Debug, Clone)]
pub struct ViewModel {
    intro_visible: bool,
    main_visible: bool,
    sidebar_visible: bool,
    overlay_visible: bool,
    pub theme_attribute: Option<ThemeMode>,
    /// `None` when the view has no theme toggle control
    pub theme_icon: Option<&'static str>,
    pub cycling_text: String,
    pub widgets: BTreeMap<WidgetId, bool>,
    pub categories: BTreeMap<CategoryId, CategoryMarks>,
    pub switches: BTreeMap<SwitchId, bool>,
    /// Number of writes that changed something
    pub revision: u64,
}

impl ViewModel {
    /// Build the element registry from the catalog. Everything starts hidden.
    pub fn new(catalog: &Catalog, with_theme_toggle: bool) -> Self {
        Self {
            intro_visible: false,
            main_visible: false,
            sidebar_visible: false,
            overlay_visible: false,
            theme_attribute: None,
            theme_icon: if with_theme_toggle { Some("") } else { None },
            cycling_text: String::new(),
            widgets: catalog.widgets().map(|w| (w.id.clone(), false)).collect(),
            categories: catalog
                .categories()
                .map(|c| (c.id.clone(), CategoryMarks::default()))
                .collect(),
            switches: catalog.switches().map(|s| (s.id.clone(), s.on)).collect(),
            revision: 0,
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Intro => self.intro_visible,
            Region::Main => self.main_visible,
            Region::Sidebar => self.sidebar_visible,
            Region::Overlay => self.overlay_visible,
        }
    }

    #[cfg(test)]
    pub fn has_theme_toggle(&self) -> bool {
        self.theme_icon.is_some()
    }

    pub fn is_widget_active(&self, id: &str) -> bool {
        self.widgets.get(id).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn active_widgets(&self) -> impl Iterator<Item = &str> {
        self.widgets
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| id.as_str())
    }

    pub fn category(&self, id: &str) -> CategoryMarks {
        self.categories.get(id).copied().unwrap_or_default()
    }

    pub fn switch_on(&self, id: &str) -> bool {
        self.switches.get(id).copied().unwrap_or(false)
    }

    fn bump(&mut self, changed: bool) {
        if changed {
            self.revision += 1;
        }
    }
}

impl ViewSurface for ViewModel {
    fn set_visible(&mut self, region: Region, visible: bool) {
        let slot = match region {
            Region::Intro => &mut self.intro_visible,
            Region::Main => &mut self.main_visible,
            Region::Sidebar => &mut self.sidebar_visible,
            Region::Overlay => &mut self.overlay_visible,
        };
        let changed = *slot != visible;
        *slot = visible;
        self.bump(changed);
    }

    fn set_theme_attribute(&mut self, theme: ThemeMode) {
        let changed = self.theme_attribute != Some(theme);
        self.theme_attribute = Some(theme);
        self.bump(changed);
    }

    fn set_theme_icon(&mut self, icon: &'static str) {
        let Some(current) = self.theme_icon.as_mut() else {
            tracing::trace!("theme toggle absent, icon not replaced");
            return;
        };
        let changed = *current != icon;
        *current = icon;
        self.bump(changed);
    }

    fn set_widget_active(&mut self, id: &str, active: bool) {
        let Some(slot) = self.widgets.get_mut(id) else {
            tracing::trace!(widget = id, "no such widget in view");
            return;
        };
        let changed = *slot != active;
        *slot = active;
        self.bump(changed);
    }

    fn set_category_expanded(&mut self, id: &str, expanded: bool) {
        let Some(marks) = self.categories.get_mut(id) else {
            tracing::trace!(category = id, "no such category in view");
            return;
        };
        let changed = marks.expanded != expanded;
        marks.expanded = expanded;
        self.bump(changed);
    }

    fn set_category_active(&mut self, id: &str, active: bool) {
        let Some(marks) = self.categories.get_mut(id) else {
            tracing::trace!(category = id, "no such category in view");
            return;
        };
        let changed = marks.active != active;
        marks.active = active;
        self.bump(changed);
    }

    fn toggle_switch(&mut self, id: &str) -> Option<bool> {
        let slot = self.switches.get_mut(id)?;
        *slot = !*slot;
        let now = *slot;
        self.bump(true);
        Some(now)
    }

    fn set_cycling_text(&mut self, text: &str) {
        let changed = self.cycling_text != text;
        if changed {
            self.cycling_text = text.to_string();
        }
        self.bump(changed);
    }
}

/// View surface that records every call, for asserting on write counts
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<String>,
    pub visible: std::collections::HashMap<Region, bool>,
    pub theme: Option<ThemeMode>,
    pub icon: Option<&'static str>,
    pub text: String,
}

#[cfg(test)]
impl RecordingView {
    pub fn count(&self, prefix: &str) -> usize {
        self.calls.iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }
}

#[cfg(test)]
impl ViewSurface for RecordingView {
    fn set_visible(&mut self, region: Region, visible: bool) {
        self.calls.push(format!("visible {:?} {}", region, visible));
        self.visible.insert(region, visible);
    }

    fn set_theme_attribute(&mut self, theme: ThemeMode) {
        self.calls.push(format!("theme {}", theme));
        self.theme = Some(theme);
    }

    fn set_theme_icon(&mut self, icon: &'static str) {
        self.calls.push(format!("icon {}", icon));
        self.icon = Some(icon);
    }

    fn set_widget_active(&mut self, id: &str, active: bool) {
        self.calls.push(format!("widget {} {}", id, active));
    }

    fn set_category_expanded(&mut self, id: &str, expanded: bool) {
        self.calls.push(format!("expanded {} {}", id, expanded));
    }

    fn set_category_active(&mut self, id: &str, active: bool) {
        self.calls.push(format!("category {} {}", id, active));
    }

    fn toggle_switch(&mut self, id: &str) -> Option<bool> {
        self.calls.push(format!("switch {}", id));
        None
    }

    fn set_cycling_text(&mut self, text: &str) {
        self.calls.push(format!("text {}", text));
        self.text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_view_starts_hidden() {
        let view = ViewModel::new(&Catalog::default(), true);
        for region in Region::ALL {
            assert!(!view.is_visible(region));
        }
        assert_eq!(view.active_widgets().count(), 0);
        assert!(view.has_theme_toggle());
        assert!(view.switch_on("auto-sort"));
        assert!(!view.switch_on("headless"));
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let mut view = ViewModel::new(&Catalog::default(), false);
        view.set_widget_active("nope", true);
        view.set_category_expanded("nope", true);
        view.set_theme_icon("☀");
        assert_eq!(view.toggle_switch("nope"), None);
        assert_eq!(view.revision, 0);
        assert!(!view.has_theme_toggle());
    }

    #[test]
    fn test_revision_counts_changes_only() {
        let mut view = ViewModel::new(&Catalog::default(), true);
        view.set_visible(Region::Main, true);
        view.set_visible(Region::Main, true);
        assert_eq!(view.revision, 1);
        assert_eq!(view.toggle_switch("headless"), Some(true));
        assert_eq!(view.revision, 2);
    }
}
