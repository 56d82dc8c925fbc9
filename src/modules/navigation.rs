//! Sidebar and navigation controller
//!
//! Holds sidebar open/closed, expanded and highlighted categories and the
//! active widget. Launching is the caller's job: the app runs the launch
//! gate before any of these transitions.

use crate::types::{CategoryId, Region, WidgetId};
use crate::view::ViewSurface;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct NavigationController {
    sidebar_open: bool,
    expanded: BTreeSet<CategoryId>,
    highlighted: BTreeSet<CategoryId>,
    active_widget: Option<WidgetId>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.contains(category)
    }

    #[cfg(test)]
    pub fn is_highlighted(&self, category: &str) -> bool {
        self.highlighted.contains(category)
    }

    pub fn active_widget(&self) -> Option<&str> {
        self.active_widget.as_deref()
    }

    /// Flip sidebar and overlay together. Returns the new open state.
    pub fn toggle_sidebar(&mut self, view: &mut dyn ViewSurface) -> bool {
        self.sidebar_open = !self.sidebar_open;
        view.set_visible(Region::Sidebar, self.sidebar_open);
        view.set_visible(Region::Overlay, self.sidebar_open);
        tracing::debug!(open = self.sidebar_open, "sidebar toggled");
        self.sidebar_open
    }

    /// Close if open; no writes when already closed
    pub fn close_sidebar(&mut self, view: &mut dyn ViewSurface) {
        if self.sidebar_open {
            self.toggle_sidebar(view);
        }
    }

    /// Flip a category's expanded flag. Returns the new flag.
    pub fn select_category(&mut self, id: &str, view: &mut dyn ViewSurface) -> bool {
        let expanded = if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        };
        view.set_category_expanded(id, expanded);
        tracing::debug!(category = id, expanded, "category toggled");
        expanded
    }

    /// Make `id` the only active widget. `owner` is the category the widget
    /// sits under, if any; it gets highlighted and other categories keep
    /// whatever highlight they had.
    pub fn activate_widget<'a>(
        &mut self,
        id: &str,
        owner: Option<&str>,
        all_widgets: impl IntoIterator<Item = &'a str>,
        view: &mut dyn ViewSurface,
    ) {
        for other in all_widgets {
            if other != id {
                view.set_widget_active(other, false);
            }
        }
        view.set_widget_active(id, true);
        self.active_widget = Some(id.to_string());

        if let Some(category) = owner {
            self.highlighted.insert(category.to_string());
            view.set_category_active(category, true);
        }
        tracing::debug!(widget = id, category = owner, "widget selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::view::{RecordingView, ViewModel};

    #[test]
    fn test_sidebar_and_overlay_move_together() {
        let mut view = RecordingView::default();
        let mut nav = NavigationController::new();
        assert!(nav.toggle_sidebar(&mut view));
        assert!(view.is_visible(Region::Sidebar));
        assert!(view.is_visible(Region::Overlay));
        assert!(!nav.toggle_sidebar(&mut view));
        assert!(!view.is_visible(Region::Sidebar));
        assert!(!view.is_visible(Region::Overlay));
    }

    #[test]
    fn test_close_sidebar_when_closed_writes_nothing() {
        let mut view = RecordingView::default();
        let mut nav = NavigationController::new();
        nav.close_sidebar(&mut view);
        assert!(view.calls.is_empty());
    }

    #[test]
    fn test_select_category_flips_expanded_only() {
        let mut view = RecordingView::default();
        let mut nav = NavigationController::new();
        assert!(nav.select_category("automation", &mut view));
        assert!(nav.is_expanded("automation"));
        assert!(!nav.select_category("automation", &mut view));
        assert!(!nav.is_expanded("automation"));
        assert_eq!(nav.active_widget(), None);
        assert_eq!(view.count("widget"), 0);
    }

    #[test]
    fn test_single_active_widget() {
        let catalog = Catalog::default();
        let mut view = ViewModel::new(&catalog, true);
        let mut nav = NavigationController::new();
        let ids: Vec<String> = catalog.widgets().map(|w| w.id.clone()).collect();

        for id in ["notes", "bulk-processor", "dashboard", "session-manager", "notes"] {
            let owner = catalog.owner_of(id).map(|c| c.as_str());
            nav.activate_widget(id, owner, ids.iter().map(|s| s.as_str()), &mut view);
            let active: Vec<&str> = view.active_widgets().collect();
            assert_eq!(active, vec![id]);
            assert_eq!(nav.active_widget(), Some(id));
        }
    }

    #[test]
    fn test_sub_item_highlights_owner_and_keeps_others() {
        let catalog = Catalog::default();
        let mut view = ViewModel::new(&catalog, true);
        let mut nav = NavigationController::new();
        let ids: Vec<String> = catalog.widgets().map(|w| w.id.clone()).collect();

        nav.activate_widget(
            "link-analyzer",
            Some("insights"),
            ids.iter().map(|s| s.as_str()),
            &mut view,
        );
        nav.activate_widget(
            "bulk-processor",
            Some("automation"),
            ids.iter().map(|s| s.as_str()),
            &mut view,
        );
        assert!(view.category("insights").active);
        assert!(view.category("automation").active);
        assert!(nav.is_highlighted("insights"));

        nav.activate_widget("notes", None, ids.iter().map(|s| s.as_str()), &mut view);
        assert!(view.category("automation").active);
    }
}
