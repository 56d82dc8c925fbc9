//! Control table
//!
//! Every click-emitting element of the shell has a [`ControlId`]. The table
//! maps each id present in the view to its handler and is built once from
//! the catalog. Keys and mouse clicks both resolve to an id and go through
//! [`App::dispatch`](crate::app::App::dispatch).

use crate::app::App;
use crate::catalog::{Catalog, MenuEntry};
use crate::types::{SwitchId, WidgetId};
use ratatui::layout::Rect;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    SidebarToggle,
    Overlay,
    ThemeToggle,
    /// Top-level sidebar entry, by entry id
    MenuItem(String),
    /// Sub-item widget button inside a category
    WidgetButton(WidgetId),
    Switch(SwitchId),
}

pub type Handler = fn(&mut App, &ControlId);

#[derive(Clone, Default)]
pub struct ControlTable {
    handlers: HashMap<ControlId, Handler>,
}

impl std::fmt::Debug for ControlTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl ControlTable {
    pub fn build(catalog: &Catalog, with_theme_toggle: bool) -> Self {
        let mut handlers: HashMap<ControlId, Handler> = HashMap::new();
        handlers.insert(ControlId::SidebarToggle, on_sidebar_toggle);
        handlers.insert(ControlId::Overlay, on_overlay);
        if with_theme_toggle {
            handlers.insert(ControlId::ThemeToggle, on_theme_toggle);
        }

        for entry in catalog.entries() {
            handlers.insert(ControlId::MenuItem(entry.id().to_string()), on_menu_item);
            if let MenuEntry::Category(category) = entry {
                for item in &category.items {
                    handlers.insert(ControlId::WidgetButton(item.id.clone()), on_widget_button);
                }
            }
        }
        for switch in catalog.switches() {
            handlers.insert(ControlId::Switch(switch.id.clone()), on_switch);
        }

        Self { handlers }
    }

    pub fn get(&self, control: &ControlId) -> Option<Handler> {
        self.handlers.get(control).copied()
    }

    pub fn contains(&self, control: &ControlId) -> bool {
        self.handlers.contains_key(control)
    }
}

/// Screen rectangle that activates a control when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitZone {
    pub area: Rect,
    pub control: ControlId,
}

impl HitZone {
    pub fn new(area: Rect, control: ControlId) -> Self {
        Self { area, control }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        point_in_rect(self.area, col, row)
    }
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Zones are recorded in draw order, so the last match is the topmost
pub fn topmost_hit(zones: &[HitZone], col: u16, row: u16) -> Option<&ControlId> {
    zones
        .iter()
        .rev()
        .find(|z| z.contains(col, row))
        .map(|z| &z.control)
}

// ─── Handlers ───────────────────────────────────────────────────────

fn on_sidebar_toggle(app: &mut App, _: &ControlId) {
    app.toggle_sidebar();
}

fn on_overlay(app: &mut App, _: &ControlId) {
    app.toggle_sidebar();
}

fn on_theme_toggle(app: &mut App, _: &ControlId) {
    app.toggle_theme();
}

/// A menu item carrying a widget selects it and closes the sidebar;
/// a category header only expands or collapses.
fn on_menu_item(app: &mut App, control: &ControlId) {
    let ControlId::MenuItem(id) = control else {
        return;
    };
    app.launch();
    let carries_widget = app
        .catalog
        .entry(id)
        .map(|e| e.widget().is_some())
        .unwrap_or(false);
    if carries_widget {
        app.select_widget(id);
        app.close_sidebar();
    } else {
        app.select_category(id);
    }
}

fn on_widget_button(app: &mut App, control: &ControlId) {
    let ControlId::WidgetButton(id) = control else {
        return;
    };
    app.select_widget(id);
    app.close_sidebar();
}

fn on_switch(app: &mut App, control: &ControlId) {
    let ControlId::Switch(id) = control else {
        return;
    };
    app.toggle_switch(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_catalog() {
        let catalog = Catalog::default();
        let table = ControlTable::build(&catalog, true);
        assert!(table.contains(&ControlId::SidebarToggle));
        assert!(table.contains(&ControlId::Overlay));
        assert!(table.contains(&ControlId::ThemeToggle));
        assert!(table.contains(&ControlId::MenuItem("notes".into())));
        assert!(table.contains(&ControlId::MenuItem("automation".into())));
        assert!(table.contains(&ControlId::WidgetButton("bulk-processor".into())));
        assert!(table.contains(&ControlId::Switch("headless".into())));
        // top-level widgets have no separate widget button
        assert!(!table.contains(&ControlId::WidgetButton("notes".into())));
    }

    #[test]
    fn test_theme_toggle_can_be_absent() {
        let table = ControlTable::build(&Catalog::default(), false);
        assert!(!table.contains(&ControlId::ThemeToggle));
        assert!(table.get(&ControlId::ThemeToggle).is_none());
    }

    #[test]
    fn test_point_in_rect_edges() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(point_in_rect(r, 2, 3));
        assert!(point_in_rect(r, 5, 4));
        assert!(!point_in_rect(r, 6, 4));
        assert!(!point_in_rect(r, 2, 5));
        assert!(!point_in_rect(Rect::new(0, 0, 0, 0), 0, 0));
    }

    #[test]
    fn test_topmost_hit_wins() {
        let zones = vec![
            HitZone::new(Rect::new(0, 0, 80, 24), ControlId::Overlay),
            HitZone::new(Rect::new(0, 0, 30, 24), ControlId::MenuItem("notes".into())),
        ];
        assert_eq!(
            topmost_hit(&zones, 5, 5),
            Some(&ControlId::MenuItem("notes".into()))
        );
        assert_eq!(topmost_hit(&zones, 50, 5), Some(&ControlId::Overlay));
        assert_eq!(topmost_hit(&zones, 90, 5), None);
    }
}
