//! Navigation catalog
//!
//! The ordered list of sidebar entries. An entry is either a direct widget
//! (a menu item that carries a widget id) or a category (a menu item without
//! one) that owns sub-item widgets. Loaded from the `[[menu]]` tables of the
//! config file and validated once at start-up.

use crate::types::{CategoryId, SwitchId, WidgetId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A toggle switch shown inside a widget pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSpec {
    pub id: SwitchId,
    pub label: String,
    /// Initial state
    #[serde(default)]
    pub on: bool,
}

/// A selectable content pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub id: WidgetId,
    pub label: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub switches: Vec<SwitchSpec>,
}

impl WidgetSpec {
    /// Pane heading, falling back to the menu label
    pub fn heading(&self) -> &str {
        if self.title.is_empty() {
            &self.label
        } else {
            &self.title
        }
    }
}

/// A collapsible group of sub-item widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub id: CategoryId,
    pub label: String,
    #[serde(default)]
    pub items: Vec<WidgetSpec>,
}

/// One top-level sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    Widget(WidgetSpec),
    Category(CategorySpec),
}

impl MenuEntry {
    pub fn id(&self) -> &str {
        match self {
            MenuEntry::Widget(w) => &w.id,
            MenuEntry::Category(c) => &c.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Widget(w) => &w.label,
            MenuEntry::Category(c) => &c.label,
        }
    }

    /// The widget this menu item activates, if it carries one
    pub fn widget(&self) -> Option<&WidgetSpec> {
        match self {
            MenuEntry::Widget(w) => Some(w),
            MenuEntry::Category(_) => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("menu entry #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("widget id `{0}` is used more than once")]
    DuplicateWidget(WidgetId),
    #[error("category id `{0}` is used more than once")]
    DuplicateCategory(CategoryId),
    #[error("switch id `{0}` is used more than once")]
    DuplicateSwitch(SwitchId),
    #[error("category `{0}` has no items")]
    EmptyCategory(CategoryId),
    #[error("the menu has no entries")]
    EmptyMenu,
}

/// Validated navigation model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn category(&self, id: &str) -> Option<&CategorySpec> {
        self.categories().find(|c| c.id == id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategorySpec> {
        self.entries.iter().filter_map(|e| match e {
            MenuEntry::Category(c) => Some(c),
            MenuEntry::Widget(_) => None,
        })
    }

    /// Every widget, direct ones and sub-items, in menu order
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetSpec> {
        self.entries.iter().flat_map(|e| match e {
            MenuEntry::Widget(w) => std::slice::from_ref(w).iter(),
            MenuEntry::Category(c) => c.items.iter(),
        })
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetSpec> {
        self.widgets().find(|w| w.id == id)
    }

    /// Category owning a sub-item widget. `None` for direct widgets.
    pub fn owner_of(&self, widget_id: &str) -> Option<&CategoryId> {
        self.categories()
            .find(|c| c.items.iter().any(|w| w.id == widget_id))
            .map(|c| &c.id)
    }

    pub fn switches(&self) -> impl Iterator<Item = &SwitchSpec> {
        self.widgets().flat_map(|w| w.switches.iter())
    }
}

fn validate(entries: &[MenuEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::EmptyMenu);
    }

    let mut seen = SeenIds::default();
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            MenuEntry::Widget(w) => seen.widget(w, index)?,
            MenuEntry::Category(c) => {
                if c.id.trim().is_empty() {
                    return Err(CatalogError::EmptyId { index });
                }
                if !seen.categories.insert(&c.id) {
                    return Err(CatalogError::DuplicateCategory(c.id.clone()));
                }
                if c.items.is_empty() {
                    return Err(CatalogError::EmptyCategory(c.id.clone()));
                }
                for item in &c.items {
                    seen.widget(item, index)?;
                }
            }
        }
    }
    // categories and direct widgets share the menu item id space
    if let Some(clash) = seen.categories.iter().find(|id| seen.widgets.contains(*id)) {
        return Err(CatalogError::DuplicateCategory(clash.to_string()));
    }
    Ok(())
}

#[derive(Default)]
struct SeenIds<'a> {
    widgets: HashSet<&'a str>,
    categories: HashSet<&'a str>,
    switches: HashSet<&'a str>,
}

impl<'a> SeenIds<'a> {
    fn widget(&mut self, w: &'a WidgetSpec, index: usize) -> Result<(), CatalogError> {
        if w.id.trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !self.widgets.insert(&w.id) {
            return Err(CatalogError::DuplicateWidget(w.id.clone()));
        }
        for s in &w.switches {
            if s.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !self.switches.insert(&s.id) {
                return Err(CatalogError::DuplicateSwitch(s.id.clone()));
            }
        }
        Ok(())
    }
}

// ─── Default Menu ───────────────────────────────────────────────────

fn widget(id: &str, label: &str, title: &str, body: &[&str]) -> WidgetSpec {
    WidgetSpec {
        id: id.to_string(),
        label: label.to_string(),
        title: title.to_string(),
        body: body.iter().map(|l| l.to_string()).collect(),
        switches: Vec::new(),
    }
}

fn switch(id: &str, label: &str, on: bool) -> SwitchSpec {
    SwitchSpec {
        id: id.to_string(),
        label: label.to_string(),
        on,
    }
}

/// The Command Deck menu shipped with the binary
pub fn default_menu() -> Vec<MenuEntry> {
    let mut settings = widget(
        "settings",
        "Settings",
        "Deck Settings",
        &["Session-only preferences. Nothing here is written to disk."],
    );
    settings.switches = vec![
        switch("headless", "Headless browser mode", false),
        switch("auto-sort", "Auto-sort finished downloads", true),
        switch("resume-session", "Offer to resume saved sessions", true),
    ];

    vec![
        MenuEntry::Widget(widget(
            "dashboard",
            "Dashboard",
            "Command Deck",
            &[
                "All systems nominal.",
                "Open a module from the sidebar to get started.",
            ],
        )),
        MenuEntry::Widget(widget(
            "notes",
            "Notes",
            "Operator Notes",
            &["A scratchpad for the current session."],
        )),
        MenuEntry::Category(CategorySpec {
            id: "automation".to_string(),
            label: "Automation".to_string(),
            items: vec![
                widget(
                    "bulk-processor",
                    "Bulk Processor",
                    "",
                    &[
                        "1. Select saved HTML pages.",
                        "2. Run the final analysis to extract unique links.",
                        "3. Queue every link for download.",
                    ],
                ),
                widget(
                    "direct-download",
                    "Direct Download",
                    "",
                    &["Paste a share link to fetch it straight away."],
                ),
            ],
        }),
        MenuEntry::Category(CategorySpec {
            id: "insights".to_string(),
            label: "Insights".to_string(),
            items: vec![
                widget(
                    "link-analyzer",
                    "Link Analyzer",
                    "",
                    &["Counts total, unique and duplicate links per file."],
                ),
                widget(
                    "session-manager",
                    "Session Manager",
                    "",
                    &["Pause, resume or discard the last saved job list."],
                ),
            ],
        }),
        MenuEntry::Widget(settings),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: default_menu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_valid() {
        let catalog = Catalog::new(default_menu()).unwrap();
        assert_eq!(catalog, Catalog::default());
        assert!(catalog.widget("notes").is_some());
        assert_eq!(catalog.categories().count(), 2);
        assert_eq!(catalog.switches().count(), 3);
    }

    #[test]
    fn test_owner_of() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.owner_of("bulk-processor").map(String::as_str),
            Some("automation")
        );
        assert_eq!(catalog.owner_of("notes"), None);
        assert_eq!(catalog.owner_of("missing"), None);
    }

    #[test]
    fn test_entry_widget_attribute() {
        let catalog = Catalog::default();
        assert!(catalog.entry("notes").unwrap().widget().is_some());
        assert!(catalog.entry("automation").unwrap().widget().is_none());
        assert!(catalog.entry("bulk-processor").is_none());
    }

    #[test]
    fn test_duplicate_widget_rejected() {
        let mut menu = default_menu();
        menu.push(MenuEntry::Widget(widget("bulk-processor", "Again", "", &[])));
        assert_eq!(
            Catalog::new(menu),
            Err(CatalogError::DuplicateWidget("bulk-processor".into()))
        );
    }

    #[test]
    fn test_duplicate_switch_rejected() {
        let mut w = widget("extra", "Extra", "", &[]);
        w.switches.push(switch("headless", "Dup", true));
        let mut menu = default_menu();
        menu.push(MenuEntry::Widget(w));
        assert_eq!(
            Catalog::new(menu),
            Err(CatalogError::DuplicateSwitch("headless".into()))
        );
    }

    #[test]
    fn test_empty_category_and_menu_rejected() {
        let menu = vec![MenuEntry::Category(CategorySpec {
            id: "tools".into(),
            label: "Tools".into(),
            items: Vec::new(),
        })];
        assert_eq!(
            Catalog::new(menu),
            Err(CatalogError::EmptyCategory("tools".into()))
        );
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::EmptyMenu));
    }

    #[test]
    fn test_category_id_clashing_with_widget_rejected() {
        let mut menu = default_menu();
        menu.push(MenuEntry::Category(CategorySpec {
            id: "notes".into(),
            label: "More notes".into(),
            items: vec![widget("scratch", "Scratch", "", &[])],
        }));
        assert_eq!(
            Catalog::new(menu),
            Err(CatalogError::DuplicateCategory("notes".into()))
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let menu = vec![MenuEntry::Widget(widget(" ", "Blank", "", &[]))];
        assert_eq!(Catalog::new(menu), Err(CatalogError::EmptyId { index: 0 }));
    }

    #[test]
    fn test_menu_parses_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            menu: Vec<MenuEntry>,
        }
        let doc: Doc = toml::from_str(
            r#"
            [[menu]]
            kind = "widget"
            id = "notes"
            label = "Notes"

            [[menu]]
            kind = "category"
            id = "tools"
            label = "Tools"

            [[menu.items]]
            id = "clock"
            label = "Clock"
            switches = [{ id = "24h", label = "24 hour", on = true }]
            "#,
        )
        .unwrap();
        let catalog = Catalog::new(doc.menu).unwrap();
        assert_eq!(catalog.widget("clock").unwrap().heading(), "Clock");
        assert_eq!(catalog.owner_of("clock").map(String::as_str), Some("tools"));
        assert!(catalog.switches().any(|s| s.id == "24h" && s.on));
    }
}
