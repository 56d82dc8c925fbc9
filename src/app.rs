//! Application state and event handling for vortexflow

use crate::catalog::{Catalog, MenuEntry};
use crate::config::Config;
use crate::controls::{topmost_hit, ControlId, ControlTable, HitZone};
use crate::modules::attract::AttractSequence;
use crate::modules::backdrop::Backdrop;
use crate::modules::launch::{self, LaunchGate};
use crate::modules::navigation::NavigationController;
use crate::modules::theme::ThemeController;
use crate::scheduler::Scheduler;
use crate::types::{FlashMessage, ThemeMode};
use crate::view::{ViewModel, ViewSurface};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

const FLASH_SECS: u64 = 3;

/// One selectable line of the open sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub control: ControlId,
    pub label: String,
    /// 0 for top-level entries, 1 for sub-items
    pub depth: u8,
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub catalog: Catalog,
    pub view: ViewModel,
    pub flash_message: Option<FlashMessage>,

    // Controllers
    pub theme: ThemeController,
    pub attract: AttractSequence,
    pub gate: LaunchGate,
    pub nav: NavigationController,
    pub backdrop: Backdrop,
    pub scheduler: Scheduler,
    pub controls: ControlTable,

    /// Row under the keyboard cursor while the sidebar is open
    pub sidebar_cursor: usize,
    /// Set by render functions each frame
    pub hit_zones: Vec<HitZone>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let catalog = config.catalog().context("Invalid [[menu]] in config")?;
        let with_toggle = config.shell.theme_toggle;

        Ok(Self {
            should_quit: false,
            view: ViewModel::new(&catalog, with_toggle),
            controls: ControlTable::build(&catalog, with_toggle),
            theme: ThemeController::new(),
            attract: AttractSequence::from_config(&config.attract),
            gate: LaunchGate::new(),
            nav: NavigationController::new(),
            backdrop: Backdrop::from_config(&config.backdrop),
            scheduler: Scheduler::new(),
            flash_message: None,
            sidebar_cursor: 0,
            hit_zones: Vec::new(),
            catalog,
            config,
        })
    }

    /// Initial transitions: dark theme, backdrop, intro screen, attract cycle
    pub fn boot(&mut self, now: Instant) {
        self.theme.apply_theme(ThemeMode::Dark, &mut self.view);
        self.backdrop.start(now);
        launch::show_intro(&mut self.view);
        self.attract.start(&mut self.scheduler, &mut self.view, now);
    }

    /// Run due timer tasks and expire the flash message
    pub fn tick(&mut self, now: Instant) {
        for handle in self.scheduler.due(now) {
            if self.attract.owns(handle) {
                self.attract.advance(&mut self.view);
            }
        }
        if self
            .flash_message
            .as_ref()
            .map_or(false, |m| m.is_expired(FLASH_SECS))
        {
            self.flash_message = None;
        }
    }

    // ─── Transitions ────────────────────────────────────────────────

    pub fn launch(&mut self) -> bool {
        self.gate
            .launch(&mut self.view, &mut self.attract, &mut self.scheduler)
    }

    pub fn toggle_sidebar(&mut self) {
        let opened = launch_then_toggle(
            &mut self.gate,
            &mut self.attract,
            &mut self.scheduler,
            &mut self.nav,
            &mut self.view,
        );
        if opened {
            self.sidebar_cursor = self.active_row().unwrap_or(0);
        }
    }

    pub fn close_sidebar(&mut self) {
        self.nav.close_sidebar(&mut self.view);
    }

    pub fn select_category(&mut self, id: &str) {
        if self.catalog.category(id).is_none() {
            tracing::trace!(category = id, "unknown category");
            return;
        }
        self.nav.select_category(id, &mut self.view);
    }

    pub fn select_widget(&mut self, id: &str) {
        if self.catalog.widget(id).is_none() {
            tracing::trace!(widget = id, "unknown widget");
            return;
        }
        self.launch();
        let owner = self.catalog.owner_of(id).map(|c| c.as_str());
        let all = self.catalog.widgets().map(|w| w.id.as_str());
        self.nav.activate_widget(id, owner, all, &mut self.view);
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggle(&mut self.view);
        self.flash(format!("Theme: {}", theme), false);
    }

    pub fn toggle_switch(&mut self, id: &str) {
        let Some(on) = self.view.toggle_switch(id) else {
            return;
        };
        let label = self
            .catalog
            .switches()
            .find(|s| s.id == id)
            .map_or(id, |s| s.label.as_str());
        let text = format!("{}: {}", label, if on { "on" } else { "off" });
        tracing::debug!(switch = id, on, "switch toggled");
        self.flash(text, false);
    }

    /// Run the handler registered for `control`. Returns false when the
    /// control does not exist in this view.
    pub fn dispatch(&mut self, control: &ControlId) -> bool {
        let Some(handler) = self.controls.get(control) else {
            tracing::trace!(?control, "control absent, ignoring");
            return false;
        };
        handler(self, control);
        true
    }

    pub fn flash(&mut self, text: String, is_error: bool) {
        self.flash_message = Some(FlashMessage::new(text, is_error));
    }

    // ─── Sidebar rows ───────────────────────────────────────────────

    /// Rows of the open sidebar in display order, theme toggle last
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for entry in self.catalog.entries() {
            rows.push(SidebarRow {
                control: ControlId::MenuItem(entry.id().to_string()),
                label: entry.label().to_string(),
                depth: 0,
            });
            if let MenuEntry::Category(category) = entry {
                if self.nav.is_expanded(&category.id) {
                    rows.extend(category.items.iter().map(|item| SidebarRow {
                        control: ControlId::WidgetButton(item.id.clone()),
                        label: item.label.clone(),
                        depth: 1,
                    }));
                }
            }
        }
        if self.controls.contains(&ControlId::ThemeToggle) {
            rows.push(SidebarRow {
                control: ControlId::ThemeToggle,
                label: "Theme".to_string(),
                depth: 0,
            });
        }
        rows
    }

    fn active_row(&self) -> Option<usize> {
        let active = self.nav.active_widget()?;
        self.sidebar_rows().iter().position(|row| match &row.control {
            ControlId::MenuItem(id) | ControlId::WidgetButton(id) => id == active,
            _ => false,
        })
    }

    // ─── Input ──────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.nav.is_sidebar_open() {
            self.handle_sidebar_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char('m') => {
                self.dispatch(&ControlId::SidebarToggle);
            }
            KeyCode::Enter if !self.gate.is_launched() => {
                self.dispatch(&ControlId::SidebarToggle);
            }
            KeyCode::Char('t') => self.theme_key(),
            KeyCode::Char(c @ '1'..='9') if self.gate.is_launched() => {
                let index = (c as u8 - b'1') as usize;
                if let Some(id) = self.active_switch(index) {
                    self.dispatch(&ControlId::Switch(id));
                }
            }
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let row_count = self.sidebar_rows().len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                self.dispatch(&ControlId::Overlay);
            }
            KeyCode::Tab | KeyCode::Char('m') => {
                self.dispatch(&ControlId::SidebarToggle);
            }
            KeyCode::Char('t') => self.theme_key(),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.sidebar_cursor + 1 < row_count {
                    self.sidebar_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = self.sidebar_rows().get(self.sidebar_cursor) {
                    let control = row.control.clone();
                    self.dispatch(&control);
                    // collapsing a category can leave the cursor past the end
                    let rows = self.sidebar_rows().len();
                    self.sidebar_cursor = self.sidebar_cursor.min(rows.saturating_sub(1));
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(control) = topmost_hit(&self.hit_zones, mouse.column, mouse.row).cloned()
                else {
                    return;
                };
                if let Some(pos) = self.sidebar_rows().iter().position(|r| r.control == control) {
                    self.sidebar_cursor = pos;
                }
                self.dispatch(&control);
            }
            MouseEventKind::ScrollDown if self.nav.is_sidebar_open() => {
                let rows = self.sidebar_rows().len();
                if self.sidebar_cursor + 1 < rows {
                    self.sidebar_cursor += 1;
                }
            }
            MouseEventKind::ScrollUp if self.nav.is_sidebar_open() => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn theme_key(&mut self) {
        if !self.dispatch(&ControlId::ThemeToggle) {
            self.flash("Theme toggle is disabled".to_string(), true);
        }
    }

    /// Id of the `index`-th switch of the active widget
    fn active_switch(&self, index: usize) -> Option<String> {
        let widget = self.catalog.widget(self.nav.active_widget()?)?;
        widget.switches.get(index).map(|s| s.id.clone())
    }
}

/// Sidebar toggle transition. The launch writes (intro hidden, main shown)
/// always land before the sidebar and overlay writes. Returns the new open
/// state.
fn launch_then_toggle(
    gate: &mut LaunchGate,
    attract: &mut AttractSequence,
    scheduler: &mut Scheduler,
    nav: &mut NavigationController,
    view: &mut dyn ViewSurface,
) -> bool {
    gate.launch(view, attract, scheduler);
    nav.toggle_sidebar(view)
}
