//! Render pass for vortexflow
//!
//! Draws whatever the view model says is visible, bottom to top: backdrop,
//! intro or main view, dimming overlay, sidebar. Every clickable control
//! drawn this frame is recorded in `app.hit_zones` in the same order.

use crate::app::{App, SidebarRow};
use crate::controls::{ControlId, HitZone};
use crate::types::Region;
use crate::ui::widgets::{centered_rect, render_flash_message, render_status_bar, switch_line};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const SIDEBAR_WIDTH: u16 = 30;
const TITLE: &str = "V O R T E X F L O W";
/// Widget whose pane also shows the local clock
const CLOCK_WIDGET: &str = "dashboard";

/// Main render function – entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = Theme::from_mode(app.view.theme_attribute.unwrap_or_default());
    let mut zones = Vec::new();

    // Fill entire background
    frame.render_widget(Block::default().style(theme.block_style()), area);
    render_backdrop(frame, app, &theme, area);

    if app.view.is_visible(Region::Intro) {
        render_intro(frame, app, &theme, area, &mut zones);
    }
    if app.view.is_visible(Region::Main) {
        render_main(frame, app, &theme, area, &mut zones);
    }
    if app.view.is_visible(Region::Overlay) {
        frame.buffer_mut().set_style(area, theme.overlay_style());
        // the open sidebar covers the left edge of the overlay
        let covered = if app.view.is_visible(Region::Sidebar) {
            SIDEBAR_WIDTH.min(area.width)
        } else {
            0
        };
        let exposed = Rect {
            x: area.x + covered,
            width: area.width - covered,
            ..area
        };
        zones.push(HitZone::new(exposed, ControlId::Overlay));
    }
    if app.view.is_visible(Region::Sidebar) {
        render_sidebar(frame, app, &theme, area, &mut zones);
    }

    app.hit_zones = zones;
}

fn render_backdrop(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let style = Style::default().fg(theme.particle);
    let cells = app.backdrop.frame(Instant::now(), area.width, area.height);
    let buf = frame.buffer_mut();
    for (x, y, glyph) in cells {
        buf.set_string(area.x + x, area.y + y, glyph, style);
    }
}

// ─── Intro ──────────────────────────────────────────────────────────

fn render_intro(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, zones: &mut Vec<HitZone>) {
    let body = centered_rect(area.width.saturating_sub(4), 7, area);

    let lines = vec![
        Line::styled(TITLE, theme.title()),
        Line::raw(""),
        Line::styled(app.view.cycling_text.as_str(), theme.text()),
        Line::raw(""),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter]", theme.button()),
            Span::styled(" Open the Command Deck", theme.text_dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

    let button_row = Rect {
        y: body.y + 5,
        height: 1,
        ..body
    };
    if button_row.y < area.bottom() {
        zones.push(HitZone::new(button_row, ControlId::SidebarToggle));
    }

    render_bottom_line(frame, app, theme, area, "[Enter] Open  [t] Theme  [q] Quit");
}

// ─── Main view ──────────────────────────────────────────────────────

fn render_main(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, zones: &mut Vec<HitZone>) {
    let vertical = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(3),    // content
        Constraint::Length(1), // status bar
    ])
    .split(area);

    render_header(frame, app, theme, vertical[0], zones);
    render_content(frame, app, theme, vertical[1], zones);

    let hints = if app.nav.is_sidebar_open() {
        "[j/k] Move  [Enter] Select  [Esc] Close  [t] Theme"
    } else {
        "[Tab] Sidebar  [1-9] Switches  [t] Theme  [q] Quit"
    };
    render_bottom_line(frame, app, theme, vertical[2], hints);
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, zones: &mut Vec<HitZone>) {
    frame.render_widget(Block::default().style(theme.panel_style()), area);

    let toggle = " ☰ Deck ";
    let toggle_area = Rect {
        width: (toggle.chars().count() as u16).min(area.width),
        ..area
    };
    frame.render_widget(Paragraph::new(Span::styled(toggle, theme.button())), toggle_area);
    zones.push(HitZone::new(toggle_area, ControlId::SidebarToggle));

    let heading = app
        .nav
        .active_widget()
        .and_then(|id| app.catalog.widget(id))
        .map_or("Command Deck", |w| w.label.as_str());
    let title = Line::from(vec![
        Span::styled(" VortexFlow", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" · {}", heading), Style::default().fg(theme.fg)),
    ]);
    let title_area = Rect {
        x: toggle_area.right(),
        width: area.width.saturating_sub(toggle_area.width),
        ..area
    };
    frame.render_widget(Paragraph::new(title).style(theme.panel_style()), title_area);
}

fn render_content(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, zones: &mut Vec<HitZone>) {
    let Some(widget) = app.nav.active_widget().and_then(|id| app.catalog.widget(id)) else {
        let hint = centered_rect(area.width, 3, area);
        let lines = vec![
            Line::styled("Command Deck ready", theme.title()),
            Line::raw(""),
            Line::styled("Open the sidebar with [Tab] and pick a module.", theme.text_dim()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), hint);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", widget.heading()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if widget.id == CLOCK_WIDGET {
        let now = chrono::Local::now();
        lines.push(Line::from(vec![
            Span::styled(" ◷ ", Style::default().fg(theme.accent)),
            Span::styled(now.format("%A, %d %B %Y  %H:%M:%S").to_string(), theme.text()),
        ]));
        lines.push(Line::raw(""));
    }
    for text in &widget.body {
        lines.push(Line::styled(format!(" {}", text), theme.text()));
    }

    let body_height = (lines.len() as u16).min(inner.height);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        Rect {
            height: body_height,
            ..inner
        },
    );

    if widget.switches.is_empty() {
        return;
    }
    let mut y = inner.y + body_height + 1;
    for (i, switch) in widget.switches.iter().enumerate() {
        if y >= inner.bottom() {
            break;
        }
        let row = Rect {
            y,
            height: 1,
            ..inner
        };
        let line = switch_line(i, &switch.label, app.view.switch_on(&switch.id), theme);
        frame.render_widget(Paragraph::new(line), row);
        zones.push(HitZone::new(row, ControlId::Switch(switch.id.clone())));
        y += 1;
    }
}

fn render_bottom_line(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, hints: &str) {
    match &app.flash_message {
        Some(msg) => render_flash_message(frame, &msg.text, msg.is_error, theme, area),
        None => {
            let version = format!("vortexflow v{}", env!("CARGO_PKG_VERSION"));
            render_status_bar(frame, hints, &version, theme, area);
        }
    }
}

// ─── Sidebar ────────────────────────────────────────────────────────

fn render_sidebar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, zones: &mut Vec<HitZone>) {
    let sidebar = Rect {
        width: SIDEBAR_WIDTH.min(area.width),
        ..area
    };
    frame.render_widget(Clear, sidebar);

    let block = Block::default()
        .style(theme.panel_style())
        .title(" Command Deck ")
        .title_style(theme.title())
        .borders(Borders::RIGHT)
        .border_style(theme.border());
    let inner = block.inner(sidebar);
    frame.render_widget(block, sidebar);

    let rows = app.sidebar_rows();
    let footer_y = inner.bottom().saturating_sub(1);
    let mut y = inner.y + 1;

    for (i, row) in rows.iter().enumerate() {
        if row.control == ControlId::ThemeToggle {
            render_theme_toggle(frame, app, theme, inner, footer_y, i, zones);
            continue;
        }
        if y >= footer_y {
            continue;
        }
        let rect = Rect {
            y,
            height: 1,
            ..inner
        };
        let line = sidebar_line(app, theme, row, i == app.sidebar_cursor);
        frame.render_widget(Paragraph::new(line), rect);
        zones.push(HitZone::new(rect, row.control.clone()));
        y += 1;
    }
}

fn sidebar_line<'a>(app: &App, theme: &Theme, row: &'a SidebarRow, under_cursor: bool) -> Line<'a> {
    let (marker, highlighted) = match &row.control {
        ControlId::MenuItem(id) if app.catalog.category(id).is_some() => {
            let marks = app.view.category(id);
            (if marks.expanded { " ▾ " } else { " ▸ " }, marks.active)
        }
        ControlId::MenuItem(id) => (" • ", app.view.is_widget_active(id)),
        ControlId::WidgetButton(id) => ("    · ", app.view.is_widget_active(id)),
        _ => ("   ", false),
    };

    let style = if under_cursor {
        theme.selected()
    } else if highlighted {
        theme.active()
    } else {
        Style::default().fg(theme.fg)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(row.label.as_str(), style),
    ])
}

fn render_theme_toggle(
    frame: &mut Frame,
    app: &App,
    theme: &Theme,
    inner: Rect,
    y: u16,
    index: usize,
    zones: &mut Vec<HitZone>,
) {
    let Some(icon) = app.view.theme_icon else {
        return;
    };
    if y < inner.y || inner.height == 0 {
        return;
    }
    let rect = Rect {
        y,
        height: 1,
        ..inner
    };
    let mode = app.view.theme_attribute.unwrap_or_default();
    let style = if index == app.sidebar_cursor {
        theme.selected()
    } else {
        theme.text_dim()
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(theme.accent)),
        Span::styled(format!("Theme: {}", mode), style),
    ]);
    frame.render_widget(Paragraph::new(line), rect);
    zones.push(HitZone::new(rect, ControlId::ThemeToggle));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let mut config = Config::default();
        config.backdrop.enabled = false;
        let mut app = App::new(config).unwrap();
        app.boot(Instant::now());
        app
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            text.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                text.push('\n');
            }
        }
        text
    }

    fn click_on(app: &mut App, control: &ControlId) {
        let zone = app
            .hit_zones
            .iter()
            .find(|z| &z.control == control)
            .cloned()
            .unwrap();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: zone.area.x,
            row: zone.area.y,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_intro_screen() {
        let mut app = app();
        let screen = draw(&mut app);
        assert!(screen.contains("Intelligently automating your digital workflow."));
        assert!(screen.contains(TITLE));
        assert!(app
            .hit_zones
            .iter()
            .any(|z| z.control == ControlId::SidebarToggle));
    }

    #[test]
    fn test_sidebar_screen_and_zones() {
        let mut app = app();
        app.toggle_sidebar();
        let screen = draw(&mut app);
        assert!(screen.contains("Dashboard"));
        assert!(screen.contains("▸ Automation"));
        assert!(screen.contains("Theme: dark"));
        assert!(!screen.contains("Intelligently"));

        let overlay = app
            .hit_zones
            .iter()
            .position(|z| z.control == ControlId::Overlay)
            .unwrap();
        let notes = app
            .hit_zones
            .iter()
            .position(|z| z.control == ControlId::MenuItem("notes".into()))
            .unwrap();
        assert!(notes > overlay);
    }

    #[test]
    fn test_clicks_through_recorded_zones() {
        let mut app = app();
        app.toggle_sidebar();
        draw(&mut app);

        click_on(&mut app, &ControlId::MenuItem("automation".into()));
        assert!(app.nav.is_expanded("automation"));
        let screen = draw(&mut app);
        assert!(screen.contains("Bulk Processor"));

        click_on(&mut app, &ControlId::WidgetButton("bulk-processor".into()));
        assert_eq!(app.nav.active_widget(), Some("bulk-processor"));
        assert!(!app.nav.is_sidebar_open());

        let screen = draw(&mut app);
        assert!(screen.contains("Select saved HTML pages."));
    }

    #[test]
    fn test_switch_rows_are_clickable() {
        let mut app = app();
        app.dispatch(&ControlId::MenuItem("settings".into()));
        let screen = draw(&mut app);
        assert!(screen.contains("Deck Settings"));
        assert!(screen.contains("Headless browser mode"));

        click_on(&mut app, &ControlId::Switch("headless".into()));
        assert!(app.view.switch_on("headless"));
    }

    #[test]
    fn test_theme_toggle_hidden_when_absent() {
        let mut config = Config::default();
        config.backdrop.enabled = false;
        config.shell.theme_toggle = false;
        let mut app = App::new(config).unwrap();
        app.boot(Instant::now());
        app.toggle_sidebar();
        let screen = draw(&mut app);
        assert!(!screen.contains("Theme: dark"));
        assert!(app
            .hit_zones
            .iter()
            .all(|z| z.control != ControlId::ThemeToggle));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.toggle_sidebar();
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();
        app.dispatch(&ControlId::MenuItem("dashboard".into()));
        terminal.draw(|f| render(f, &mut app)).unwrap();
    }
}
