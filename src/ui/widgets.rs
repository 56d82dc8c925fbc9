//! Reusable UI widgets for vortexflow
//!
//! - Status bar
//! - Flash messages
//! - Toggle switch line
//! - Layout helpers

use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Render a flash message on the last line of `area`
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .style(theme.block_style());
    frame.render_widget(flash, flash_area);
}

/// Render status bar on the last line of `area`
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: status_area.height,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// One toggle switch line: `[n] ━● label  on` or `[n] ○━ label  off`
pub fn switch_line<'a>(index: usize, label: &'a str, on: bool, theme: &Theme) -> Line<'a> {
    let (knob, knob_style) = if on {
        ("━●", Style::default().fg(theme.accent))
    } else {
        ("○━", Style::default().fg(theme.fg_dim))
    };
    Line::from(vec![
        Span::styled(format!(" [{}] ", index + 1), theme.text_dim()),
        Span::styled(knob, knob_style),
        Span::styled(format!(" {}", label), theme.text()),
        Span::styled(if on { "  on" } else { "  off" }, theme.text_dim()),
    ])
}

/// Helper: Create a centered rect of given size, clamped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}
