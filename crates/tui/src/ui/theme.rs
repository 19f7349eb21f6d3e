//! Theme and styling for the Feedrail TUI.
//!
//! A single dark palette with a warm accent. Prefer these helpers over
//! hard-coding colors so the sidebar and the columns view stay consistent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Accent color for focus indicators and selection.
pub const ACCENT: Color = Color::Rgb(97, 175, 239);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(220, 223, 228);

/// Muted foreground for secondary text (labels, the logo cell).
pub const FG_MUTED: Color = Color::Rgb(140, 146, 160);

/// Default border color for unfocused elements.
pub const BORDER: Color = Color::Rgb(70, 74, 86);

/// Color used for the highlight flash on a focused column pane.
pub const FLASH: Color = Color::Rgb(229, 192, 123);

/// Subtle background for the selected sidebar entry.
pub const BG_SELECT: Color = Color::Rgb(26, 34, 46);

/// Border style based on focus state.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Style for titles and headers.
pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

/// Style for normal text content.
pub fn text_style() -> Style {
    Style::default().fg(FG)
}

/// Style for muted or secondary text.
pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Style for the highlight flash frames.
pub fn flash_style() -> Style {
    Style::default().fg(FLASH).add_modifier(Modifier::BOLD)
}

/// Renders one square icon button of the sidebar strip.
///
/// Focused buttons get a bordered accent frame; the selected button keeps a
/// subtle background fill so the current position stays visible while focus
/// travels elsewhere.
pub fn render_icon_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, is_selected: bool) {
    let borders = if is_focused { Borders::ALL } else { Borders::NONE };
    let mut style = Style::default().fg(if is_selected { ACCENT } else { FG });
    if is_selected {
        style = style.bg(BG_SELECT).add_modifier(Modifier::BOLD);
    }
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::default().borders(borders).border_style(border_style(is_focused)))
            .style(style),
        area,
    );
}
