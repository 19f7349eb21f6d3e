//! Modal overlays for the add-column and settings actions.
//!
//! Presentation only: the store decides which modal is open; this module
//! draws it centered over the main layout. Esc routing lives in the
//! runtime.

use ratatui::{prelude::*, widgets::*};

use super::utils::centered_rect;
use crate::app::App;
use crate::ui::theme;
use feedrail_types::Modal;

/// Renders the currently open modal, if any.
pub fn draw_modal(f: &mut Frame, app: &App, area: Rect) {
    let Some(modal) = app.current_modal else {
        return;
    };
    let area = centered_rect(60, 50, area);
    let title = match modal {
        Modal::AddColumn => "Add Column  [Esc] Close",
        Modal::Settings => "Settings  [Esc] Close",
    };
    let block = Block::default()
        .title(Span::styled(title, theme::title_style().fg(theme::ACCENT)))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true));

    let text = match modal {
        Modal::AddColumn => format!(
            "Add a column to your deck.\n\nEdit the deck file and restart, or wire a column\nprovider here. {} columns configured.",
            app.columns.len()
        ),
        Modal::Settings => format!("Settings for @{}.\n\nDeck path, theme, and layout options.", app.username),
    };

    f.render_widget(Clear, area);
    f.render_widget(block.clone(), area);
    f.render_widget(
        Paragraph::new(text).style(theme::text_style()).wrap(Wrap { trim: false }),
        block.inner(area),
    );
}
