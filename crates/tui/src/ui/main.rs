//! Main frame layout: sidebar strip, columns view, and modal overlays.

use ratatui::prelude::*;

use super::components::{ColumnsViewComponent, Component, SidebarComponent};
use super::modals;
use crate::app::App;

/// Sidebar strip thickness: one square cell plus the surrounding border.
const SIDEBAR_WIDTH: u16 = 9;
const SIDEBAR_HEIGHT: u16 = 5;

/// Renders one frame: the sidebar strip along the leading edge, the columns
/// view in the remaining space, and any open modal on top.
pub fn draw(f: &mut Frame, app: &mut App, sidebar: &mut SidebarComponent, columns_view: &mut ColumnsViewComponent) {
    let size = f.area();

    let chunks = if app.options.horizontal {
        Layout::vertical([Constraint::Length(SIDEBAR_HEIGHT), Constraint::Min(0)]).split(size)
    } else {
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).split(size)
    };

    sidebar.render(f, chunks[0], app);
    columns_view.render(f, chunks[1], app);
    modals::draw_modal(f, app, size);
}
