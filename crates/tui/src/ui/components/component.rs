//! Component system for the Feedrail TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the application through a consistent
//! interface. They never mutate the store directly: event handlers report
//! [`Effect`]s back to the runtime, which applies them.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;
use feedrail_types::Effect;

/// A UI element with its own event handling and rendering.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events targeting this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording hit-test areas; state changes belong in event handlers.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);
}

/// Locates the pressable item under a mouse position.
///
/// Returns the index into `areas` whose rect contains `(x, y)`, provided the
/// position also falls inside the component's last rendered `container`.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = ratatui::layout::Position { x, y };
    if !container.contains(position) {
        return None;
    }
    areas.iter().position(|area| area.contains(position))
}
