//! Navigation sidebar component.
//!
//! Renders a fixed strip of selectable column icons plus the utility
//! controls (add column, settings, logout) and translates user gestures
//! into navigation channel publishes and store effects. The sidebar holds
//! no copy of the column list: entries are re-derived from the application
//! snapshot on every render and every event, so the strip is always
//! index-aligned with the columns view.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{SidebarEntry, SidebarState, focus_event_for, pressable_entries};
