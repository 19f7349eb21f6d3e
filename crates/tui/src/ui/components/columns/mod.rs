//! Columns view: the scrollable panes the sidebar navigates.
//!
//! The view subscribes to the navigation channel and reacts to focus events
//! by scrolling the target column into view and, when asked, flashing its
//! border. It never talks to the sidebar directly.

mod columns_component;
mod state;

pub use columns_component::ColumnsViewComponent;
pub use state::ColumnsViewState;
