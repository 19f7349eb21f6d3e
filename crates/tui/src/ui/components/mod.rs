//! UI components: sidebar and columns view.

pub mod columns;
pub mod component;
pub mod sidebar;

pub use columns::{ColumnsViewComponent, ColumnsViewState};
pub use component::*;
pub use sidebar::{SidebarComponent, SidebarState};
