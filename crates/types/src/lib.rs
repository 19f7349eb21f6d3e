//! # Feedrail shared types
//!
//! Data model shared between the TUI and the CLI: column definitions, the
//! derived sidebar descriptors, the navigation focus event wire schema, the
//! deck config file, and the application `Msg`/`Effect` vocabulary.

pub mod column;
pub mod deck;
pub mod descriptor;
pub mod event;

pub use column::{AvatarRef, Column, ColumnDescriptor, ColumnKind, Icon};
pub use deck::{Deck, DeckError};
pub use descriptor::resolve;
pub use event::{FOCUS_ON_COLUMN, FocusEvent};

use serde::{Deserialize, Serialize};

/// Modal overlays the application can present.
///
/// Exactly one modal may be open at a time; opening a new one replaces the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddColumn,
    Settings,
}

impl Modal {
    /// Wire name used by the store action contract.
    pub fn name(&self) -> &'static str {
        match self {
            Modal::AddColumn => "ADD_COLUMN",
            Modal::Settings => "SETTINGS",
        }
    }
}

/// Messages that drive application state updates.
///
/// These are coarse, app-level inputs; per-component gestures (selecting a
/// sidebar item, clicking a button) are handled inside the components and
/// surface back as [`Effect`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (animations, highlight decay)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Close any currently open modal
    CloseModal,
    /// Quit the application
    Quit,
}

/// Side effects reported by components for the runtime to execute.
///
/// Components never mutate the store directly; they describe what should
/// happen and the runtime applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Replace the currently open modal (if any) with the given one
    ReplaceModal(Modal),
    /// End the session: clear the current user and leave the UI
    Logout,
}

/// Presentation inputs supplied from outside the core.
///
/// `horizontal` only affects layout orientation; `small` (compact mode)
/// additionally feeds the animated/highlight computation on column select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarOptions {
    #[serde(default)]
    pub horizontal: bool,
    #[serde(default)]
    pub small: bool,
}
