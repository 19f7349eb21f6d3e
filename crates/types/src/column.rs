//! Column definitions and the derived sidebar descriptor types.

use serde::{Deserialize, Serialize};

/// Broad category of a column.
///
/// The column set is externally controlled (deck files may be produced by
/// newer builds), so deserialization funnels anything unrecognized into
/// [`ColumnKind::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Notification inbox, optionally scoped to a repository
    Notifications,
    /// An activity/event stream; the subtype picks the source
    Activity,
    #[serde(other)]
    Unknown,
}

/// A single feed column the user has configured.
///
/// Columns are owned by the application store. The sidebar only ever sees a
/// read-only ordered view of them; the position in that ordering is the
/// navigation target index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Opaque identifier, unique within the active column set
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    /// Free-form refinement of `kind` (e.g. "USER_EVENTS"). Unrecognized
    /// values must resolve to the fallback descriptor, never an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// User or organization the column is scoped to, when applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Repository the column is scoped to, when applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// Symbolic icon identifiers used by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bell,
    Home,
    Person,
    Organization,
    Repo,
    Plus,
    Gear,
    SignOut,
    MarkGithub,
    Logo,
}

impl Icon {
    /// Terminal glyph for the icon. Prefer plain symbols over emoji so the
    /// sidebar renders consistently across terminals.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Bell => "◎",
            Icon::Home => "⌂",
            Icon::Person => "@",
            Icon::Organization => "⦿",
            Icon::Repo => "▣",
            Icon::Plus => "+",
            Icon::Gear => "⚙",
            Icon::SignOut => "⏏",
            Icon::MarkGithub => "ᯅ",
            Icon::Logo => "❖",
        }
    }
}

/// Identity reference used to render an avatar next to a sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRef {
    pub username: String,
    /// The sidebar item itself is the navigation target, so the avatar's
    /// own click navigation is disabled.
    pub disable_link: bool,
}

/// Display data derived from a [`Column`].
///
/// Descriptors are ephemeral: recomputed on every render, never stored, so
/// they cannot drift from the column they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub icon: Icon,
    pub avatar: Option<AvatarRef>,
}
