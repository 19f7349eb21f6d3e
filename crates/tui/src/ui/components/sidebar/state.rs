//! Sidebar state and the pure controller computations.

use feedrail_types::{Column, FocusEvent};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// A pressable sidebar entry, derived fresh from the app snapshot.
///
/// In the full layout the strip offers add-column, one item per column,
/// settings, and logout. Compact mode collapses the utility controls down
/// to an inline settings entry. Both settings placements route through the
/// same activation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    AddColumn,
    Column(usize),
    Settings,
    Logout,
}

/// Derives the ordered pressable entries for the current snapshot.
///
/// Re-derived on every render and every event; the sidebar never caches a
/// copy of the column list.
pub fn pressable_entries(column_count: usize, small: bool) -> Vec<SidebarEntry> {
    let mut entries = Vec::with_capacity(column_count + 3);
    if !small {
        entries.push(SidebarEntry::AddColumn);
    }
    entries.extend((0..column_count).map(SidebarEntry::Column));
    entries.push(SidebarEntry::Settings);
    if !small {
        entries.push(SidebarEntry::Logout);
    }
    entries
}

/// Builds the focus event for selecting the column at `index`.
///
/// Animation is suppressed when compact mode and an open modal coincide, to
/// avoid a visual conflict; highlighting is suppressed in compact mode
/// altogether since the columns view is likely already adjacent. Returns
/// `None` when `index` is out of bounds of the current column list.
pub fn focus_event_for(columns: &[Column], index: usize, small: bool, modal_open: bool) -> Option<FocusEvent> {
    let column = columns.get(index)?;
    Some(FocusEvent {
        column_id: column.id.clone(),
        column_index: index,
        animated: !(small && modal_open),
        highlight: !small,
    })
}

/// Presentation state for the sidebar: focus flags, selection, and the
/// hit-test areas recorded on the last render.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Index of the currently selected pressable entry.
    pub selected_index: usize,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each pressable entry; kept in sync with the derived
    /// entry list length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered strip area, for mouse hit testing.
    pub last_area: Rect,
    /// Per-entry areas recorded on the last render, aligned with
    /// `item_focus_flags`.
    pub per_item_areas: Vec<Rect>,
}

impl SidebarState {
    pub fn new(entry_count: usize) -> Self {
        let mut state = Self {
            selected_index: 0,
            container_focus: FocusFlag::named("sidebar"),
            item_focus_flags: Vec::new(),
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        };
        state.sync_entry_count(entry_count);
        if let Some(first) = state.item_focus_flags.first() {
            first.set(true);
        }
        state
    }

    /// Updates the focus flag collection to match the derived entry count,
    /// clamping the selection into range when the column set shrank.
    pub fn sync_entry_count(&mut self, entry_count: usize) {
        if self.item_focus_flags.len() == entry_count {
            return;
        }
        self.item_focus_flags = (0..entry_count).map(|i| FocusFlag::named(&format!("sidebar.item.{i}"))).collect();
        if entry_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= entry_count {
            self.selected_index = entry_count - 1;
        }
    }

    /// Index of the entry that currently has keyboard focus.
    pub fn focused_entry_index(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(|flag| flag.get())
    }

    /// Whether any entry (or the container) is focused.
    pub fn is_focused(&self) -> bool {
        self.container_focus.get() || self.item_focus_flags.iter().any(|flag| flag.get())
    }

    /// Returns the flag of the next (or previous) entry, wrapping at the
    /// ends. `None` when nothing is focused yet.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let current = self.focused_entry_index()?;
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.item_focus_flags.get(next).cloned()
    }
}

impl HasFocus for SidebarState {
    /// Focus subtree: each pressable entry is a leaf under the container.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
