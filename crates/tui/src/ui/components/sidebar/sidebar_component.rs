use super::{SidebarEntry, focus_event_for, pressable_entries};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use feedrail_types::{Effect, Icon, Modal, resolve};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Height/width of one square sidebar cell, in terminal rows/columns.
const CELL_HEIGHT: u16 = 3;
const CELL_WIDTH: u16 = 7;

/// One rendered strip cell. Only `Entry` cells are pressable; the header
/// avatar and the logo are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Header,
    Entry(SidebarEntry),
    Logo,
}

/// The navigation sidebar.
///
/// Stateless with respect to the column list: both the rendered cells and
/// the pressable entry set are re-derived from the app snapshot on every
/// call. Presentation state (focus flags, hit-test areas) lives in
/// [`crate::ui::components::SidebarState`].
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    /// Derives the full cell list for the current snapshot, including the
    /// non-pressable header and logo cells.
    fn cells(app: &App) -> Vec<Cell> {
        let mut cells = Vec::new();
        if !app.options.horizontal {
            cells.push(Cell::Header);
        }
        cells.extend(
            pressable_entries(app.columns.len(), app.options.small)
                .into_iter()
                .map(Cell::Entry),
        );
        if !app.options.small {
            cells.push(Cell::Logo);
        }
        cells
    }

    /// Executes the effect of pressing `entry`.
    ///
    /// Selecting a column publishes exactly one focus event on the
    /// navigation channel and nothing else; the utility entries report
    /// store effects and publish nothing.
    pub(crate) fn activate(app: &mut App, entry: SidebarEntry) -> Vec<Effect> {
        match entry {
            SidebarEntry::Column(index) => {
                let modal_open = app.current_modal.is_some();
                if let Some(event) = focus_event_for(&app.columns, index, app.options.small, modal_open) {
                    app.nav.publish(&event);
                }
                Vec::new()
            }
            SidebarEntry::AddColumn => vec![Effect::ReplaceModal(Modal::AddColumn)],
            SidebarEntry::Settings => vec![Effect::ReplaceModal(Modal::Settings)],
            SidebarEntry::Logout => vec![Effect::Logout],
        }
    }

    fn activate_index(app: &mut App, index: usize) -> Vec<Effect> {
        let entries = pressable_entries(app.columns.len(), app.options.small);
        let Some(entry) = entries.get(index).copied() else {
            return Vec::new();
        };
        app.sidebar.selected_index = index;
        Self::activate(app, entry)
    }

    fn entry_label(app: &App, entry: SidebarEntry) -> String {
        match entry {
            SidebarEntry::AddColumn => Icon::Plus.glyph().to_string(),
            SidebarEntry::Settings => Icon::Gear.glyph().to_string(),
            SidebarEntry::Logout => Icon::SignOut.glyph().to_string(),
            SidebarEntry::Column(index) => {
                let Some(column) = app.columns.get(index) else {
                    return String::new();
                };
                let descriptor = resolve(column);
                match descriptor.avatar {
                    Some(avatar) => {
                        let initial = avatar.username.chars().next().unwrap_or('·');
                        format!("{} {}", descriptor.icon.glyph(), initial)
                    }
                    None => descriptor.icon.glyph().to_string(),
                }
            }
        }
    }

    fn cell_areas(&self, app: &App, area: Rect, cell_count: usize) -> Vec<Rect> {
        let mut constraints = Vec::with_capacity(cell_count + 1);
        let per_cell = if app.options.horizontal {
            Constraint::Length(CELL_WIDTH)
        } else {
            Constraint::Length(CELL_HEIGHT)
        };
        constraints.extend(std::iter::repeat_n(per_cell, cell_count));
        constraints.push(Constraint::Min(0));

        let layout = if app.options.horizontal {
            Layout::horizontal(constraints)
        } else {
            Layout::vertical(constraints)
        };
        let mut areas = layout.margin(1).split(area).to_vec();
        areas.truncate(cell_count);
        areas
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Ensure a valid initial child focus when the container gains focus
        if app.sidebar.container_focus.get() && app.sidebar.focused_entry_index().is_none() {
            app.focus.focus(&app.sidebar);
        }

        let horizontal = app.options.horizontal;
        let mut effects = Vec::new();
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            KeyCode::Down if !horizontal => self.cycle(app, true),
            KeyCode::Up if !horizontal => self.cycle(app, false),
            KeyCode::Right if horizontal => self.cycle(app, true),
            KeyCode::Left if horizontal => self.cycle(app, false),
            KeyCode::Enter => {
                if let Some(index) = app.sidebar.focused_entry_index() {
                    effects.extend(Self::activate_index(app, index));
                }
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let maybe_index = find_target_index_by_mouse_position(
            &app.sidebar.last_area,
            &app.sidebar.per_item_areas,
            mouse.column,
            mouse.row,
        );
        let Some(index) = maybe_index else {
            return Vec::new();
        };
        if let Some(flag) = app.sidebar.item_focus_flags.get(index) {
            app.focus.focus(flag);
        }
        Self::activate_index(app, index)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let cells = Self::cells(app);
        let entry_count = cells.iter().filter(|c| matches!(c, Cell::Entry(_))).count();
        app.sidebar.sync_entry_count(entry_count);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(app.sidebar.is_focused()));
        frame.render_widget(block, area);

        let cell_areas = self.cell_areas(app, area, cells.len());
        let mut per_item_areas = Vec::with_capacity(entry_count);
        let mut entry_index = 0usize;

        for (cell, cell_area) in cells.iter().zip(cell_areas.iter().copied()) {
            match cell {
                Cell::Header => {
                    let initials: String = app.username.chars().take(2).collect();
                    frame.render_widget(
                        Paragraph::new(format!("({initials})")).centered().style(theme::title_style()),
                        cell_area,
                    );
                }
                Cell::Logo => {
                    frame.render_widget(
                        Paragraph::new(Icon::Logo.glyph()).centered().style(theme::text_muted()),
                        cell_area,
                    );
                }
                Cell::Entry(entry) => {
                    let is_selected = entry_index == app.sidebar.selected_index;
                    let is_focused = app
                        .sidebar
                        .item_focus_flags
                        .get(entry_index)
                        .map(|flag| flag.get())
                        .unwrap_or_default();
                    theme::render_icon_button(frame, cell_area, &Self::entry_label(app, *entry), is_focused, is_selected);
                    per_item_areas.push(cell_area);
                    entry_index += 1;
                }
            }
        }

        app.sidebar.last_area = area;
        app.sidebar.per_item_areas = per_item_areas;
    }
}

impl SidebarComponent {
    fn cycle(&self, app: &mut App, forward: bool) {
        if let Some(flag) = app.sidebar.cycle_focus(forward) {
            app.focus.by_widget_id(flag.widget_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedrail_types::{Column, ColumnKind, Deck, FocusEvent, SidebarOptions};
    use std::sync::{Arc, Mutex};

    fn deck(ids: &[&str]) -> Deck {
        Deck {
            username: "octocat".into(),
            columns: ids
                .iter()
                .map(|id| Column {
                    id: (*id).into(),
                    kind: ColumnKind::Notifications,
                    subtype: None,
                    owner: None,
                    repo: None,
                })
                .collect(),
        }
    }

    fn recorded_events(app: &App) -> (Arc<Mutex<Vec<FocusEvent>>>, crate::nav::Subscription) {
        let recorded: Arc<Mutex<Vec<FocusEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let subscription = app.nav.subscribe({
            let recorded = Arc::clone(&recorded);
            move |event| recorded.lock().unwrap().push(event.clone())
        });
        (recorded, subscription)
    }

    #[test]
    fn selecting_a_column_publishes_exactly_one_event() {
        let mut app = App::new(deck(&["A", "B", "C"]), SidebarOptions::default());
        let (recorded, _sub) = recorded_events(&app);

        let effects = SidebarComponent::activate(&mut app, SidebarEntry::Column(1));
        assert!(effects.is_empty());

        let events = recorded.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            FocusEvent {
                column_id: "B".into(),
                column_index: 1,
                animated: true,
                highlight: true,
            }
        );
    }

    #[test]
    fn compact_mode_with_open_modal_suppresses_animation_and_highlight() {
        let mut app = App::new(
            deck(&["A", "B", "C"]),
            SidebarOptions {
                horizontal: false,
                small: true,
            },
        );
        app.current_modal = Some(Modal::Settings);
        let (recorded, _sub) = recorded_events(&app);

        SidebarComponent::activate(&mut app, SidebarEntry::Column(0));

        let events = recorded.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            FocusEvent {
                column_id: "A".into(),
                column_index: 0,
                animated: false,
                highlight: false,
            }
        );
    }

    #[test]
    fn add_column_dispatches_modal_and_publishes_nothing() {
        let mut app = App::new(deck(&["A"]), SidebarOptions::default());
        let (recorded, _sub) = recorded_events(&app);

        let effects = SidebarComponent::activate(&mut app, SidebarEntry::AddColumn);
        assert_eq!(effects, vec![Effect::ReplaceModal(Modal::AddColumn)]);
        assert!(recorded.lock().unwrap().is_empty());
    }

    #[test]
    fn both_settings_routes_produce_the_identical_effect() {
        // Compact mode offers settings inline, full mode as a fixed control;
        // the activation path is shared so the effects must match.
        let mut small_app = App::new(deck(&["A"]), SidebarOptions { horizontal: false, small: true });
        let mut full_app = App::new(deck(&["A"]), SidebarOptions::default());

        let from_small = SidebarComponent::activate(&mut small_app, SidebarEntry::Settings);
        let from_full = SidebarComponent::activate(&mut full_app, SidebarEntry::Settings);
        assert_eq!(from_small, from_full);
        assert_eq!(from_small, vec![Effect::ReplaceModal(Modal::Settings)]);
    }

    #[test]
    fn logout_is_a_pure_pass_through() {
        let mut app = App::new(deck(&["A"]), SidebarOptions::default());
        let (recorded, _sub) = recorded_events(&app);

        let effects = SidebarComponent::activate(&mut app, SidebarEntry::Logout);
        assert_eq!(effects, vec![Effect::Logout]);
        assert!(recorded.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_bounds_selection_publishes_nothing() {
        let mut app = App::new(deck(&["A"]), SidebarOptions::default());
        let (recorded, _sub) = recorded_events(&app);

        let effects = SidebarComponent::activate(&mut app, SidebarEntry::Column(7));
        assert!(effects.is_empty());
        assert!(recorded.lock().unwrap().is_empty());
    }
}
