//! Application state and logic for the Feedrail TUI.
//!
//! The `App` is the store: it owns the column list, the current user, and
//! the open-modal state, and applies the effects components report. The
//! sidebar and columns view read this state as a snapshot on every render;
//! neither keeps its own copy.

use std::rc::Rc;

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::nav::NavChannel;
use crate::ui::components::columns::ColumnsViewComponent;
use crate::ui::components::sidebar::pressable_entries;
use crate::ui::components::{ColumnsViewState, SidebarState};
use feedrail_types::{Column, Deck, Effect, Modal, Msg, SidebarOptions};

pub struct App {
    /// Ordered column list; position is the navigation index
    pub columns: Vec<Column>,
    /// Login of the current user
    pub username: String,
    /// Currently open modal, if any
    pub current_modal: Option<Modal>,
    /// Presentation inputs (layout orientation, compact mode)
    pub options: SidebarOptions,
    /// Process-wide navigation bus
    pub nav: NavChannel,
    /// Sidebar presentation state
    pub sidebar: SidebarState,
    /// Columns view presentation state
    pub columns_view: ColumnsViewState,
    /// Global focus tree, rebuilt before each render
    pub focus: Rc<Focus>,
    /// Container focus flag for the whole app
    pub container_focus: FocusFlag,
    /// Set when the user quits or logs out
    pub should_quit: bool,
}

impl App {
    pub fn new(deck: Deck, options: SidebarOptions) -> Self {
        let entry_count = pressable_entries(deck.columns.len(), options.small).len();
        let mut app = Self {
            columns: deck.columns,
            username: deck.username,
            current_modal: None,
            options,
            nav: NavChannel::new(),
            sidebar: SidebarState::new(entry_count),
            columns_view: ColumnsViewState::new(),
            focus: Rc::default(),
            container_focus: FocusFlag::named("app"),
            should_quit: false,
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        app.focus.focus(&app.sidebar);
        app
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                let visible = self.visible_columns();
                self.columns_view.tick(visible);
            }
            Msg::Resize(_, _) => {}
            Msg::CloseModal => {
                self.current_modal = None;
            }
            Msg::Quit => {
                self.should_quit = true;
            }
        }
        Vec::new()
    }

    /// Applies a component-reported effect to the store.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ReplaceModal(modal) => {
                debug!(modal = modal.name(), "replacing open modal");
                self.current_modal = Some(modal);
            }
            Effect::Logout => {
                info!(username = %self.username, "logging out");
                self.username.clear();
                self.current_modal = None;
                self.should_quit = true;
            }
        }
    }

    /// Drains queued navigation events into the columns view. Returns
    /// `true` if the view changed.
    pub fn drain_nav_events(&mut self) -> bool {
        let visible = self.visible_columns();
        let column_count = self.columns.len();
        self.columns_view.drain_pending(column_count, visible)
    }

    /// Whether the columns view has an animation or flash in progress.
    pub fn is_animating(&self) -> bool {
        self.columns_view.is_animating(self.visible_columns())
    }

    fn visible_columns(&self) -> usize {
        ColumnsViewComponent::visible_count(self.columns_view.last_area)
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.sidebar);
        builder.widget(&self.columns_view);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Deck::demo(), SidebarOptions::default())
    }

    #[test]
    fn replace_modal_replaces_rather_than_stacks() {
        let mut app = app();
        app.apply_effect(Effect::ReplaceModal(Modal::AddColumn));
        assert_eq!(app.current_modal, Some(Modal::AddColumn));
        app.apply_effect(Effect::ReplaceModal(Modal::Settings));
        assert_eq!(app.current_modal, Some(Modal::Settings));
    }

    #[test]
    fn close_modal_clears_the_overlay() {
        let mut app = app();
        app.apply_effect(Effect::ReplaceModal(Modal::Settings));
        app.update(Msg::CloseModal);
        assert_eq!(app.current_modal, None);
    }

    #[test]
    fn logout_clears_the_session_and_quits() {
        let mut app = app();
        app.apply_effect(Effect::Logout);
        assert!(app.username.is_empty());
        assert!(app.should_quit);
    }
}
