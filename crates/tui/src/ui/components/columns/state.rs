//! Columns view state and its navigation channel subscription.

use std::sync::{Arc, Mutex};

use feedrail_types::FocusEvent;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::nav::{NavChannel, Subscription};

/// How many ticks a highlight flash stays visible.
const FLASH_TICKS: u8 = 6;

/// State for the columns view.
///
/// Focus events arrive on the publisher's call stack, where the app state
/// is not borrowable, so the subscription handler only queues them; the
/// runtime drains the queue once per loop iteration via [`Self::drain_pending`].
#[derive(Debug, Default)]
pub struct ColumnsViewState {
    /// Index of the first visible column.
    pub offset: usize,
    /// Column the view is currently scrolled/scrolling to.
    pub target: usize,
    /// Currently focused column, set by the last focus event.
    pub selected: Option<usize>,
    /// Remaining flash frames for the highlighted column, if any.
    pub flash: Option<(usize, u8)>,
    /// Focus flag for the pane in the global focus tree.
    pub pane_focus: FocusFlag,
    /// Last rendered area, for mouse routing.
    pub last_area: Rect,
    pending: Arc<Mutex<Vec<FocusEvent>>>,
    subscription: Option<Subscription>,
}

impl ColumnsViewState {
    pub fn new() -> Self {
        Self {
            pane_focus: FocusFlag::named("columns"),
            ..Self::default()
        }
    }

    /// Registers the view on the navigation channel.
    ///
    /// The subscription lives until the state is dropped (or `unmount` is
    /// called), so handlers never fire against a torn-down view.
    pub fn mount(&mut self, channel: &NavChannel) {
        let pending = Arc::clone(&self.pending);
        self.subscription = Some(channel.subscribe(move |event| {
            pending.lock().unwrap_or_else(|e| e.into_inner()).push(event.clone());
        }));
    }

    /// Drops the channel subscription.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    /// Applies queued focus events. Returns `true` if anything changed.
    ///
    /// Rapid repeated events collapse naturally: each one overwrites the
    /// target and restarts the flash, which is this consumer's debouncing.
    pub fn drain_pending(&mut self, column_count: usize, visible: usize) -> bool {
        let events: Vec<FocusEvent> = {
            let mut queue = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            queue.drain(..).collect()
        };
        let mut changed = false;
        for event in events {
            if event.column_index >= column_count {
                // Stale index from a snapshot that no longer exists
                continue;
            }
            self.selected = Some(event.column_index);
            self.target = event.column_index;
            if event.highlight {
                self.flash = Some((event.column_index, FLASH_TICKS));
            }
            if !event.animated {
                self.offset = scroll_to(self.offset, self.target, visible);
            }
            changed = true;
        }
        changed
    }

    /// Advances one animation frame. Returns `true` while still animating.
    pub fn tick(&mut self, visible: usize) -> bool {
        let mut active = false;

        let settled = scroll_to(self.offset, self.target, visible);
        if settled != self.offset {
            // Ease by one column per frame toward the target
            self.offset = if settled > self.offset { self.offset + 1 } else { self.offset - 1 };
            active = true;
        }

        if let Some((index, ticks)) = self.flash {
            self.flash = ticks.checked_sub(1).map(|rest| (index, rest)).filter(|(_, rest)| *rest > 0);
            active = active || self.flash.is_some();
        }
        active
    }

    /// Whether a scroll animation or a flash is in progress.
    pub fn is_animating(&self, visible: usize) -> bool {
        scroll_to(self.offset, self.target, visible) != self.offset || self.flash.is_some()
    }

    /// Whether `index` should render flashed this frame. The flash blinks
    /// by tick parity.
    pub fn is_flashing(&self, index: usize) -> bool {
        matches!(self.flash, Some((flashed, ticks)) if flashed == index && ticks % 2 == 0)
    }
}

/// Smallest offset move that brings `target` into a window of `visible`
/// columns starting at `offset`.
fn scroll_to(offset: usize, target: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if target < offset {
        target
    } else if target >= offset + visible {
        target + 1 - visible
    } else {
        offset
    }
}

impl HasFocus for ColumnsViewState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(&self.pane_focus);
    }

    fn focus(&self) -> FocusFlag {
        self.pane_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(index: usize, animated: bool, highlight: bool) -> FocusEvent {
        FocusEvent {
            column_id: format!("col-{index}"),
            column_index: index,
            animated,
            highlight,
        }
    }

    #[test]
    fn scroll_to_moves_minimally() {
        assert_eq!(scroll_to(0, 0, 2), 0);
        assert_eq!(scroll_to(0, 1, 2), 0);
        assert_eq!(scroll_to(0, 3, 2), 2);
        assert_eq!(scroll_to(3, 1, 2), 1);
    }

    #[test]
    fn unanimated_event_jumps_immediately() {
        let channel = NavChannel::new();
        let mut state = ColumnsViewState::new();
        state.mount(&channel);

        channel.publish(&event(4, false, false));
        assert!(state.drain_pending(6, 2));
        assert_eq!(state.selected, Some(4));
        assert_eq!(state.offset, 3);
        assert!(state.flash.is_none());
    }

    #[test]
    fn animated_event_eases_over_ticks() {
        let channel = NavChannel::new();
        let mut state = ColumnsViewState::new();
        state.mount(&channel);

        channel.publish(&event(4, true, true));
        assert!(state.drain_pending(6, 2));
        assert_eq!(state.offset, 0, "animated scroll does not jump");
        assert!(state.is_animating(2));

        let mut guard = 0;
        while state.tick(2) && guard < 32 {
            guard += 1;
        }
        assert_eq!(state.offset, 3);
        assert!(state.flash.is_none(), "flash decays with the animation");
    }

    #[test]
    fn repeated_events_restart_the_flash() {
        let channel = NavChannel::new();
        let mut state = ColumnsViewState::new();
        state.mount(&channel);

        channel.publish(&event(1, false, true));
        channel.publish(&event(1, false, true));
        assert!(state.drain_pending(3, 3));
        let (_, ticks) = state.flash.expect("flash pending");
        assert_eq!(ticks, FLASH_TICKS);
    }

    #[test]
    fn stale_indices_are_ignored() {
        let channel = NavChannel::new();
        let mut state = ColumnsViewState::new();
        state.mount(&channel);

        channel.publish(&event(9, false, true));
        assert!(!state.drain_pending(3, 3));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn unmount_stops_receiving() {
        let channel = NavChannel::new();
        let mut state = ColumnsViewState::new();
        state.mount(&channel);
        assert_eq!(channel.subscriber_count(), 1);

        state.unmount();
        assert_eq!(channel.subscriber_count(), 0);
        channel.publish(&event(1, false, false));
        assert!(!state.drain_pending(3, 3));
    }
}
