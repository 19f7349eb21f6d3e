//! # Feedrail TUI Library
//!
//! Terminal user interface for the Feedrail feed reader. It renders a
//! navigation sidebar next to a scrollable columns view and keeps the two in
//! sync without either referencing the other: selecting a sidebar entry
//! publishes a focus event on a process-wide navigation channel, and the
//! columns view reacts by scrolling to and highlighting the target column.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture: the sidebar and the
//! columns view are separate components that handle their own events and
//! rendering, report side effects back as `Effect`s, and communicate with
//! each other only through the navigation channel.

mod app;
mod nav;
mod ui;

use anyhow::Result;
use feedrail_types::{Deck, SidebarOptions};

/// Runs the main TUI application loop.
///
/// Sets up the terminal, wires the sidebar and columns view onto the
/// navigation channel, and drives the event loop until the user quits or
/// logs out.
///
/// # Errors
///
/// Returns an error for terminal setup failures or event loop runtime
/// issues.
pub async fn run(deck: Deck, options: SidebarOptions) -> Result<()> {
    ui::runtime::run_app(deck, options).await
}
