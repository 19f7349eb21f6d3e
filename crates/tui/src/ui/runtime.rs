//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and animations.
//! - Route keys to the focused component and execute returned `Effect`s.
//! - Drain the navigation channel queue into the columns view once per
//!   iteration, so focus events published by the sidebar take effect on the
//!   same frame.
//!
//! A dedicated task blocks on `crossterm::event::read()` and forwards events
//! over a channel; the loop ticks fast (125 ms) only while the columns view
//! is animating or flashing, and idles at 1 s otherwise.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use std::rc::Rc;
use std::time::Duration;
use tokio::{signal, sync::mpsc, time};
use tracing::warn;

use crate::app::App;
use crate::ui::components::{ColumnsViewComponent, Component, SidebarComponent};
use crate::ui::main;
use feedrail_types::{Deck, Effect, Msg, SidebarOptions};
use rat_focus::FocusBuilder;

const FAST_TICK: Duration = Duration::from_millis(125);
const IDLE_TICK: Duration = Duration::from_secs(1);

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Keeping `poll()` and `read()` on the same task avoids lost or delayed
/// events in some terminals.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            if event::poll(sixteen_ms).is_ok_and(|ready| ready) {
                match event::read() {
                    Ok(event) => {
                        // Mouse moves are not used anywhere; drop them here
                        if event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved) {
                            continue;
                        }
                        if let Err(e) = sender.send(event).await {
                            warn!("failed to forward input event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("failed to read input event: {}", e);
                        break;
                    }
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame by delegating to `ui::main::draw`.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    sidebar: &mut SidebarComponent,
    columns_view: &mut ColumnsViewComponent,
) -> Result<()> {
    // Rebuild focus just before rendering so structure changes are reflected
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        app.focus.focus(&app.sidebar);
    }
    terminal.draw(|frame| main::draw(frame, app, sidebar, columns_view))?;
    Ok(())
}

/// Handle a raw crossterm input event and collect the resulting effects.
fn handle_input_event(
    app: &mut App,
    sidebar: &mut SidebarComponent,
    columns_view: &mut ColumnsViewComponent,
    input_event: Event,
) -> Vec<Effect> {
    match input_event {
        Event::Key(key) => {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return app.update(Msg::Quit);
                }
                KeyCode::Char('q') if app.current_modal.is_none() => {
                    return app.update(Msg::Quit);
                }
                KeyCode::Esc if app.current_modal.is_some() => {
                    return app.update(Msg::CloseModal);
                }
                _ => {}
            }
            // An open modal does not swallow sidebar gestures; it only
            // feeds the animated flag of published focus events.
            if app.sidebar.is_focused() {
                sidebar.handle_key_events(app, key)
            } else {
                columns_view.handle_key_events(app, key)
            }
        }
        Event::Mouse(mouse) => {
            let position = ratatui::layout::Position {
                x: mouse.column,
                y: mouse.row,
            };
            if app.sidebar.last_area.contains(position) {
                sidebar.handle_mouse_events(app, mouse)
            } else {
                columns_view.handle_mouse_events(app, mouse)
            }
        }
        Event::Resize(width, height) => app.update(Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, mounts the
/// columns view on the navigation channel, runs the event loop, and
/// performs cleanup on exit.
pub async fn run_app(deck: Deck, options: SidebarOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;

    let mut app = App::new(deck, options);
    let nav = app.nav.clone();
    app.columns_view.mount(&nav);

    let mut sidebar = SidebarComponent;
    let mut columns_view = ColumnsViewComponent;
    let mut terminal = setup_terminal()?;

    let result = async {
        loop {
            render(&mut terminal, &mut app, &mut sidebar, &mut columns_view)?;

            let tick = if app.is_animating() { FAST_TICK } else { IDLE_TICK };
            let effects = tokio::select! {
                maybe_event = input_receiver.recv() => {
                    match maybe_event {
                        Some(input_event) => handle_input_event(&mut app, &mut sidebar, &mut columns_view, input_event),
                        None => break,
                    }
                }
                _ = time::sleep(tick) => app.update(Msg::Tick),
                _ = signal::ctrl_c() => break,
            };

            for effect in effects {
                app.apply_effect(effect);
            }
            app.drain_nav_events();

            if app.should_quit {
                break;
            }
        }
        Ok(())
    }
    .await;

    app.columns_view.unmount();
    cleanup_terminal(&mut terminal)?;
    result
}
