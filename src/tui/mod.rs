//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI and
//! feeds terminal events to the [`TripPresenter`].
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps up to 500ms waiting for
//! input and only redraws after an event arrived. All pending events are
//! drained before the next frame.

pub mod component;
pub mod components;
pub mod event;
pub mod presenter;
mod ui;
pub mod view_tree;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::trip_event::TripEvent;
use crate::tui::component::EventHandler;
use crate::tui::components::EventListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::presenter::{Effect, TripPresenter};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the trip itself)
pub struct TuiState {
    pub event_list: EventListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            event_list: EventListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig, events: Vec<TripEvent>) -> std::io::Result<()> {
    let mut trip = TripPresenter::new(config.default_sort);
    trip.init(events);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) =
                terminal.draw(|f| ui::draw_ui(f, &trip, &mut tui, &config.display))
            {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
                    tui.event_list.handle_event(&event);
                }
                TuiEvent::MouseClick(column, row) => {
                    if let Some(view) = tui.event_list.hit_test(column, row) {
                        tui.event_list.follow_focus = true;
                        trip.click_view(view);
                    }
                }
                _ => {
                    tui.event_list.follow_focus = true;
                    if trip.handle_input(&event) == Effect::Quit {
                        should_quit = true;
                    }
                }
            }
        }

        if should_quit {
            info!("Quit requested");
            break Ok(());
        }
    };

    ratatui::restore();
    result
}
