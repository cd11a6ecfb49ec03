//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and pointer events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 250ms in
//! `poll`, drains all pending events, and only draws when an event
//! arrived. Nothing on screen animates, so an idle frame costs nothing.

mod component;
mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::snapshot;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// Blocks a region from re-triggering for a fixed interval after a
/// click, matching the original one-second button delay.
pub struct Debounce {
    interval: Duration,
    last: Option<Instant>,
}

impl Debounce {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    fn ready_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now.duration_since(prev) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut app: App, data_file: &Path) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut nav_debounce = Debounce::new(Duration::from_secs(1));
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(Duration::from_millis(250));
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            let Some(action) = translate(&app, &mut terminal, &mut nav_debounce, tui_event) else {
                continue;
            };
            debug!("Dispatching: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    // The single save of the session, on the way out.
    if let Err(e) = snapshot::save(data_file, &app.snapshot()) {
        warn!("Failed to save snapshot: {}", e);
    } else {
        info!("Snapshot saved to {}", data_file.display());
    }

    ratatui::restore();
    Ok(())
}

/// Map a terminal event to a core action, honoring the editing focus
/// and the navigation debounce.
fn translate(
    app: &App,
    terminal: &mut ratatui::DefaultTerminal,
    nav_debounce: &mut Debounce,
    tui_event: TuiEvent,
) -> Option<Action> {
    match tui_event {
        TuiEvent::ForceQuit => Some(Action::Quit),

        TuiEvent::LeftClick(x, y) | TuiEvent::RightClick(x, y) => {
            let right_click = matches!(tui_event, TuiEvent::RightClick(..));
            let area = terminal.get_frame().area();
            match ui::hit_test(app, area, x, y, right_click)? {
                Hit::RefreshNow => {
                    let now = chrono::Local::now();
                    Some(Action::RefreshNow {
                        date: now.date_naive(),
                        time: now.time(),
                    })
                }
                Hit::Action(action) => {
                    if is_nav(&action) && !nav_debounce.ready() {
                        debug!("Debounced: {:?}", action);
                        return None;
                    }
                    Some(action)
                }
            }
        }

        // Keyboard routing is gated by the editing focus.
        _ if app.is_editing() => match tui_event {
            TuiEvent::Escape | TuiEvent::Submit => Some(Action::StopEditing),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::InputChar(c) => Some(Action::InputChar(c)),
            _ => None,
        },
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::CursorLeft => Some(Action::PrevMonth),
        TuiEvent::CursorRight => Some(Action::NextMonth),
        _ => None,
    }
}

/// Screen-changing button actions, subject to the debounce.
fn is_nav(action: &Action) -> bool {
    matches!(
        action,
        Action::OpenTasks | Action::OpenCalendar | Action::OpenToday | Action::Back
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_blocks_within_interval() {
        let mut d = Debounce::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(d.ready_at(t0));
        assert!(!d.ready_at(t0 + Duration::from_millis(500)));
        assert!(d.ready_at(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn test_debounce_resets_after_trigger() {
        let mut d = Debounce::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(d.ready_at(t0));
        assert!(d.ready_at(t0 + Duration::from_secs(2)));
        // The second trigger restarts the window.
        assert!(!d.ready_at(t0 + Duration::from_millis(2500)));
    }

    #[test]
    fn test_zero_interval_never_blocks() {
        let mut d = Debounce::new(Duration::ZERO);
        let t0 = Instant::now();
        assert!(d.ready_at(t0));
        assert!(d.ready_at(t0));
    }
}
