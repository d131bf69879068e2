//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the game,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui, crossterm and tokio.
//!
//! ## Event Loop
//!
//! One thread, one `App`. Each pass:
//!
//! 1. Draw if anything changed.
//! 2. Poll the terminal (short timeout while timers or toasts are live).
//! 3. Route input: outcome modal first, then mouse hit testing, then the key map.
//! 4. Drain timer actions from the scheduler channel.
//!
//! Every action goes through `core::action::update`; the returned `Effect`
//! goes to the `Scheduler`.

pub mod component;
pub mod components;
pub mod event;
pub mod scheduler;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{KeyMap, OutcomeModal, ToastStackState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::scheduler::Scheduler;
use crate::tui::theme::Palette;

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub toasts: ToastStackState,
}

impl TuiState {
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            toasts: ToastStackState::new(toast_ttl),
        }
    }

    /// Pull new notices from the app into the toast stack. Returns true if any arrived.
    pub fn sync_notices(&mut self, app: &App) -> bool {
        self.toasts.sync(&app.notices, Instant::now())
    }
}

/// Owns terminal teardown for every exit from `run`, `?` paths included.
/// Must be created before `ratatui::init()`.
struct TerminalModeGuard {
    restore: fn(),
}

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self {
            restore: restore_terminal,
        })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
}

/// Run one action through the reducer and hand its effect to the scheduler.
/// Returns true when the app should quit.
pub fn dispatch(app: &mut App, scheduler: &mut Scheduler, action: Action) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        effect => {
            scheduler.apply(effect);
            false
        }
    }
}

/// Map one terminal event to an action given what is on screen.
fn route_event(event: TuiEvent, app: &App, frame_area: ratatui::layout::Rect) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // The outcome modal swallows keys while it is open
    if let Some(outcome) = &app.outcome {
        let palette = Palette::for_theme(app.theme);
        return OutcomeModal::new(outcome, app.game.move_count, &palette).handle_event(&event);
    }

    if let TuiEvent::MouseClick(column, row) = event {
        return ui::hit_test(column, row, frame_area, app);
    }

    KeyMap {
        boat_side: app.game.boat.position,
        auto_solving: app.is_auto_solving(),
    }
    .handle_event(&event)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(Duration::from_millis(config.toast_ms));

    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut terminal = ratatui::init();

    // Channel for actions from timer tasks
    let (tx, rx) = mpsc::channel();
    let mut scheduler = Scheduler::new(tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        if tui.sync_notices(&app) | tui.toasts.prune(now) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short timeout while something will change on its own
        let live = scheduler.any_pending() || !tui.toasts.is_empty();
        let timeout = if live {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(event, &app, frame_area) {
                should_quit |= dispatch(&mut app, &mut scheduler, action);
            }
        }

        // Handle timer actions (judgement, solver steps)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, &mut scheduler, action);
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down after {} moves", app.game.move_count);
    scheduler.cancel_all();
    Ok(())
}
