//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! The loop is single-threaded: it blocks on the next terminal event,
//! handles it to completion, and redraws only when something changed.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::field::Input;
use crate::form::{Form, FormEvent};

use super::state::{Action, App, Outcome, Transition};
use super::theme::Theme;
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// `q` quits whatever field has focus, text fields included.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Interrupt);
    }

    let input = |i| Some(Action::Form(FormEvent::Input(i)));

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('q') => Some(Action::Quit),

        // Navigation
        KeyCode::Enter if alt => input(Input::Newline),
        KeyCode::Char('j') if ctrl => input(Input::Newline),
        KeyCode::Enter | KeyCode::Tab => Some(Action::Form(FormEvent::Next)),
        KeyCode::BackTab => Some(Action::Form(FormEvent::Prev)),

        // Field input
        KeyCode::Up => input(Input::Up),
        KeyCode::Down => input(Input::Down),
        KeyCode::Left => input(Input::Left),
        KeyCode::Right => input(Input::Right),
        KeyCode::Backspace => input(Input::Backspace),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => input(Input::Char(c)),

        _ => None,
    }
}

/// Handle one key event: map it, then run the pure transition.
///
/// Key releases and repeats reported by some terminals are ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Transition {
    if key.kind != KeyEventKind::Press {
        return Transition::Idle;
    }
    match map_key(key) {
        Some(action) => update(app, &action),
        None => Transition::Idle,
    }
}

/// Handle any terminal event. Resizes only trigger a redraw: geometry is
/// recomputed from the new size while drawing.
pub fn handle_event(app: &mut App, event: Event) -> Transition {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            Transition::Redraw
        }
        _ => Transition::Idle,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// Raw mode is switched back off if anything after it fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let terminal = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    restore_on_error(terminal, restore_terminal)
}

/// Run `restore` when `result` is an error, keeping the original error.
fn restore_on_error<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the commit form until it completes or the user leaves.
///
/// The terminal is restored on every exit path before returning, so the
/// caller can print the draft to a clean stdout.
pub fn run(theme: Theme) -> io::Result<Outcome> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(Form::commit(), theme);

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    let outcome = result?;
    debug!(?outcome, "session ended");
    Ok(outcome)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<Outcome> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| render(app, frame))?;
        }

        // Block until the terminal has something for us.
        match handle_event(app, event::read()?) {
            Transition::Redraw => dirty = true,
            Transition::Idle => dirty = false,
            Transition::Exit(outcome) => return Ok(outcome),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
