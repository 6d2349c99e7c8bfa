//! TUI state algebra: pure types, zero effects.
//!
//! The form owns every entered value; the App only pairs it with the theme.
//! Geometry is derived during rendering, never stored here.

use crate::draft::CommitDraft;
use crate::form::{Form, FormEvent};

use super::theme::Theme;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub form: Form,
    pub theme: Theme,
}

impl App {
    pub fn new(form: Form, theme: Theme) -> Self {
        App { form, theme }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Form::commit(), Theme::default())
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ctrl+C: abort immediately, nothing is produced.
    Interrupt,
    /// Esc or q: leave without a draft.
    Quit,
    /// Anything the form handles.
    Form(FormEvent),
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The final confirmation passed.
    Completed(CommitDraft),
    /// The user quit.
    Cancelled,
    /// The user pressed Ctrl+C.
    Interrupted,
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State or geometry changed: draw a new frame.
    Redraw,
    /// Nothing visible changed.
    Idle,
    /// Stop the loop.
    Exit(Outcome),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    #[test]
    fn default_app_starts_on_fresh_form() {
        let app = App::default();
        assert_eq!(app.form.state(), FormState::Active);
        assert_eq!(app.form.current_step_index(), 0);
        assert_eq!(app.theme, Theme::DEFAULT);
    }
}
