//! Pure state transitions: (App, Action) → Transition.
//!
//! Fully testable without a terminal. Cancellation never touches the form,
//! so a quit or interrupt mid-entry leaves no draft behind.

use tracing::debug;

use crate::form::Dispatch;

use super::state::{Action, App, Outcome, Transition};

pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Interrupt => {
            debug!("interrupted");
            Transition::Exit(Outcome::Interrupted)
        }
        Action::Quit => {
            debug!("cancelled");
            Transition::Exit(Outcome::Cancelled)
        }
        Action::Form(event) => match app.form.dispatch(event) {
            Dispatch::Ignored => Transition::Idle,
            Dispatch::Updated => Transition::Redraw,
            Dispatch::Completed => Transition::Exit(Outcome::Completed(app.form.current_draft())),
        },
    }
}
