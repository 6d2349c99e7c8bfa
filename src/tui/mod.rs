//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Transition, Outcome)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: styles
//! - `run`: effects (terminal lifecycle and the event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
