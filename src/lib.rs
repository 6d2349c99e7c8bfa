//! commit-compose: compose structured commit messages in an interactive form.

pub mod draft;
pub mod error;
pub mod field;
pub mod form;
pub mod layout;
pub mod repo;
pub mod step;
pub mod tui;
