//! TUI color semantics and styles.
//!
//! Color semantics:
//! - Indigo: focus and frames (focused field bar, status border, titles)
//! - Green: status pane headers
//! - Pink (212): live values and the highlighted option
//! - Red: validation errors
//! - Gray (240): help line and unfocused fields

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

pub const RED: Color = Color::Rgb(0xFE, 0x5F, 0x86);
pub const INDIGO: Color = Color::Rgb(0x75, 0x71, 0xF9);
pub const GREEN: Color = Color::Rgb(0x02, 0xBF, 0x87);
pub const HIGHLIGHT: Color = Color::Indexed(212);
pub const MUTED: Color = Color::Indexed(240);

// ============================================================================
// THEME
// ============================================================================

/// Styles consumed by the renderer. Pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Step indicator above the fields.
    pub step: Style,
    /// Title of the focused field.
    pub title: Style,
    /// Title of an unfocused field.
    pub title_blurred: Style,
    /// Left bar of the focused field.
    pub bar: Style,
    /// Left bar of unfocused fields.
    pub bar_blurred: Style,
    /// Typed text.
    pub text: Style,
    /// Text cursor.
    pub cursor: Style,
    /// Highlighted select option and the chosen confirm button.
    pub selected: Style,
    /// Other options and buttons.
    pub option: Style,
    /// Inline validation error.
    pub error: Style,
    /// Status pane border.
    pub status_border: Style,
    /// "Current Commit" / "Completed Commit".
    pub status_header: Style,
    /// Live commit type line.
    pub highlight: Style,
    /// Key help.
    pub help: Style,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        step: Style::new().fg(MUTED),
        title: Style::new().fg(INDIGO).add_modifier(Modifier::BOLD),
        title_blurred: Style::new().fg(MUTED),
        bar: Style::new().fg(INDIGO),
        bar_blurred: Style::new().fg(MUTED),
        text: Style::new(),
        cursor: Style::new().fg(HIGHLIGHT),
        selected: Style::new().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        option: Style::new().fg(MUTED),
        error: Style::new().fg(RED),
        status_border: Style::new().fg(INDIGO),
        status_header: Style::new().fg(GREEN).add_modifier(Modifier::BOLD),
        highlight: Style::new().fg(HIGHLIGHT),
        help: Style::new().fg(MUTED),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DEFAULT
    }
}

// ============================================================================
// TESTS
// ============================================================================
