//! Two-pane geometry: the form on the left, the live status on the right.
//!
//! Pure and recomputed for every frame from the terminal size and the
//! measured form pane, so it can never go stale after a resize or after the
//! form grows. On narrow terminals the status pane shrinks, then disappears,
//! and the margin between the panes clamps to zero instead of going
//! negative.

use ratatui::layout::Rect;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Total width cap, however wide the terminal is.
pub const MAX_WIDTH: u16 = 120;

/// Preferred width of the status pane.
pub const STATUS_WIDTH: u16 = 40;

/// Below this the status pane is dropped rather than squeezed.
pub const MIN_STATUS_WIDTH: u16 = 16;

/// Margin kept to the right of the status pane.
pub const STATUS_FRAME_MARGIN: u16 = 0;

/// Gap above the status pane.
pub const STATUS_MARGIN_TOP: u16 = 1;

/// Outer frame padding around both panes.
pub const PADDING_LEFT: u16 = 1;
pub const PADDING_RIGHT: u16 = 4;
pub const PADDING_TOP: u16 = 1;

// ============================================================================
// LAYOUT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub form_width: u16,
    pub form_height: u16,
    pub status_width: u16,
    /// Always equal to `form_height` so both panes line up.
    pub status_height: u16,
    pub status_margin_left: u16,
    /// `min(terminal_width, MAX_WIDTH)`.
    pub total_cap: u16,
}

impl Layout {
    /// Compute pane geometry for a terminal and a measured form pane.
    ///
    /// Guarantees `form_width + status_width + status_margin_left <= total_cap`.
    pub fn compute(
        terminal_width: u16,
        terminal_height: u16,
        form_rendered_width: u16,
        form_rendered_height: u16,
    ) -> Self {
        let total_cap = terminal_width.min(MAX_WIDTH);
        let inner = total_cap.saturating_sub(PADDING_LEFT + PADDING_RIGHT);

        let form_width = form_rendered_width.min(inner);
        let room = inner - form_width;

        let status_width = if room >= STATUS_WIDTH {
            STATUS_WIDTH
        } else if room >= MIN_STATUS_WIDTH {
            room
        } else {
            0
        };

        let status_margin_left = if status_width == 0 {
            0
        } else {
            room.saturating_sub(status_width)
                .saturating_sub(STATUS_FRAME_MARGIN)
        };

        Layout {
            terminal_width,
            terminal_height,
            form_width,
            form_height: form_rendered_height,
            status_width,
            status_height: form_rendered_height,
            status_margin_left,
            total_cap,
        }
    }

    /// Whether the status pane is shown at all.
    pub fn is_two_column(&self) -> bool {
        self.status_width > 0
    }

    fn screen(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Form pane, clipped to the terminal.
    pub fn form_area(&self) -> Rect {
        Rect::new(PADDING_LEFT, PADDING_TOP, self.form_width, self.form_height)
            .intersection(self.screen())
    }

    /// Status pane, clipped to the terminal. Empty in single-column mode.
    pub fn status_area(&self) -> Rect {
        if !self.is_two_column() {
            return Rect::default();
        }
        let x = PADDING_LEFT + self.form_width + self.status_margin_left;
        Rect::new(
            x,
            PADDING_TOP + STATUS_MARGIN_TOP,
            self.status_width,
            self.status_height,
        )
        .intersection(self.screen())
    }
}

// ============================================================================
// TESTS
// ============================================================================
