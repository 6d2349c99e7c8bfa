//! Pure rendering: map App state to ratatui widget trees.
//!
//! The left pane shows only the current step's fields; the right pane is
//! the live preview of the commit draft. Geometry comes from
//! [`Layout::compute`] on every frame, fed with the measured form pane, so
//! the status pane always matches the form's height. The only effect is
//! `Frame::render_widget()`, which writes to the terminal buffer.

use std::ops::Range;

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::draft::CommitDraft;
use crate::field::{Field, FieldKind, FieldValue};
use crate::form::Form;
use crate::layout::Layout;

use super::state::App;
use super::theme::Theme;

// ============================================================================
// CONSTANTS
// ============================================================================

/// The form pane never reports a width outside this range.
pub const FORM_MIN_WIDTH: u16 = 48;
pub const FORM_MAX_WIDTH: u16 = 64;

/// Blank rows above and below the form pane.
pub const FORM_MARGIN_Y: u16 = 1;

/// Visible characters of a text value before it scrolls or wraps. A text
/// row also holds the bar, the prompt and the cursor.
const TEXT_WIDTH: usize = (FORM_MAX_WIDTH - 5) as usize;

const BAR: &str = "┃ ";
const PROMPT: &str = "> ";
const CURSOR: &str = "▌";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole frame for the current form state.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    if app.form.is_completed() {
        let summary = render_completed(&app.form.current_draft());
        frame.render_widget(Paragraph::new(summary), area);
        return;
    }

    let (width, height) = measure(&form_lines(&app.form, &app.theme).lines);
    let layout = Layout::compute(area.width, area.height, width, height);
    render_active(&app.form, &layout, &app.theme, frame);
}

/// The in-progress frame: current step on the left, live preview on the right.
///
/// When the step is taller than the terminal, the form pane scrolls so the
/// focused field stays on screen.
pub fn render_active(form: &Form, layout: &Layout, theme: &Theme, frame: &mut Frame) {
    let pane = form_lines(form, theme);
    let area = layout.form_area();
    let offset = scroll_offset(&pane.focus, area.height.saturating_sub(2 * FORM_MARGIN_Y));
    let form_pane = Paragraph::new(pane.lines)
        .scroll((offset, 0))
        .block(Block::new().padding(Padding::vertical(FORM_MARGIN_Y)));
    frame.render_widget(form_pane, area);

    if layout.is_two_column() {
        let draft = form.current_draft();
        frame.render_widget(status_pane(&draft, theme), layout.status_area());
    }
}

/// The exit frame: `<type>(<scope>)[<id>]: <title>`, a blank line, then
/// the description.
pub fn render_completed(draft: &CommitDraft) -> String {
    draft.to_string()
}

/// First row to show so the last row of `focus` fits in `visible` rows.
pub fn scroll_offset(focus: &Range<usize>, visible: u16) -> u16 {
    let hidden = focus.end.saturating_sub(usize::from(visible));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

/// Width and height the form pane needs, margins included.
pub fn measure(lines: &[Line<'_>]) -> (u16, u16) {
    let widest = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .clamp(FORM_MIN_WIDTH, FORM_MAX_WIDTH);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2 * FORM_MARGIN_Y);
    (width, height)
}

// ============================================================================
// FORM PANE
// ============================================================================

/// Rendered form pane content.
#[derive(Debug, Default)]
pub struct FormPane<'a> {
    pub lines: Vec<Line<'a>>,
    /// Rows of the focused field within `lines`.
    pub focus: Range<usize>,
}

/// Lines of the form pane: step indicator, the current step's fields, help.
pub fn form_lines<'a>(form: &'a Form, theme: &Theme) -> FormPane<'a> {
    let Some(step) = form.current_step() else {
        return FormPane::default();
    };

    let mut lines = vec![
        Line::styled(
            format!(
                "Step {} of {}",
                form.current_step_index() + 1,
                form.steps().len()
            ),
            theme.step,
        ),
        Line::default(),
    ];

    let mut focus = 0..0;
    for (i, field) in step.fields().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let start = lines.len();
        let focused = i == step.focus();
        field_lines(field, focused, theme, &mut lines);
        if focused {
            focus = start..lines.len();
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(help_text(form.focused_kind()), theme.help));
    FormPane { lines, focus }
}

fn field_lines<'a>(field: &'a Field, focused: bool, theme: &Theme, out: &mut Vec<Line<'a>>) {
    let bar = || Span::styled(BAR, if focused { theme.bar } else { theme.bar_blurred });
    let title_style = if focused { theme.title } else { theme.title_blurred };
    let cursor = || Span::styled(if focused { CURSOR } else { "" }, theme.cursor);

    out.push(Line::from(vec![bar(), Span::styled(field.title(), title_style)]));

    match field.value() {
        FieldValue::Select(chosen) => {
            for (i, option) in field.constraints().options.iter().enumerate() {
                let current = i == field.cursor();
                let marker = if current && focused { PROMPT } else { "  " };
                let style = if current && (focused || chosen.is_some()) {
                    theme.selected
                } else {
                    theme.option
                };
                out.push(Line::from(vec![
                    bar(),
                    Span::styled(marker, theme.selected),
                    Span::styled(option.label, style),
                ]));
            }
        }
        FieldValue::Text(text) => {
            out.push(Line::from(vec![
                bar(),
                Span::styled(PROMPT, title_style),
                Span::styled(visible_tail(text, TEXT_WIDTH), theme.text),
                cursor(),
            ]));
        }
        FieldValue::MultilineText(text) => {
            let rows = wrap_rows(text, TEXT_WIDTH);
            let last = rows.len().saturating_sub(1);
            for (i, row) in rows.into_iter().enumerate() {
                let mut spans = vec![bar(), Span::styled(row, theme.text)];
                if i == last {
                    spans.push(cursor());
                }
                out.push(Line::from(spans));
            }
        }
        FieldValue::Confirm(answer) => {
            let labels = field.confirm_labels();
            let button = |label: &'static str, active: bool| {
                Span::styled(
                    format!(" {label} "),
                    if active { theme.selected } else { theme.option },
                )
            };
            out.push(Line::from(vec![
                bar(),
                button(labels.affirmative, *answer),
                Span::raw("  "),
                button(labels.negative, !*answer),
            ]));
        }
    }

    if let Some(error) = field.error() {
        out.push(Line::from(vec![
            bar(),
            Span::styled(format!("* {error}"), theme.error),
        ]));
    }
}

/// Keybindings for the focused field's kind.
fn help_text(kind: Option<FieldKind>) -> &'static str {
    match kind {
        Some(FieldKind::Select) => "↑/↓ choose • enter next • shift+tab back • esc/q quit",
        Some(FieldKind::Text) => "enter next • shift+tab back • esc/q quit",
        Some(FieldKind::MultilineText) => {
            "alt+enter new line • enter next • shift+tab back • esc/q quit"
        }
        Some(FieldKind::Confirm) => "←/→ toggle • y/n answer • enter submit • esc/q quit",
        None => "",
    }
}

/// The last `width` characters, so the cursor end of long input stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    let start = text.char_indices().nth(skip).map_or(text.len(), |(i, _)| i);
    &text[start..]
}

/// Split on newlines, then hard-wrap each line at `width` characters.
///
/// Always yields at least one row so an empty field still shows its cursor.
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width.max(1)).map(|c| c.iter().collect()));
    }
    rows
}

// ============================================================================
// STATUS PANE
// ============================================================================

fn status_pane<'a>(draft: &CommitDraft, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(status_lines(draft, theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.status_border)
                .padding(Padding::left(1)),
        )
}

/// Live preview: one line per draft part (blank while unset), then the
/// compact commit header and description.
pub fn status_lines(draft: &CommitDraft, theme: &Theme) -> Vec<Line<'static>> {
    let labeled = |label: &str, value: &str| {
        if value.is_empty() {
            Line::default()
        } else {
            Line::from(format!("{label}: {value}"))
        }
    };

    let mut description = draft.description.split('\n');
    let first_description_line = description.next().unwrap_or("");

    let mut lines = vec![
        Line::styled("Current Commit", theme.status_header),
        labeled("Commit Type", &draft.commit_type).style(theme.highlight),
        labeled("Scope", &draft.scope),
        labeled("Work Item ID", &draft.work_item_id),
        labeled("Title", &draft.title),
        labeled("Description(Optional)", first_description_line),
    ];
    lines.extend(description.map(|l| Line::from(l.to_string())));

    lines.push(Line::default());
    lines.push(Line::styled("Completed Commit", theme.status_header));
    if draft.is_empty() {
        lines.push(Line::default());
    } else {
        lines.push(Line::from(draft.summary_line()));
    }
    lines.push(Line::default());
    lines.extend(
        draft
            .description
            .split('\n')
            .map(|l| Line::from(l.to_string())),
    );
    lines
}

// ============================================================================
// TESTS
// ============================================================================
