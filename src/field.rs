//! Field model: one user-editable input and its validation state.
//!
//! A field's kind is carried by its [`FieldValue`] variant, so the value can
//! never disagree with the kind. Validation failures are stored on the field
//! and surface on the next render; they never propagate further.

use thiserror::Error;

// ============================================================================
// TYPES
// ============================================================================

/// Which logical input a field feeds in the commit draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    CommitType,
    Scope,
    WorkItemId,
    Title,
    Description,
    Done,
}

/// One selectable entry: a human label and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl SelectOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        SelectOption { label, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Select,
    Text,
    MultilineText,
    Confirm,
}

/// Typed field value. The variant is the field's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Index into the declared options; `None` until something is picked.
    Select(Option<usize>),
    Text(String),
    MultilineText(String),
    Confirm(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Select(_) => FieldKind::Select,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::MultilineText(_) => FieldKind::MultilineText,
            FieldValue::Confirm(_) => FieldKind::Confirm,
        }
    }
}

/// Declarative limits checked by [`Field::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub required: bool,
    /// Maximum length in characters (text kinds only).
    pub max_length: Option<usize>,
    /// Declared options (Select only).
    pub options: &'static [SelectOption],
    /// Confirm must be answered "yes".
    pub must_confirm: bool,
}

/// Button labels for a Confirm field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmLabels {
    pub affirmative: &'static str,
    pub negative: &'static str,
}

impl Default for ConfirmLabels {
    fn default() -> Self {
        ConfirmLabels {
            affirmative: "Yes",
            negative: "No",
        }
    }
}

/// Why a field's value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,

    #[error("must be at most {max} characters")]
    TooLong { max: usize },

    #[error("{value:?} is not one of the available options")]
    NotAnOption { value: String },

    #[error("{value:?} is not a yes/no answer")]
    NotAnAnswer { value: String },

    #[error("Welp, finish up then")]
    NotConfirmed,
}

/// A raw input event already narrowed to what a field can interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Backspace,
    Newline,
    Up,
    Down,
    Left,
    Right,
}

/// One logical input of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: FieldId,
    title: &'static str,
    value: FieldValue,
    constraints: Constraints,
    labels: ConfirmLabels,
    error: Option<ValidationError>,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Field {
    fn new(id: FieldId, title: &'static str, value: FieldValue) -> Self {
        Field {
            id,
            title,
            value,
            constraints: Constraints::default(),
            labels: ConfirmLabels::default(),
            error: None,
        }
    }

    /// Single choice among `options`; nothing chosen initially.
    pub fn select(id: FieldId, title: &'static str, options: &'static [SelectOption]) -> Self {
        let mut field = Field::new(id, title, FieldValue::Select(None));
        field.constraints.options = options;
        field
    }

    pub fn text(id: FieldId, title: &'static str) -> Self {
        Field::new(id, title, FieldValue::Text(String::new()))
    }

    /// Multi-line text truncated to `char_limit` characters.
    pub fn multiline(id: FieldId, title: &'static str, char_limit: usize) -> Self {
        let mut field = Field::new(id, title, FieldValue::MultilineText(String::new()));
        field.constraints.max_length = Some(char_limit);
        field
    }

    pub fn confirm(id: FieldId, title: &'static str) -> Self {
        Field::new(id, title, FieldValue::Confirm(false))
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    /// Confirm only: answering "no" is a validation failure.
    pub fn must_confirm(mut self) -> Self {
        self.constraints.must_confirm = true;
        self.constraints.required = true;
        self
    }

    pub fn labels(mut self, affirmative: &'static str, negative: &'static str) -> Self {
        self.labels = ConfirmLabels {
            affirmative,
            negative,
        };
        self
    }
}

// ============================================================================
// ACCESSORS
// ============================================================================

impl Field {
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn confirm_labels(&self) -> ConfirmLabels {
        self.labels
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Highlighted option row for a Select (the chosen one, or the first).
    pub fn cursor(&self) -> usize {
        match self.value {
            FieldValue::Select(chosen) => chosen.unwrap_or(0),
            _ => 0,
        }
    }

    /// The value as it feeds the commit draft: option value, text, or yes/no.
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Select(chosen) => chosen
                .and_then(|i| self.constraints.options.get(i))
                .map_or("", |option| option.value),
            FieldValue::Text(s) | FieldValue::MultilineText(s) => s,
            FieldValue::Confirm(true) => "yes",
            FieldValue::Confirm(false) => "no",
        }
    }

    /// True when the field holds nothing worth submitting.
    ///
    /// An unanswered or declined Confirm counts as empty.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Select(chosen) => chosen.is_none(),
            FieldValue::Text(s) | FieldValue::MultilineText(s) => s.trim().is_empty(),
            FieldValue::Confirm(answer) => !answer,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none() && (!self.constraints.required || !self.is_empty())
    }
}

// ============================================================================
// VALUE UPDATES
// ============================================================================

impl Field {
    /// Parse `raw` according to the field's kind, store it, and validate.
    ///
    /// The error (if any) is stored on the field as well as returned.
    /// A raw value that cannot be parsed at all leaves the old value in place.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        let parsed = match self.kind() {
            FieldKind::Select => {
                let wanted = raw.trim();
                match self
                    .constraints
                    .options
                    .iter()
                    .position(|o| o.value == wanted)
                {
                    Some(i) => FieldValue::Select(Some(i)),
                    None => {
                        return self.reject(ValidationError::NotAnOption {
                            value: raw.to_string(),
                        });
                    }
                }
            }
            FieldKind::Text => {
                FieldValue::Text(raw.chars().filter(|c| *c != '\n' && *c != '\r').collect())
            }
            FieldKind::MultilineText => {
                let limit = self.constraints.max_length.unwrap_or(usize::MAX);
                FieldValue::MultilineText(raw.chars().take(limit).collect())
            }
            FieldKind::Confirm => match parse_answer(raw) {
                Some(answer) => FieldValue::Confirm(answer),
                None => {
                    return self.reject(ValidationError::NotAnAnswer {
                        value: raw.to_string(),
                    });
                }
            },
        };
        self.value = parsed;
        self.validate()
    }

    fn reject(&mut self, error: ValidationError) -> Result<(), ValidationError> {
        self.error = Some(error.clone());
        Err(error)
    }

    /// Check the current value against the constraints, storing the outcome.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        match self.check() {
            Ok(()) => {
                self.error = None;
                Ok(())
            }
            Err(e) => self.reject(e),
        }
    }

    /// Pure constraint check; does not touch the stored error.
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.constraints.required && self.is_empty() {
            return Err(match self.value {
                FieldValue::Confirm(_) if self.constraints.must_confirm => {
                    ValidationError::NotConfirmed
                }
                _ => ValidationError::Required,
            });
        }
        match &self.value {
            FieldValue::Select(Some(i)) if *i >= self.constraints.options.len() => {
                Err(ValidationError::NotAnOption {
                    value: i.to_string(),
                })
            }
            FieldValue::Text(s) | FieldValue::MultilineText(s) => match self.constraints.max_length {
                Some(max) if s.chars().count() > max => Err(ValidationError::TooLong { max }),
                _ => Ok(()),
            },
            FieldValue::Confirm(false) if self.constraints.must_confirm => {
                Err(ValidationError::NotConfirmed)
            }
            _ => Ok(()),
        }
    }

    /// Finalize pending input and validate. Returns whether the field passed.
    ///
    /// A Select with nothing chosen takes its highlighted option.
    pub fn submit(&mut self) -> bool {
        if let FieldValue::Select(None) = self.value {
            if !self.constraints.options.is_empty() {
                self.value = FieldValue::Select(Some(0));
            }
        }
        self.validate().is_ok()
    }
}

// ============================================================================
// EDITING
// ============================================================================

impl Field {
    /// Apply one input event in place. Returns whether anything changed.
    pub fn handle(&mut self, input: Input) -> bool {
        let max = self.constraints.max_length;
        let changed = match &mut self.value {
            FieldValue::Select(chosen) => {
                let len = self.constraints.options.len();
                let cursor = chosen.unwrap_or(0);
                let next = match input {
                    Input::Up | Input::Left | Input::Char('k') => Some(cursor.saturating_sub(1)),
                    Input::Down | Input::Right | Input::Char('j') => {
                        Some((cursor + 1).min(len.saturating_sub(1)))
                    }
                    _ => None,
                };
                match next {
                    Some(i) if len > 0 && *chosen != Some(i) => {
                        *chosen = Some(i);
                        true
                    }
                    _ => false,
                }
            }
            FieldValue::Text(s) => match input {
                Input::Char(c) if !c.is_control() && below_limit(s, max) => {
                    s.push(c);
                    true
                }
                Input::Backspace => s.pop().is_some(),
                _ => false,
            },
            FieldValue::MultilineText(s) => match input {
                Input::Char(c) if !c.is_control() && below_limit(s, max) => {
                    s.push(c);
                    true
                }
                Input::Newline if below_limit(s, max) => {
                    s.push('\n');
                    true
                }
                Input::Backspace => s.pop().is_some(),
                _ => false,
            },
            FieldValue::Confirm(answer) => {
                let next = match input {
                    Input::Left | Input::Right | Input::Up | Input::Down => !*answer,
                    Input::Char('h') | Input::Char('l') => !*answer,
                    Input::Char('y') | Input::Char('Y') => true,
                    Input::Char('n') | Input::Char('N') => false,
                    _ => *answer,
                };
                let changed = next != *answer;
                *answer = next;
                changed
            }
        };

        // An error on screen goes away as soon as the value is fixed.
        if changed && self.error.is_some() {
            let _ = self.validate();
        }
        changed
    }
}

fn below_limit(s: &str, max: Option<usize>) -> bool {
    max.is_none_or(|max| s.chars().count() < max)
}

fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[SelectOption] = &[
        SelectOption::new("Feature", "feat"),
        SelectOption::new("Fixbug", "fix"),
        SelectOption::new("Documentation", "docs"),
    ];

    fn type_text(field: &mut Field, text: &str) {
        for c in text.chars() {
            field.handle(Input::Char(c));
        }
    }

    // --- set_value / is_valid ---

    #[test]
    fn required_text_rejects_empty() {
        let mut field = Field::text(FieldId::Title, "Title").required();
        assert_eq!(field.set_value("   "), Err(ValidationError::Required));
        assert!(!field.is_valid());
        assert_eq!(field.error(), Some(&ValidationError::Required));
    }

    #[test]
    fn optional_text_accepts_empty() {
        let mut field = Field::text(FieldId::Scope, "Scope");
        assert_eq!(field.set_value(""), Ok(()));
        assert!(field.is_valid());
    }

    #[test]
    fn text_over_max_length_is_invalid() {
        let mut field = Field::text(FieldId::Title, "Title").max_length(5);
        assert_eq!(
            field.set_value("too long"),
            Err(ValidationError::TooLong { max: 5 })
        );
        assert!(!field.is_valid());

        assert_eq!(field.set_value("short"), Ok(()));
        assert!(field.is_valid());
    }

    #[test]
    fn text_strips_line_breaks() {
        let mut field = Field::text(FieldId::Title, "Title");
        field.set_value("add\nretries").unwrap();
        assert_eq!(field.as_text(), "addretries");
    }

    #[test]
    fn multiline_truncates_to_char_limit_and_stays_valid() {
        let mut field = Field::multiline(FieldId::Description, "Description", 10);
        let long = "x".repeat(25);
        assert_eq!(field.set_value(&long), Ok(()));
        assert_eq!(field.as_text().chars().count(), 10);
        assert!(field.is_valid());
    }

    #[test]
    fn multiline_truncation_counts_characters_not_bytes() {
        let mut field = Field::multiline(FieldId::Description, "Description", 3);
        field.set_value("héllo").unwrap();
        assert_eq!(field.as_text(), "hél");
    }

    #[test]
    fn select_accepts_declared_option() {
        let mut field = Field::select(FieldId::CommitType, "Type", OPTIONS).required();
        assert_eq!(field.set_value("fix"), Ok(()));
        assert_eq!(field.as_text(), "fix");
        assert!(field.is_valid());
    }

    #[test]
    fn select_rejects_undeclared_option_and_keeps_value() {
        let mut field = Field::select(FieldId::CommitType, "Type", OPTIONS);
        field.set_value("docs").unwrap();
        assert_eq!(
            field.set_value("wip"),
            Err(ValidationError::NotAnOption {
                value: "wip".to_string()
            })
        );
        assert_eq!(field.as_text(), "docs");
        assert!(!field.is_valid());
    }

    #[test]
    fn required_select_with_nothing_chosen_is_invalid() {
        let field = Field::select(FieldId::CommitType, "Type", OPTIONS).required();
        assert!(!field.is_valid());
        assert_eq!(field.check(), Err(ValidationError::Required));
    }

    #[test]
    fn confirm_must_be_true_when_required() {
        let mut field = Field::confirm(FieldId::Done, "All done?").must_confirm();
        assert_eq!(field.set_value("no"), Err(ValidationError::NotConfirmed));
        assert!(!field.is_valid());

        assert_eq!(field.set_value("yes"), Ok(()));
        assert!(field.is_valid());
        assert!(field.error().is_none());
    }

    #[test]
    fn confirm_rejects_unparseable_answer() {
        let mut field = Field::confirm(FieldId::Done, "All done?");
        assert!(matches!(
            field.set_value("maybe"),
            Err(ValidationError::NotAnAnswer { .. })
        ));
    }

    #[test]
    fn optional_confirm_accepts_no() {
        let mut field = Field::confirm(FieldId::Done, "Sure?");
        assert_eq!(field.set_value("false"), Ok(()));
        assert!(field.is_valid());
    }

    #[test]
    fn successful_validation_clears_previous_error() {
        let mut field = Field::text(FieldId::Scope, "Scope").required();
        let _ = field.set_value("");
        assert!(field.error().is_some());
        field.set_value("api").unwrap();
        assert!(field.error().is_none());
    }

    // --- editing ---

    #[test]
    fn typing_and_backspace_edit_text() {
        let mut field = Field::text(FieldId::Scope, "Scope");
        type_text(&mut field, "apix");
        assert!(field.handle(Input::Backspace));
        assert_eq!(field.as_text(), "api");
        assert!(!field.handle(Input::Newline));
    }

    #[test]
    fn text_refuses_input_past_max_length() {
        let mut field = Field::text(FieldId::WorkItemId, "Id").max_length(4);
        type_text(&mut field, "123456");
        assert_eq!(field.as_text(), "1234");
        assert!(field.is_valid());
    }

    #[test]
    fn multiline_accepts_newlines_up_to_limit() {
        let mut field = Field::multiline(FieldId::Description, "Description", 4);
        type_text(&mut field, "ab");
        field.handle(Input::Newline);
        type_text(&mut field, "cdef");
        assert_eq!(field.as_text(), "ab\nc");
        assert!(field.is_valid());
    }

    #[test]
    fn select_moves_cursor_within_bounds() {
        let mut field = Field::select(FieldId::CommitType, "Type", OPTIONS);
        assert_eq!(field.as_text(), "");

        assert!(field.handle(Input::Down));
        assert_eq!(field.as_text(), "fix");
        field.handle(Input::Down);
        assert!(!field.handle(Input::Down));
        assert_eq!(field.as_text(), "docs");

        field.handle(Input::Char('k'));
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn select_up_from_nothing_picks_first() {
        let mut field = Field::select(FieldId::CommitType, "Type", OPTIONS);
        assert!(field.handle(Input::Up));
        assert_eq!(field.as_text(), "feat");
    }

    #[test]
    fn submit_picks_highlighted_option() {
        let mut field = Field::select(FieldId::CommitType, "Type", OPTIONS).required();
        assert!(field.submit());
        assert_eq!(field.as_text(), "feat");
    }

    #[test]
    fn confirm_toggles_and_answers() {
        let mut field = Field::confirm(FieldId::Done, "All done?");
        assert!(field.handle(Input::Left));
        assert_eq!(field.value(), &FieldValue::Confirm(true));
        assert!(field.handle(Input::Char('n')));
        assert!(!field.handle(Input::Char('n')));
        assert!(field.handle(Input::Char('y')));
        assert_eq!(field.value(), &FieldValue::Confirm(true));
    }

    #[test]
    fn editing_clears_error_once_fixed() {
        let mut field = Field::text(FieldId::Title, "Title").required();
        assert!(!field.submit());
        field.handle(Input::Char('x'));
        assert!(field.error().is_none());
        assert!(field.is_valid());
    }

    #[test]
    fn editing_without_prior_error_does_not_validate() {
        let mut field = Field::text(FieldId::Title, "Title").required();
        field.handle(Input::Char('x'));
        field.handle(Input::Backspace);
        assert!(field.error().is_none());
        assert!(!field.is_valid());
    }

    #[test]
    fn value_kind_matches_constructor() {
        assert_eq!(Field::text(FieldId::Scope, "").kind(), FieldKind::Text);
        assert_eq!(
            Field::multiline(FieldId::Description, "", 1).kind(),
            FieldKind::MultilineText
        );
        assert_eq!(
            Field::select(FieldId::CommitType, "", OPTIONS).kind(),
            FieldKind::Select
        );
        assert_eq!(Field::confirm(FieldId::Done, "").kind(), FieldKind::Confirm);
    }
}
