//! Form controller: ordered steps, navigation, and the fixed commit schema.
//!
//! The form advances step by step. A step is left forwards only once it is
//! complete; going back keeps every value already entered. Once the final
//! confirmation passes, the form is `Completed` and ignores further events.

use tracing::debug;

use crate::draft::CommitDraft;
use crate::field::{Field, FieldId, FieldKind, Input, SelectOption};
use crate::step::{Direction, FocusMove, Step};

// ============================================================================
// SCHEMA
// ============================================================================

/// Commit types offered by the first step.
pub const COMMIT_TYPES: &[SelectOption] = &[
    SelectOption::new("Feature", "feat"),
    SelectOption::new("Fixbug", "fix"),
    SelectOption::new("Documentation", "docs"),
    SelectOption::new("Style", "style"),
    SelectOption::new("Refactor", "refactor"),
    SelectOption::new("Performance", "perf"),
    SelectOption::new("Tests", "test"),
    SelectOption::new("Maintenance", "chore"),
];

/// Character limit of the description field.
pub const DESCRIPTION_CHAR_LIMIT: usize = 400;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Active,
    Completed,
}

/// Events the form understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Routed to the focused field.
    Input(Input),
    /// Submit the focused field and move on.
    Next,
    /// Move focus back, crossing into the previous step if needed.
    Prev,
}

/// What a dispatched event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing changed; no redraw needed.
    Ignored,
    /// Values, focus, errors or the step changed.
    Updated,
    /// The final confirmation passed.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    steps: Vec<Step>,
    current: usize,
    state: FormState,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Form {
    pub fn new(steps: Vec<Step>) -> Self {
        Form {
            steps,
            current: 0,
            state: FormState::Active,
        }
    }

    /// The commit message form: type first, then the details and a final
    /// "All done?" confirmation.
    pub fn commit() -> Self {
        Form::new(vec![
            Step::new(vec![
                Field::select(FieldId::CommitType, "Choose your type of commits", COMMIT_TYPES)
                    .required(),
            ]),
            Step::new(vec![
                Field::text(FieldId::Scope, "What's your scope?").required(),
                Field::text(FieldId::WorkItemId, "What's your Work Item ID?").required(),
                Field::text(FieldId::Title, "What's your commit title?").required(),
                Field::multiline(
                    FieldId::Description,
                    "What's your commit description? (Optional)",
                    DESCRIPTION_CHAR_LIMIT,
                ),
                Field::confirm(FieldId::Done, "All done?")
                    .must_confirm()
                    .labels("Yes", "Wait, no"),
            ]),
        ])
    }
}

impl Default for Form {
    fn default() -> Self {
        Form::commit()
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl Form {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// In `0..=steps.len()`; equals `steps.len()` once completed.
    pub fn current_step_index(&self) -> usize {
        self.current
    }

    /// The step being edited, or `None` once completed.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == FormState::Completed
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.current_step().and_then(Step::focused)
    }

    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.focused_field().map(Field::kind)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.steps.iter().find_map(|step| step.field(id))
    }

    /// Project the current values into a draft. Pure; callable at any time.
    pub fn current_draft(&self) -> CommitDraft {
        let text = |id| self.field(id).map_or_else(String::new, |f| f.as_text().to_string());
        CommitDraft {
            commit_type: text(FieldId::CommitType),
            scope: text(FieldId::Scope),
            work_item_id: text(FieldId::WorkItemId),
            title: text(FieldId::Title),
            description: text(FieldId::Description),
        }
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

impl Form {
    pub fn dispatch(&mut self, event: &FormEvent) -> Dispatch {
        if self.is_completed() {
            return Dispatch::Ignored;
        }
        match *event {
            FormEvent::Input(input) => self.dispatch_input(input),
            FormEvent::Next => self.next(),
            FormEvent::Prev => self.prev(),
        }
    }

    fn dispatch_input(&mut self, input: Input) -> Dispatch {
        let changed = self
            .steps
            .get_mut(self.current)
            .and_then(Step::focused_mut)
            .is_some_and(|field| field.handle(input));
        if changed {
            Dispatch::Updated
        } else {
            Dispatch::Ignored
        }
    }

    fn next(&mut self) -> Dispatch {
        let last_step = self.current + 1 == self.steps.len();
        let Some(step) = self.steps.get_mut(self.current) else {
            return Dispatch::Ignored;
        };

        let field_ok = step.focused_mut().is_none_or(|field| field.submit());
        if !field_ok {
            return Dispatch::Updated;
        }

        match step.advance_focus(Direction::Forward) {
            FocusMove::Moved => Dispatch::Updated,
            FocusMove::BeforeFirst => Dispatch::Ignored,
            FocusMove::AfterLast => {
                if !step.validate() || !step.is_complete() {
                    step.focus_first_invalid();
                    return Dispatch::Updated;
                }
                if last_step {
                    self.current = self.steps.len();
                    self.state = FormState::Completed;
                    debug!("form completed");
                    Dispatch::Completed
                } else {
                    self.current += 1;
                    debug!(step = self.current, "advanced to next step");
                    if let Some(next) = self.steps.get_mut(self.current) {
                        next.focus_first();
                    }
                    Dispatch::Updated
                }
            }
        }
    }

    fn prev(&mut self) -> Dispatch {
        let Some(step) = self.steps.get_mut(self.current) else {
            return Dispatch::Ignored;
        };
        match step.advance_focus(Direction::Backward) {
            FocusMove::Moved => Dispatch::Updated,
            FocusMove::AfterLast => Dispatch::Ignored,
            FocusMove::BeforeFirst if self.current == 0 => Dispatch::Ignored,
            FocusMove::BeforeFirst => {
                self.current -= 1;
                debug!(step = self.current, "went back to previous step");
                if let Some(previous) = self.steps.get_mut(self.current) {
                    previous.focus_last();
                }
                Dispatch::Updated
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldValue, ValidationError};
    use pretty_assertions::assert_eq;

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.dispatch(&FormEvent::Input(Input::Char(c)));
        }
    }

    /// Drive the form through everything except the final confirmation.
    fn fill_details(form: &mut Form) {
        form.dispatch(&FormEvent::Next); // feat
        type_text(form, "api");
        form.dispatch(&FormEvent::Next);
        type_text(form, "1234");
        form.dispatch(&FormEvent::Next);
        type_text(form, "add retries");
        form.dispatch(&FormEvent::Next);
        form.dispatch(&FormEvent::Next); // empty description
    }

    #[test]
    fn starts_active_on_first_step() {
        let form = Form::commit();
        assert_eq!(form.state(), FormState::Active);
        assert_eq!(form.current_step_index(), 0);
        assert_eq!(form.focused_kind(), Some(FieldKind::Select));
        assert_eq!(form.steps().len(), 2);
    }

    #[test]
    fn schema_offers_all_commit_types() {
        let values: Vec<_> = COMMIT_TYPES.iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec!["feat", "fix", "docs", "style", "refactor", "perf", "test", "chore"]
        );
    }

    #[test]
    fn full_walkthrough_produces_draft() {
        let mut form = Form::commit();
        fill_details(&mut form);
        assert_eq!(form.focused_kind(), Some(FieldKind::Confirm));

        form.dispatch(&FormEvent::Input(Input::Char('y')));
        assert_eq!(form.dispatch(&FormEvent::Next), Dispatch::Completed);

        assert!(form.is_completed());
        assert_eq!(form.current_step_index(), form.steps().len());
        assert_eq!(
            form.current_draft().to_string(),
            "feat(api)[1234]: add retries\n\n"
        );
    }

    #[test]
    fn unconfirmed_final_field_blocks_completion() {
        let mut form = Form::commit();
        fill_details(&mut form);

        assert_eq!(form.dispatch(&FormEvent::Next), Dispatch::Updated);
        assert_eq!(form.state(), FormState::Active);
        assert_eq!(form.current_step_index(), 1);
        assert_eq!(
            form.field(FieldId::Done).and_then(Field::error),
            Some(&ValidationError::NotConfirmed)
        );
        assert!(!form.current_step().unwrap().is_complete());
    }

    #[test]
    fn empty_required_field_keeps_focus() {
        let mut form = Form::commit();
        form.dispatch(&FormEvent::Next);
        assert_eq!(form.dispatch(&FormEvent::Next), Dispatch::Updated);
        assert_eq!(form.focused_field().map(Field::id), Some(FieldId::Scope));
        assert_eq!(
            form.field(FieldId::Scope).and_then(Field::error),
            Some(&ValidationError::Required)
        );
    }

    #[test]
    fn select_navigation_updates_live_draft() {
        let mut form = Form::commit();
        assert_eq!(form.current_draft().commit_type, "");
        form.dispatch(&FormEvent::Input(Input::Down));
        form.dispatch(&FormEvent::Input(Input::Down));
        assert_eq!(form.current_draft().commit_type, "docs");
        form.dispatch(&FormEvent::Next);
        assert_eq!(form.current_step_index(), 1);
        assert_eq!(form.current_draft().commit_type, "docs");
    }

    #[test]
    fn backward_navigation_keeps_values() {
        let mut form = Form::commit();
        form.dispatch(&FormEvent::Input(Input::Down));
        form.dispatch(&FormEvent::Next);
        type_text(&mut form, "api");

        assert_eq!(form.dispatch(&FormEvent::Prev), Dispatch::Updated);
        assert_eq!(form.current_step_index(), 0);
        assert_eq!(form.field(FieldId::CommitType).unwrap().value(), &FieldValue::Select(Some(1)));
        assert_eq!(form.current_draft().scope, "api");

        form.dispatch(&FormEvent::Next);
        assert_eq!(form.current_step_index(), 1);
        assert_eq!(form.focused_field().map(Field::id), Some(FieldId::Scope));
        assert_eq!(form.current_draft().scope, "api");
    }

    #[test]
    fn prev_on_first_field_is_ignored() {
        let mut form = Form::commit();
        assert_eq!(form.dispatch(&FormEvent::Prev), Dispatch::Ignored);
        assert_eq!(form.current_step_index(), 0);
    }

    #[test]
    fn prev_into_previous_step_focuses_its_last_field() {
        let mut form = Form::commit();
        form.dispatch(&FormEvent::Next);
        form.dispatch(&FormEvent::Prev);
        assert_eq!(form.focused_field().map(Field::id), Some(FieldId::CommitType));
    }

    #[test]
    fn index_is_monotonic_without_back_and_bounded() {
        let mut form = Form::commit();
        let events = [
            FormEvent::Next,
            FormEvent::Input(Input::Char('a')),
            FormEvent::Next,
            FormEvent::Next,
            FormEvent::Input(Input::Char('1')),
            FormEvent::Next,
            FormEvent::Input(Input::Char('t')),
            FormEvent::Next,
            FormEvent::Next,
            FormEvent::Next,
            FormEvent::Input(Input::Right),
            FormEvent::Next,
            FormEvent::Next,
            FormEvent::Next,
        ];
        let mut last = form.current_step_index();
        for event in &events {
            form.dispatch(event);
            assert!(form.current_step_index() >= last);
            assert!(form.current_step_index() <= form.steps().len());
            last = form.current_step_index();
        }
        assert!(form.is_completed());
    }

    #[test]
    fn completed_form_ignores_events() {
        let mut form = Form::commit();
        fill_details(&mut form);
        form.dispatch(&FormEvent::Input(Input::Char('y')));
        form.dispatch(&FormEvent::Next);
        let before = form.clone();

        assert_eq!(form.dispatch(&FormEvent::Prev), Dispatch::Ignored);
        assert_eq!(
            form.dispatch(&FormEvent::Input(Input::Char('x'))),
            Dispatch::Ignored
        );
        assert_eq!(form, before);
    }

    #[test]
    fn current_draft_is_idempotent() {
        let mut form = Form::commit();
        fill_details(&mut form);
        let before = form.clone();
        let first = form.current_draft();
        let second = form.current_draft();
        assert_eq!(first, second);
        assert_eq!(form, before);
    }

    #[test]
    fn description_is_truncated_to_limit() {
        let mut form = Form::commit();
        fill_details(&mut form);
        form.dispatch(&FormEvent::Prev);
        assert_eq!(form.focused_field().map(Field::id), Some(FieldId::Description));

        type_text(&mut form, &"d".repeat(DESCRIPTION_CHAR_LIMIT + 50));
        let description = form.field(FieldId::Description).unwrap();
        assert_eq!(description.as_text().chars().count(), DESCRIPTION_CHAR_LIMIT);
        assert!(description.is_valid());
    }

    #[test]
    fn newline_goes_into_description() {
        let mut form = Form::commit();
        fill_details(&mut form);
        form.dispatch(&FormEvent::Prev);
        type_text(&mut form, "one");
        form.dispatch(&FormEvent::Input(Input::Newline));
        type_text(&mut form, "two");
        assert_eq!(form.current_draft().description, "one\ntwo");
    }

    #[test]
    fn unhandled_input_is_ignored() {
        let mut form = Form::commit();
        assert_eq!(
            form.dispatch(&FormEvent::Input(Input::Backspace)),
            Dispatch::Ignored
        );
    }
}
