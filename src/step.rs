//! Step model: an ordered group of fields presented together.

use crate::field::{Field, FieldId};

/// Which way focus moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of moving focus inside a step.
///
/// At a boundary focus stays where it is; the form decides whether to
/// cross into a neighbouring step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Moved,
    BeforeFirst,
    AfterLast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    fields: Vec<Field>,
    focus: usize,
}

impl Step {
    pub fn new(fields: Vec<Field>) -> Self {
        Step { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    pub fn focused_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.focus)
    }

    pub fn focus_first(&mut self) {
        self.focus = 0;
    }

    pub fn focus_last(&mut self) {
        self.focus = self.fields.len().saturating_sub(1);
    }

    pub fn advance_focus(&mut self, direction: Direction) -> FocusMove {
        match direction {
            Direction::Forward if self.focus + 1 < self.fields.len() => {
                self.focus += 1;
                FocusMove::Moved
            }
            Direction::Forward => FocusMove::AfterLast,
            Direction::Backward if self.focus > 0 => {
                self.focus -= 1;
                FocusMove::Moved
            }
            Direction::Backward => FocusMove::BeforeFirst,
        }
    }

    /// Every required field holds a valid value. Optional fields never block.
    pub fn is_complete(&self) -> bool {
        self.fields
            .iter()
            .filter(|f| f.constraints().required)
            .all(Field::is_valid)
    }

    /// Validate every field, storing errors, and return whether all passed.
    pub fn validate(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |ok, field| field.validate().is_ok() && ok)
    }

    /// Move focus to the first field that is not valid, if any.
    pub fn focus_first_invalid(&mut self) {
        if let Some(i) = self.fields.iter().position(|f| !f.is_valid()) {
            self.focus = i;
        }
    }
}
