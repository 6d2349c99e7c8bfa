//! The commit draft: a read-only projection of the form's current values.

use std::fmt;

/// Commit message parts, each mirroring one field.
///
/// Valid at any time, including mid-entry; fields that have not been filled
/// are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitDraft {
    pub commit_type: String,
    pub scope: String,
    pub work_item_id: String,
    pub title: String,
    pub description: String,
}

impl CommitDraft {
    /// Compact header for the live preview: empty scope and work-item
    /// brackets are left out.
    ///
    /// `feat(api)[1234]: add retries`, or `feat: add retries` with no scope
    /// or id yet.
    pub fn summary_line(&self) -> String {
        let mut line = self.commit_type.clone();
        if !self.scope.is_empty() {
            line.push_str(&format!("({})", self.scope));
        }
        if !self.work_item_id.is_empty() {
            line.push_str(&format!("[{}]", self.work_item_id));
        }
        line.push_str(": ");
        line.push_str(&self.title);
        line
    }

    pub fn is_empty(&self) -> bool {
        *self == CommitDraft::default()
    }
}

/// The final message: `<type>(<scope>)[<id>]: <title>\n\n<description>`.
impl fmt::Display for CommitDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})[{}]: {}\n\n{}",
            self.commit_type, self.scope, self.work_item_id, self.title, self.description
        )
    }
}
