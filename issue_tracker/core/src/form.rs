//! State machine behind the create/edit issue form.
//!
//! Every field starts `pristine` and becomes `touched` when the user leaves it or when a submit
//! is attempted. Validity is derived from the current values. Validation messages are only
//! surfaced for touched fields, so a fresh form shows no errors.

use crate::issue::{Issue, IssueDraft, IssuePriority, IssueStatus};
use thiserror::Error;

/// Whether the form creates a new issue or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    Status,
    Priority,
    Assignee,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Title,
        FieldName::Status,
        FieldName::Priority,
        FieldName::Assignee,
    ];
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Form has invalid fields: {0:?}")]
    Invalid(Vec<FieldName>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Field<T> {
    value: T,
    touched: bool,
}

impl<T> Field<T> {
    fn new(value: T) -> Self {
        Field {
            value,
            touched: false,
        }
    }
}

const TITLE_REQUIRED: &str = "Title is required.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueForm {
    mode: FormMode,
    title: Field<String>,
    status: Field<IssueStatus>,
    priority: Field<IssuePriority>,
    assignee: Field<String>,
}

impl Default for IssueForm {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IssueForm {
    /// Creates a form pre-filled from `issue` in edit mode, or with defaults in create mode.
    pub fn new(issue: Option<&Issue>) -> Self {
        let (mode, draft) = match issue {
            Some(issue) => (FormMode::Edit, IssueDraft::from(issue)),
            None => (FormMode::Create, IssueDraft::default()),
        };
        IssueForm {
            mode,
            title: Field::new(draft.title),
            status: Field::new(draft.status),
            priority: Field::new(draft.priority),
            assignee: Field::new(draft.assignee),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode == FormMode::Edit
    }

    pub fn title(&self) -> &str {
        &self.title.value
    }

    pub fn status(&self) -> IssueStatus {
        self.status.value
    }

    pub fn priority(&self) -> IssuePriority {
        self.priority.value
    }

    pub fn assignee(&self) -> &str {
        &self.assignee.value
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title.value = title.into();
    }

    pub fn set_status(&mut self, status: IssueStatus) {
        self.status.value = status;
    }

    pub fn set_priority(&mut self, priority: IssuePriority) {
        self.priority.value = priority;
    }

    pub fn set_assignee(&mut self, assignee: impl Into<String>) {
        self.assignee.value = assignee.into();
    }

    /// Marks a field as interacted with, typically when it loses focus.
    pub fn touch(&mut self, field: FieldName) {
        match field {
            FieldName::Title => self.title.touched = true,
            FieldName::Status => self.status.touched = true,
            FieldName::Priority => self.priority.touched = true,
            FieldName::Assignee => self.assignee.touched = true,
        }
    }

    pub fn mark_all_touched(&mut self) {
        for field in FieldName::ALL {
            self.touch(field);
        }
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        match field {
            FieldName::Title => self.title.touched,
            FieldName::Status => self.status.touched,
            FieldName::Priority => self.priority.touched,
            FieldName::Assignee => self.assignee.touched,
        }
    }

    /// Validation error for a field, whether or not it has been touched.
    pub fn field_error(&self, field: FieldName) -> Option<&'static str> {
        match field {
            FieldName::Title if self.title.value.trim().is_empty() => Some(TITLE_REQUIRED),
            // Status and priority always hold one of their variants; assignee is optional.
            _ => None,
        }
    }

    /// Validation error to display: only touched fields reveal their errors.
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        if self.is_touched(field) {
            self.field_error(field)
        } else {
            None
        }
    }

    pub fn invalid_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.field_error(*field).is_some())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// Current field values as a draft, without validation.
    pub fn draft(&self) -> IssueDraft {
        IssueDraft {
            title: self.title.value.clone(),
            status: self.status.value,
            priority: self.priority.value,
            assignee: self.assignee.value.clone(),
        }
    }

    /// Attempts a submission.
    ///
    /// A valid form yields the full set of field values. An invalid form marks every field as
    /// touched so its errors become visible, and yields nothing.
    pub fn submit(&mut self) -> Result<IssueDraft, FormError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            self.mark_all_touched();
            return Err(FormError::Invalid(invalid));
        }
        Ok(self.draft())
    }
}
