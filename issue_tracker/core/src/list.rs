//! State owned by the issue list view.

use crate::api::ApiError;
use crate::filter::IssueFilter;
use crate::issue::Issue;

/// Identifies one list fetch. Only the most recently started fetch may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Visibility and target of the create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormModal {
    #[default]
    Hidden,
    Create,
    Edit(Issue),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueListState {
    pub issues: Vec<Issue>,
    pub filter: IssueFilter,
    pub form: FormModal,
    pub load_error: Option<String>,
    pub save_error: Option<String>,
    loading: bool,
    latest_request: u64,
}

impl IssueListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a new fetch as started, superseding any fetch still in flight.
    pub fn begin_fetch(&mut self) -> RequestId {
        self.latest_request += 1;
        self.loading = true;
        RequestId(self.latest_request)
    }

    /// Applies the outcome of a fetch. Returns `false` when the fetch was superseded and its
    /// outcome was dropped.
    pub fn finish_fetch(
        &mut self,
        request: RequestId,
        result: Result<Vec<Issue>, ApiError>,
    ) -> bool {
        if request.0 != self.latest_request {
            tracing::debug!(
                request = request.0,
                latest = self.latest_request,
                "Dropping stale issue list response"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(issues) => {
                self.issues = issues;
                self.load_error = None;
            }
            Err(e) => {
                self.load_error = Some(format!("Failed to load issues: {e}"));
            }
        }
        true
    }

    pub fn open_create(&mut self) {
        self.save_error = None;
        self.form = FormModal::Create;
    }

    pub fn open_edit(&mut self, issue: Issue) {
        self.save_error = None;
        self.form = FormModal::Edit(issue);
    }

    pub fn close_form(&mut self) {
        self.save_error = None;
        self.form = FormModal::Hidden;
    }

    pub fn is_form_visible(&self) -> bool {
        !matches!(self.form, FormModal::Hidden)
    }

    /// The issue being edited, `None` when creating or when the form is closed.
    pub fn editing(&self) -> Option<&Issue> {
        match &self.form {
            FormModal::Edit(issue) => Some(issue),
            _ => None,
        }
    }

    /// Closes the form after a successful save and starts the reload that reflects it.
    pub fn save_succeeded(&mut self) -> RequestId {
        self.close_form();
        self.begin_fetch()
    }

    /// Records a failed save. The form stays open so the user can retry, and any fetch still in
    /// flight remains the latest one.
    pub fn save_failed(&mut self, error: &ApiError) {
        self.save_error = Some(format!("Failed to save the issue: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::fixtures;

    #[test]
    fn successful_fetch_replaces_issues() {
        let mut state = IssueListState::new();

        let request = state.begin_fetch();
        assert!(state.is_loading());
        let applied = state.finish_fetch(request, Ok(vec![fixtures::issue("1", "a")]));

        assert!(applied);
        assert!(!state.is_loading());
        assert_eq!(state.issues.len(), 1);
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn failed_fetch_keeps_previous_issues_and_reports_error() {
        let mut state = IssueListState::new();
        let request = state.begin_fetch();
        state.finish_fetch(request, Ok(vec![fixtures::issue("1", "a")]));

        let request = state.begin_fetch();
        state.finish_fetch(request, Err(ApiError::Transport("offline".to_string())));

        assert_eq!(state.issues.len(), 1);
        assert_eq!(
            state.load_error.as_deref(),
            Some("Failed to load issues: Request failed: offline")
        );
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_one() {
        let mut state = IssueListState::new();

        let slow = state.begin_fetch();
        let fast = state.begin_fetch();
        assert!(state.finish_fetch(fast, Ok(vec![fixtures::issue("2", "fresh")])));
        let applied = state.finish_fetch(slow, Ok(vec![fixtures::issue("1", "stale")]));

        assert!(!applied);
        assert_eq!(state.issues, vec![fixtures::issue("2", "fresh")]);
    }

    #[test]
    fn stale_response_keeps_loading_flag_for_newer_request() {
        let mut state = IssueListState::new();

        let slow = state.begin_fetch();
        let _pending = state.begin_fetch();
        state.finish_fetch(slow, Ok(vec![]));

        assert!(state.is_loading());
    }

    #[test]
    fn failed_save_keeps_in_flight_fetch_current() {
        let mut state = IssueListState::new();
        let initial = state.begin_fetch();
        state.open_create();

        state.save_failed(&ApiError::Transport("offline".to_string()));
        let applied = state.finish_fetch(initial, Ok(vec![fixtures::issue("1", "a")]));

        assert!(applied);
        assert!(!state.is_loading());
        assert_eq!(state.issues.len(), 1);
        assert_eq!(state.load_error, None);
        assert!(state.is_form_visible());
    }

    #[test]
    fn successful_save_closes_form_and_supersedes_older_fetch() {
        let mut state = IssueListState::new();
        let initial = state.begin_fetch();
        state.open_create();

        let reload = state.save_succeeded();

        assert!(!state.is_form_visible());
        assert!(state.is_loading());
        assert!(!state.finish_fetch(initial, Ok(vec![fixtures::issue("1", "stale")])));
        assert!(state.finish_fetch(reload, Ok(vec![fixtures::issue("2", "saved")])));
        assert_eq!(state.issues, vec![fixtures::issue("2", "saved")]);
    }

    #[test]
    fn open_create_has_no_edit_target() {
        let mut state = IssueListState::new();

        state.open_create();

        assert!(state.is_form_visible());
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn open_edit_targets_issue_and_close_discards_it() {
        let mut state = IssueListState::new();
        let issue = fixtures::issue("9", "Edit me");

        state.open_edit(issue.clone());
        assert_eq!(state.editing(), Some(&issue));

        state.close_form();
        assert!(!state.is_form_visible());
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn save_failure_leaves_form_open() {
        let mut state = IssueListState::new();
        state.open_create();

        state.save_failed(&ApiError::Status {
            status: 400,
            message: "Title is required".to_string(),
        });

        assert!(state.is_form_visible());
        assert_eq!(
            state.save_error.as_deref(),
            Some("Failed to save the issue: API error (400): Title is required")
        );
    }
}
