//! Async flows the views run against an [`IssueApi`].
//!
//! None of these hold view state across an `.await`; callers apply the returned values to their
//! own state once the flow completes.

use crate::api::{ApiError, IssueApi};
use crate::detail::{self, DetailState};
use crate::filter::IssueFilter;
use crate::issue::{Issue, IssueDraft};

#[tracing::instrument(skip(api))]
pub async fn fetch_issues<A: IssueApi>(
    api: &A,
    filter: &IssueFilter,
) -> Result<Vec<Issue>, ApiError> {
    let issues = api.list_issues(filter).await?;
    tracing::debug!("Fetched {} issues", issues.len());
    Ok(issues)
}

/// Updates `editing` when present, otherwise creates a new issue. The caller reloads the list
/// only after this succeeds.
#[tracing::instrument(
    skip(api, editing),
    fields(editing = editing.map(|issue| issue.id.as_str()))
)]
pub async fn save_issue<A: IssueApi>(
    api: &A,
    editing: Option<&Issue>,
    draft: &IssueDraft,
) -> Result<Issue, ApiError> {
    let saved = match editing {
        Some(existing) => api.update_issue(&existing.id, draft).await?,
        None => api.create_issue(draft).await?,
    };
    tracing::info!(id = %saved.id, "Saved issue");
    Ok(saved)
}

/// Loads the issue for a route parameter. A missing id never reaches the API.
#[tracing::instrument(skip(api))]
pub async fn load_detail<A: IssueApi>(api: &A, id: Option<&str>) -> DetailState {
    let Some(id) = detail::route_id(id) else {
        return DetailState::for_route(None);
    };
    match api.get_issue(id).await {
        Ok(issue) => DetailState::Loaded(issue),
        Err(e) => {
            tracing::error!("Failed to load issue {id}: {e}");
            DetailState::Error(detail::LOAD_FAILED_MESSAGE.to_string())
        }
    }
}
