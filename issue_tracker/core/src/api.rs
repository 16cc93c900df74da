//! Contract between the views and the remote issue API.
//!
//! Views only ever talk to the server through [`IssueApi`], which keeps them independent of the
//! HTTP client and lets the flows in [`crate::workflow`] be tested against a mock.

use crate::filter::IssueFilter;
use crate::issue::{Issue, IssueDraft};
use mockall::automock;
use thiserror::Error;

/// Errors reported by an [`IssueApi`] implementation. Nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered 404.
    #[error("Issue not found")]
    NotFound,
    /// The server answered with another non-success status.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },
    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

#[automock]
#[allow(async_fn_in_trait)]
pub trait IssueApi {
    /// `GET /issues`, sending only the constraints of `filter` that are set.
    async fn list_issues(&self, filter: &IssueFilter) -> Result<Vec<Issue>, ApiError>;
    /// `GET /issues/{id}`
    async fn get_issue(&self, id: &str) -> Result<Issue, ApiError>;
    /// `POST /issues`
    async fn create_issue(&self, draft: &IssueDraft) -> Result<Issue, ApiError>;
    /// `PUT /issues/{id}`
    async fn update_issue<'api, 'id, 'draft>(
        &'api self,
        id: &'id str,
        draft: &'draft IssueDraft,
    ) -> Result<Issue, ApiError>;
    /// `GET /health`
    async fn health(&self) -> Result<(), ApiError>;
}
