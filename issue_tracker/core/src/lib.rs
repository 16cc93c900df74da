//! Core domain models and view logic for the issue tracker client.
pub mod api;
pub mod debounce;
pub mod detail;
pub mod filter;
pub mod form;
pub mod issue;
pub mod list;
pub mod workflow;

pub use api::{ApiError, IssueApi};
pub use debounce::{Debouncer, Ticket};
pub use detail::DetailState;
pub use filter::IssueFilter;
pub use form::{FormError, FormMode, IssueForm};
pub use issue::{Issue, IssueDraft, IssuePriority, IssueStatus};
pub use list::{FormModal, IssueListState, RequestId};
