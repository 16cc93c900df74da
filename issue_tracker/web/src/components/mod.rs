mod badges;
mod error_message;
mod header;
mod issue_form;
mod loading_spinner;

pub use badges::{PriorityBadge, StatusBadge};
pub use error_message::ErrorMessage;
pub use header::Header;
pub use issue_form::IssueFormModal;
pub use loading_spinner::LoadingSpinner;
