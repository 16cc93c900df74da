mod issue_detail;
mod issue_list;
mod not_found;

pub use issue_detail::IssueDetail;
pub use issue_list::IssueList;
pub use not_found::NotFound;
