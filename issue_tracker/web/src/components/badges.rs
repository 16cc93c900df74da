use dioxus::prelude::*;
use issue_tracker_core::{IssuePriority, IssueStatus};

#[component]
pub fn StatusBadge(status: IssueStatus) -> Element {
    let color = match status {
        IssueStatus::Open => "bg-yellow-100 text-yellow-800",
        IssueStatus::InProgress => "bg-blue-100 text-blue-800",
        IssueStatus::Done => "bg-green-100 text-green-800",
    };
    rsx! {
        span { class: "px-2 py-1 rounded-full text-xs font-medium {color}", "{status.label()}" }
    }
}

#[component]
pub fn PriorityBadge(priority: IssuePriority) -> Element {
    let color = match priority {
        IssuePriority::Low => "bg-gray-100 text-gray-800",
        IssuePriority::Medium => "bg-orange-100 text-orange-800",
        IssuePriority::High => "bg-red-100 text-red-800",
    };
    rsx! {
        span { class: "px-2 py-1 rounded-full text-xs font-medium {color}", "{priority}" }
    }
}
