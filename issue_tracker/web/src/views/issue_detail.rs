use crate::api::HttpIssueApi;
use crate::components::{ErrorMessage, LoadingSpinner, PriorityBadge, StatusBadge};
use crate::Route;
use dioxus::prelude::*;
use issue_tracker_core::workflow;
use issue_tracker_core::{DetailState, Issue};

/// Detail page for the issue named in the route.
///
/// Keyed by id so moving between two issues remounts the page with fresh state.
#[component]
pub fn IssueDetail(id: String) -> Element {
    rsx! {
        IssueDetailPage { key: "{id}", id: id.clone() }
    }
}

#[component]
fn IssueDetailPage(id: String) -> Element {
    let api = use_context::<Signal<HttpIssueApi>>();
    let mut detail = use_signal(|| DetailState::for_route(Some(&id)));

    use_effect(move || {
        let id = id.clone();
        spawn(async move {
            if !detail.peek().is_loading() {
                return;
            }
            let api = api.peek().clone();
            detail.set(workflow::load_detail(&api, Some(&id)).await);
        });
    });

    rsx! {
        div { class: "max-w-3xl mx-auto px-6 space-y-4",
            Link { to: Route::IssueList {}, class: "text-purple-700 hover:underline text-sm",
                "← Back to issues"
            }
            {match detail() {
                DetailState::Loading => rsx! {
                    LoadingSpinner { message: "Loading issue...".to_string() }
                },
                DetailState::Error(message) => rsx! { ErrorMessage { message } },
                DetailState::Loaded(issue) => rsx! { IssueDetails { issue } },
            }}
        }
    }
}

#[component]
fn IssueDetails(issue: Issue) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-6 space-y-6",
            div { class: "flex justify-between items-start",
                h1 { class: "text-2xl font-bold", "{issue.title}" }
                div { class: "flex space-x-2",
                    StatusBadge { status: issue.status }
                    PriorityBadge { priority: issue.priority }
                }
            }
            dl { class: "grid grid-cols-2 gap-4 text-sm",
                dt { class: "font-medium text-gray-700", "Assignee" }
                dd { class: "text-gray-900", "{issue.assignee_display()}" }
                dt { class: "font-medium text-gray-700", "Created" }
                dd { class: "text-gray-900", "{issue.created_at_display()}" }
                dt { class: "font-medium text-gray-700", "Last updated" }
                dd { class: "text-gray-900", "{issue.updated_at_display()}" }
                dt { class: "font-medium text-gray-700", "ID" }
                dd { class: "text-gray-500 font-mono", "{issue.id}" }
            }
        }
    }
}
