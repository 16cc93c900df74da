use crate::api::HttpIssueApi;
use crate::Route;
use dioxus::prelude::*;
use issue_tracker_core::IssueApi;

/// Top navigation bar. Also pings the API once so an unreachable server is obvious.
#[component]
pub fn Header() -> Element {
    let api = use_context::<Signal<HttpIssueApi>>();
    let mut reachable = use_signal(|| None::<bool>);

    use_effect(move || {
        spawn(async move {
            let api = api.peek().clone();
            let result = api.health().await;
            if let Err(e) = &result {
                tracing::warn!("API health check failed: {e}");
            }
            reachable.set(Some(result.is_ok()));
        });
    });

    let (dot, label) = match reachable() {
        None => ("bg-gray-400", "Connecting..."),
        Some(true) => ("bg-green-500", "API online"),
        Some(false) => ("bg-red-500", "API unreachable"),
    };

    rsx! {
        header { class: "bg-white shadow",
            div { class: "max-w-6xl mx-auto px-6 py-4 flex justify-between items-center",
                Link { to: Route::IssueList {}, class: "text-2xl font-bold text-purple-700",
                    "Issue Tracker"
                }
                div { class: "flex items-center text-sm text-gray-600",
                    span { class: "inline-block w-2 h-2 rounded-full mr-2 {dot}" }
                    "{label}"
                }
            }
        }
    }
}
