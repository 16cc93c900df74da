use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "text-center py-12",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Page not found" }
            p { class: "text-gray-600 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::IssueList {},
                class: "bg-purple-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-purple-700 transition-colors",
                "Back to issues"
            }
        }
    }
}
