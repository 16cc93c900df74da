use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-12 text-gray-600",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-purple-600 mb-4" }
            p { "{message}" }
        }
    }
}
