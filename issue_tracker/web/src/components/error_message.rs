use dioxus::prelude::*;

/// Red callout for failed loads and saves.
#[component]
pub fn ErrorMessage(message: String, #[props(default)] compact: bool) -> Element {
    let padding = if compact { "p-3 text-sm" } else { "p-6 text-center" };
    rsx! {
        div { class: "bg-red-50 border border-red-200 rounded-lg {padding}",
            p { class: "text-red-600", "{message}" }
        }
    }
}
