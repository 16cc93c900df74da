mod api;
mod components;
mod config;
mod views;

use crate::api::HttpIssueApi;
use crate::components::Header;
use crate::config::ClientConfig;
use crate::views::{IssueDetail, IssueList, NotFound};
use dioxus::prelude::*;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

static CSS: Asset = asset!("/assets/main.css");

#[component]
fn App() -> Element {
    let config = use_hook(ClientConfig::load_or_default);
    use_context_provider(|| config.clone());
    use_context_provider(|| {
        tracing::info!("Using issue API at {}", config.base_url());
        Signal::new(HttpIssueApi::new(config.base_url()))
    });

    rsx! {
        document::Stylesheet { href: CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::IssueList {})]
        #[route("/issues")]
        IssueList {},
        #[route("/issues/:id")]
        IssueDetail { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Page chrome shared by every route.
#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "min-h-screen bg-gray-50 py-8",
            Outlet::<Route> {}
        }
    }
}
