use dioxus::prelude::*;

// Module Declarations
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod interaction;
pub mod pages;
pub mod types;

use components::layout::AppShell;
use config::AppConfig;
use pages::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css";

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::load);
    use_hook(|| tracing::info!("{} frontend mounted", config.brand_name));
    hooks::use_interaction_bus();

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
