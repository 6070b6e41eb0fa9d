use dioxus::prelude::*;
use crate::config::AppConfig;
use crate::Route;

#[component]
pub fn AppShell() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        crate::components::layout::InteractionArea {
            crate::components::navigation::NavBar {}
            div { class: "app-body",
                if config.show_side_panel {
                    crate::components::navigation::SidePanel {}
                }
                main {
                    Outlet::<Route> {}
                }
            }
        }
    }
}
