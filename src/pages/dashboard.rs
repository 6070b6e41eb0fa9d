use dioxus::prelude::*;

/// Placeholder dashboard: one wide box over a row of three small ones.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "main",
            h2 { "Dashboard" }

            div { class: "dashboard-box" }
            div { class: "dashboard-diagrams",
                div { class: "dashboard-box-sm" }
                div { class: "dashboard-box-sm" }
                div { class: "dashboard-box-sm" }
            }
        }
    }
}
