use dioxus::prelude::*;
use crate::types::{NavEntry, PanelState, SIDE_NAV_ENTRIES};

#[component]
pub fn SidePanel() -> Element {
    let mut state = use_signal(PanelState::default);
    let panel = *state.read();

    rsx! {
        nav {
            div { class: panel.root_class(),
                div {
                    class: "sidebar-open",
                    onclick: move |_| {
                        state.write().toggle();
                        tracing::debug!("side panel {}", state.peek().expansion());
                    },
                    i { class: panel.glyph() }
                }

                ul {
                    for entry in SIDE_NAV_ENTRIES.iter() {
                        NavItem { key: "{entry.label}", entry: *entry }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry) -> Element {
    rsx! {
        li {
            a { href: entry.href,
                i { class: entry.icon }
                "{entry.label}"
            }
        }
    }
}
