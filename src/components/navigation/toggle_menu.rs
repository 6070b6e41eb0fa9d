use dioxus::prelude::*;
use crate::hooks::use_outside_interaction;
use crate::types::{MenuEntry, MenuState};

#[component]
pub fn ToggleMenu(label: String, entries: &'static [MenuEntry]) -> Element {
    let mut state = use_signal(MenuState::default);

    let outside = use_outside_interaction(move || {
        // Peek first so a closed menu does not re-render on every click
        if state.peek().is_open() {
            state.write().dismiss();
            tracing::debug!("menu dismissed by outside interaction");
        }
    });
    let scope = outside.scope();
    let touch = outside.clone();

    rsx! {
        div {
            class: "nav-menu",
            "data-interaction-scope": "{scope}",
            onmousedown: move |_| outside.mark_within(),
            ontouchstart: move |_| touch.mark_within(),

            a {
                href: "#",
                class: "nav-user",
                onclick: move |evt| {
                    evt.prevent_default();
                    state.write().toggle();
                },
                "{label}"
                i { class: "fas fa-chevron-down" }
            }

            if state.read().is_open() {
                DropdownPanel { entries }
            }
        }
    }
}

#[component]
pub fn DropdownPanel(entries: &'static [MenuEntry]) -> Element {
    rsx! {
        div { class: "nav-dropdown",
            for entry in entries.iter() {
                a {
                    key: "{entry.label}",
                    href: entry.href,
                    class: "dropdown-item",
                    "{entry.label}"
                }
            }
        }
    }
}
