use dioxus::prelude::*;
use crate::interaction::InteractionBus;

/// Outermost container of the page. Pointer events that bubble up to it are
/// dispatched to every widget listening for outside interactions.
#[component]
pub fn InteractionArea(children: Element) -> Element {
    let bus = use_context::<InteractionBus>();
    let touch_bus = bus.clone();

    rsx! {
        div {
            class: "interaction-area",
            onmousedown: move |_| bus.dispatch_pending("mousedown"),
            ontouchstart: move |_| touch_bus.dispatch_pending("touchstart"),
            {children}
        }
    }
}
