use std::cell::RefCell;
use std::rc::Rc;
use dioxus::prelude::*;
use crate::interaction::{InteractionBus, InteractionScope, Subscription};

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

struct Registration {
    scope: InteractionScope,
    callback: Callback,
    _subscription: Subscription,
}

/// Handle returned by [`use_outside_interaction`]. Wire [`mark_within`] to the
/// pointer events of the widget's root element.
///
/// [`mark_within`]: OutsideInteraction::mark_within
#[derive(Clone)]
pub struct OutsideInteraction {
    scope: InteractionScope,
    bus: InteractionBus,
}

impl OutsideInteraction {
    pub fn scope(&self) -> InteractionScope {
        self.scope
    }

    pub fn mark_within(&self) {
        self.bus.mark_within(self.scope);
    }
}

/// Call `on_outside` for every pointer interaction that does not pass through
/// the widget's root. The closure from the latest render is the one invoked.
/// Unsubscribes when the component unmounts.
pub fn use_outside_interaction(on_outside: impl FnMut() + 'static) -> OutsideInteraction {
    let bus = use_context::<InteractionBus>();

    let hook_bus = bus.clone();
    let registration = use_hook(move || {
        let scope = hook_bus.allocate_scope();
        let callback: Callback = Rc::new(RefCell::new(Box::new(|| {})));

        let current = callback.clone();
        let subscription = hook_bus.subscribe(move |interaction| {
            if interaction.is_within(scope) {
                return;
            }
            match current.try_borrow_mut() {
                Ok(mut on_outside) => (&mut *on_outside)(),
                Err(_) => tracing::debug!("outside handler for {scope} already running"),
            }
        });

        Rc::new(Registration { scope, callback, _subscription: subscription })
    });

    match registration.callback.try_borrow_mut() {
        Ok(mut slot) => *slot = Box::new(on_outside),
        Err(_) => tracing::debug!("kept previous outside handler for {}", registration.scope),
    }

    OutsideInteraction { scope: registration.scope, bus }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::interaction::PointerInteraction;

    thread_local! {
        static LATEST: Cell<u32> = const { Cell::new(0) };
    }

    #[component]
    fn Widget(generation: u32) -> Element {
        use_outside_interaction(move || LATEST.with(|latest| latest.set(generation)));
        rsx! { div {} }
    }

    fn root() -> Element {
        let mut generation = use_signal(|| 1u32);
        let bus = use_context::<InteractionBus>();
        // Bumping the generation from inside a dispatch re-renders the widget
        let _bump = use_hook(move || Rc::new(bus.subscribe(move |_| generation += 1)));
        rsx! { Widget { generation: generation() } }
    }

    #[test]
    fn test_latest_closure_is_invoked() {
        let bus = InteractionBus::new();
        let mut dom = VirtualDom::new(root).with_root_context(bus.clone());
        dom.rebuild_in_place();

        let outside = PointerInteraction::new("mousedown", Vec::new());

        // Generation 1 is live during the first dispatch, which bumps it to 2
        dom.in_runtime(|| bus.dispatch(&outside));
        assert_eq!(LATEST.with(Cell::get), 1);

        dom.render_immediate_to_vec();
        dom.in_runtime(|| bus.dispatch(&outside));
        assert_eq!(LATEST.with(Cell::get), 2);
    }
}
