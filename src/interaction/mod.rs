//! Fan-out of pointer interactions to the widgets that care about them.
//!
//! Pointer events bubble from the target up to the interaction area at the
//! root of the page. On the way, every widget that closes on an outside click
//! records its [`InteractionScope`] with [`InteractionBus::mark_within`]; the
//! area then calls [`InteractionBus::dispatch_pending`], so each subscriber
//! sees which scopes the pointer landed in. Widgets hold a [`Subscription`]
//! for as long as they are mounted and dropping it unregisters them.
//!
//! Everything here rides on framework events, so it behaves the same on the
//! web, desktop and mobile renderers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionScope(u64);

impl fmt::Display for InteractionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope-{}", self.0)
    }
}

/// A pointer interaction somewhere on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerInteraction {
    pub kind: String,
    /// Scopes the event bubbled through, innermost first.
    pub scopes: Vec<InteractionScope>,
}

impl PointerInteraction {
    pub fn new(kind: impl Into<String>, scopes: Vec<InteractionScope>) -> Self {
        Self { kind: kind.into(), scopes }
    }

    pub fn is_within(&self, scope: InteractionScope) -> bool {
        self.scopes.contains(&scope)
    }
}

type Handler = Rc<RefCell<dyn FnMut(&PointerInteraction)>>;

#[derive(Default)]
struct BusInner {
    next_id: Cell<u64>,
    next_scope: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler)>>,
    pending: RefCell<Vec<InteractionScope>>,
}

impl BusInner {
    fn remove(&self, id: u64) {
        self.handlers.borrow_mut().retain(|(handler_id, _)| *handler_id != id);
    }
}

/// Shared service handed out through the component context.
#[derive(Clone, Default)]
pub struct InteractionBus {
    inner: Rc<BusInner>,
}

impl InteractionBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_scope(&self) -> InteractionScope {
        let scope = self.inner.next_scope.get();
        self.inner.next_scope.set(scope + 1);
        InteractionScope(scope)
    }

    /// Register `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl FnMut(&PointerInteraction) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let handler: Handler = Rc::new(RefCell::new(handler));
        self.inner.handlers.borrow_mut().push((id, handler));

        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Record that the interaction currently bubbling started inside `scope`.
    pub fn mark_within(&self, scope: InteractionScope) {
        self.inner.pending.borrow_mut().push(scope);
    }

    /// Dispatch the interaction that just finished bubbling, consuming the
    /// scopes marked on the way up.
    pub fn dispatch_pending(&self, kind: &str) {
        let scopes = std::mem::take(&mut *self.inner.pending.borrow_mut());
        self.dispatch(&PointerInteraction::new(kind, scopes));
    }

    /// Deliver an interaction to every live subscriber in subscription order.
    pub fn dispatch(&self, interaction: &PointerInteraction) {
        // Snapshot so handlers can subscribe or unsubscribe while we iterate
        let handlers: Vec<(u64, Handler)> = self.inner.handlers.borrow().clone();

        for (id, handler) in handlers {
            let still_subscribed = self
                .inner
                .handlers
                .borrow()
                .iter()
                .any(|(handler_id, _)| *handler_id == id);
            if !still_subscribed {
                continue;
            }

            match handler.try_borrow_mut() {
                Ok(mut handler) => (&mut *handler)(interaction),
                Err(_) => tracing::debug!("skipping re-entrant interaction handler {id}"),
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

/// Live registration on an [`InteractionBus`]. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    bus: Weak<BusInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
