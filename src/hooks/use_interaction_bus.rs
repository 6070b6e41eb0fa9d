use dioxus::prelude::*;
use crate::interaction::InteractionBus;

/// Provide the shared [`InteractionBus`] to the tree below. Interactions reach
/// it through an `InteractionArea` placed around the page.
pub fn use_interaction_bus() -> InteractionBus {
    use_context_provider(InteractionBus::new)
}
