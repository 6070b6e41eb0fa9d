pub mod use_interaction_bus;
pub mod use_outside_interaction;

pub use use_interaction_bus::use_interaction_bus;
pub use use_outside_interaction::{use_outside_interaction, OutsideInteraction};
