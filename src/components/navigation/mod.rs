pub mod nav_bar;
pub mod side_panel;
pub mod toggle_menu;

pub use nav_bar::NavBar;
pub use side_panel::SidePanel;
pub use toggle_menu::{DropdownPanel, ToggleMenu};
