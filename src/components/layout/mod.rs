pub mod app_shell;
pub mod interaction_area;

pub use app_shell::AppShell;
pub use interaction_area::InteractionArea;
