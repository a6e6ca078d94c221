// Library interface for helpbot-cli
// This allows integration tests to access internal modules

pub mod app;
pub mod commands;
pub mod render;

// Re-export commonly used items for easier testing
pub use commands::{handle_command, CommandResult};
pub use render::{render_history, render_reply, render_status};
