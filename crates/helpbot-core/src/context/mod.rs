mod history;
pub mod prompt;

pub use history::{SessionHistory, Turn};
pub use prompt::build_service_prompt;
