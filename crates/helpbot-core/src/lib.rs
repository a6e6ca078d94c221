pub mod error;
pub mod constants;
pub mod llm;
pub mod reply;
pub mod context;
pub mod config;
pub mod generator;

// Re-export key types
pub use error::HelpBotError;
pub use llm::{GeminiClient, LlmClient, LlmResponse, Message, Role, Usage};
pub use reply::{parse_reply, Faq, StructuredReply};
pub use context::{build_service_prompt, SessionHistory, Turn};
pub use generator::ResponseGenerator;
pub use config::Settings;
