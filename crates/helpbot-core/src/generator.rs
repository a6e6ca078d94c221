use crate::context::{build_service_prompt, SessionHistory, Turn};
use crate::error::Result;
use crate::llm::{LlmClient, Message};
use crate::reply::{parse_reply, StructuredReply};

/// Turns a free-text query into a [`StructuredReply`], recording every turn.
pub struct ResponseGenerator {
    llm: Box<dyn LlmClient>,
}

impl ResponseGenerator {
    pub fn new(llm: Box<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// One attempt against the model. Never fails: an upstream error becomes
    /// the sentinel error reply, which is recorded like any other.
    pub async fn generate(&self, session: &mut SessionHistory, query: &str) -> StructuredReply {
        let prompt = build_service_prompt(query, !session.is_empty());

        let reply = match self.invoke(&prompt).await {
            Ok(raw) => parse_reply(&raw),
            Err(e) => {
                tracing::warn!(session = %session.id(), "generation failed: {e}");
                StructuredReply::error(&e)
            }
        };

        session.record(Turn::new(query, reply.clone()));
        reply
    }

    async fn invoke(&self, prompt: &str) -> Result<String> {
        let response = self.llm.chat(&[Message::user(prompt)]).await?;
        if let Some(ref usage) = response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "model usage"
            );
        }
        Ok(response.message.content)
    }
}
