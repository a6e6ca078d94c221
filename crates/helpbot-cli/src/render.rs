use helpbot_core::{SessionHistory, StructuredReply};
use std::fmt::Write;

/// Number of history entries (queries and replies) shown by `/history`.
pub const HISTORY_ENTRIES: usize = 6;
const QUERY_PREVIEW_CHARS: usize = 100;

pub fn render_reply(reply: &StructuredReply) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "── Step-by-Step Outline ──");
    for (i, step) in reply.outline.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }

    let _ = writeln!(out, "\n── Complete Citizen Guide ──");
    let _ = writeln!(out, "{}", reply.guide);

    let _ = writeln!(out, "\n── Frequently Asked Questions ──");
    if reply.faqs.is_empty() {
        let _ = writeln!(out, "No FAQs available");
    } else {
        for (i, faq) in reply.faqs.iter().enumerate() {
            let _ = writeln!(out, "Q{}: {}", i + 1, faq.question);
            let _ = writeln!(out, "    {}", faq.answer);
        }
    }

    let _ = writeln!(out, "\n── Important Notes ──");
    for note in &reply.important_notes {
        let _ = writeln!(out, "• {note}");
    }

    out
}

/// The most recent entries, a query and its reply counting as two.
pub fn render_history(history: &SessionHistory) -> String {
    if history.is_empty() {
        return "Start a conversation to see history here!".to_string();
    }

    let mut out = String::new();
    let turns = history.recent(HISTORY_ENTRIES / 2);
    for (i, turn) in turns.iter().enumerate() {
        let _ = writeln!(out, "Q{}: {}", i + 1, preview(&turn.query));
        let label = if turn.response.is_error() {
            "Error response"
        } else {
            "Generated response"
        };
        let _ = writeln!(out, "A{}: {} ({})", i + 1, label, turn.asked_at.format("%H:%M:%S"));
    }
    out
}

pub fn render_status(settings: &helpbot_core::Settings, history: &SessionHistory) -> String {
    let key = if settings.api_key().is_some() {
        "configured"
    } else {
        "missing"
    };
    format!(
        "Model: {}\nAPI key ({}): {}\nConversation count: {}\nHistory tokens (est.): {} / {}",
        settings.llm.model,
        settings.llm.api_key_env,
        key,
        history.len(),
        history.estimate_tokens(),
        history.token_limit(),
    )
}

fn preview(query: &str) -> String {
    if query.chars().count() > QUERY_PREVIEW_CHARS {
        let head: String = query.chars().take(QUERY_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        query.to_string()
    }
}
