mod parser;

pub use parser::parse_reply;

use crate::constants::{fallback, sentinel};
use serde::{Deserialize, Serialize};

/// One question/answer pair from the FAQS section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The four-section reply rendered to the user.
///
/// Replies produced by [`parse_reply`] always have every field populated;
/// only the error sentinel carries an empty FAQ list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredReply {
    pub outline: Vec<String>,
    pub guide: String,
    pub faqs: Vec<Faq>,
    pub important_notes: Vec<String>,
}

impl StructuredReply {
    /// Reply made entirely of fallback content.
    pub fn defaults() -> Self {
        Self {
            outline: default_outline(),
            guide: default_guide(),
            faqs: default_faqs(),
            important_notes: default_notes(),
        }
    }

    /// Sentinel reply for a failed upstream call.
    pub fn error(description: impl std::fmt::Display) -> Self {
        Self {
            outline: vec![sentinel::OUTLINE.to_string()],
            guide: format!("{}{}", sentinel::GUIDE_PREFIX, description),
            faqs: Vec::new(),
            important_notes: sentinel::NOTES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.outline.len() == 1 && self.outline[0] == sentinel::OUTLINE && self.faqs.is_empty()
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rough size used for the informational token estimate.
    pub(crate) fn char_len(&self) -> usize {
        self.outline.iter().map(String::len).sum::<usize>()
            + self.guide.len()
            + self
                .faqs
                .iter()
                .map(|f| f.question.len() + f.answer.len())
                .sum::<usize>()
            + self.important_notes.iter().map(String::len).sum::<usize>()
    }
}

impl Default for StructuredReply {
    fn default() -> Self {
        Self::defaults()
    }
}

pub(crate) fn default_outline() -> Vec<String> {
    fallback::OUTLINE.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn default_guide() -> String {
    fallback::GUIDE.to_string()
}

pub(crate) fn default_faqs() -> Vec<Faq> {
    fallback::FAQS.iter().map(|(q, a)| Faq::new(*q, *a)).collect()
}

pub(crate) fn default_notes() -> Vec<String> {
    fallback::NOTES.iter().map(|s| s.to_string()).collect()
}
