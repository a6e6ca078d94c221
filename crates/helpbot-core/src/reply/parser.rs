use super::{default_faqs, default_guide, default_notes, default_outline, Faq, StructuredReply};
use crate::constants::sections;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outline,
    Guide,
    Faqs,
    Notes,
}

impl Section {
    /// Header lines switch the section and are otherwise consumed.
    fn from_header(line: &str) -> Option<Self> {
        if line.starts_with(sections::OUTLINE) {
            Some(Section::Outline)
        } else if line.starts_with(sections::GUIDE) {
            Some(Section::Guide)
        } else if line.starts_with(sections::FAQS) {
            Some(Section::Faqs)
        } else if line.starts_with(sections::IMPORTANT_NOTES) {
            Some(Section::Notes)
        } else {
            None
        }
    }
}

/// Slice a raw model reply into a [`StructuredReply`].
///
/// Never fails: any field left empty after the pass is replaced with its
/// fallback content.
pub fn parse_reply(raw: &str) -> StructuredReply {
    let lines: Vec<&str> = raw.lines().collect();

    let mut outline = Vec::new();
    let mut guide = String::new();
    let mut faqs = Vec::new();
    let mut notes = Vec::new();
    let mut current: Option<Section> = None;

    for (idx, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section) = Section::from_header(line) {
            current = Some(section);
            continue;
        }

        match current {
            Some(Section::Outline) => {
                if let Some(item) = line.strip_prefix(sections::BULLET) {
                    outline.push(item.to_string());
                }
            }
            Some(Section::Notes) => {
                if let Some(item) = line.strip_prefix(sections::BULLET) {
                    notes.push(item.to_string());
                }
            }
            Some(Section::Guide) => {
                if !line.starts_with('Q') && !line.starts_with('A') {
                    guide.push_str(line);
                    guide.push(' ');
                }
            }
            Some(Section::Faqs) => {
                if line.starts_with('Q') {
                    if let Some(question) = after_colon(line) {
                        // An orphaned question with no answer below it is dropped.
                        if let Some(answer) = find_answer(&lines[idx + 1..]) {
                            faqs.push(Faq::new(question, answer));
                        }
                    }
                }
            }
            None => {}
        }
    }

    let guide = guide.trim().to_string();
    tracing::debug!(
        outline = outline.len(),
        guide_chars = guide.len(),
        faqs = faqs.len(),
        notes = notes.len(),
        "parsed model reply"
    );

    StructuredReply {
        outline: if outline.is_empty() { default_outline() } else { outline },
        guide: if guide.is_empty() { default_guide() } else { guide },
        faqs: if faqs.is_empty() { default_faqs() } else { faqs },
        important_notes: if notes.is_empty() { default_notes() } else { notes },
    }
}

/// Second cursor for the FAQ scan: first `A...:` line after the question.
fn find_answer(rest: &[&str]) -> Option<String> {
    rest.iter()
        .map(|l| l.trim())
        .find(|l| l.starts_with('A') && l.contains(':'))
        .and_then(after_colon)
}

fn after_colon(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, rest)| rest.trim().to_string())
}
