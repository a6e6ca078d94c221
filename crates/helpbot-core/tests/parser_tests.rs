use helpbot_core::{parse_reply, Faq, StructuredReply};

// ========================================================================
// Reply Parser Tests (reply/parser.rs)
// ========================================================================

const FULL_REPLY: &str = "\
OUTLINE:
- Step 1: Gather required documents
- Step 2: Visit the registration office
- Step 3: Complete biometrics
- Step 4: Collect your card

GUIDE:
You can apply online or in person at the nearest office.
Bring your old card and proof of address.

FAQS:
Q1: What are the fees?
A1: Varies by office.
Q2: How long does it take?
A2: About two weeks.

IMPORTANT NOTES:
- Use the official website only
- Carry original documents
";

#[test]
fn test_empty_input_returns_all_defaults() {
    assert_eq!(parse_reply(""), StructuredReply::defaults());
}

#[test]
fn test_unstructured_text_returns_all_defaults() {
    let reply = parse_reply("Sorry, I cannot help with that.\nPlease try again later.");
    assert_eq!(reply, StructuredReply::defaults());
}

#[test]
fn test_full_reply_parses_every_section() {
    let reply = parse_reply(FULL_REPLY);

    assert_eq!(
        reply.outline,
        vec![
            "Step 1: Gather required documents",
            "Step 2: Visit the registration office",
            "Step 3: Complete biometrics",
            "Step 4: Collect your card",
        ]
    );
    assert_eq!(
        reply.guide,
        "You can apply online or in person at the nearest office. Bring your old card and proof of address."
    );
    assert_eq!(
        reply.faqs,
        vec![
            Faq::new("What are the fees?", "Varies by office."),
            Faq::new("How long does it take?", "About two weeks."),
        ]
    );
    assert_eq!(
        reply.important_notes,
        vec!["Use the official website only", "Carry original documents"]
    );
}

#[test]
fn test_outline_strips_bullet_prefix_in_order() {
    let raw = "OUTLINE:\n- Step 1: Gather required documents\n- Step 2: Submit application\n- Step 3: Pay fees\n- Step 4: Collect result";
    let reply = parse_reply(raw);
    assert_eq!(
        reply.outline,
        vec![
            "Step 1: Gather required documents",
            "Step 2: Submit application",
            "Step 3: Pay fees",
            "Step 4: Collect result",
        ]
    );
}

#[test]
fn test_outline_ignores_non_bullet_lines() {
    let reply = parse_reply("OUTLINE:\nHere are the steps\n- Apply\n* Not a bullet\n-Tight dash");
    assert_eq!(reply.outline, vec!["Apply"]);
}

#[test]
fn test_single_faq_pair() {
    let reply = parse_reply("FAQS:\nQ1: What are the fees?\nA1: Varies by office.");
    assert_eq!(
        reply.faqs,
        vec![Faq::new("What are the fees?", "Varies by office.")]
    );
}

#[test]
fn test_faq_answer_found_past_blank_lines() {
    let reply = parse_reply("FAQS:\nQ1: Can minors apply?\n\n   \nA1: Yes, with a guardian.");
    assert_eq!(reply.faqs, vec![Faq::new("Can minors apply?", "Yes, with a guardian.")]);
}

#[test]
fn test_orphan_question_is_dropped() {
    let raw = "FAQS:\nQ1: What are the fees?\nA1: Varies by office.\nQ2: What if nobody answers?";
    let reply = parse_reply(raw);
    assert_eq!(
        reply.faqs,
        vec![Faq::new("What are the fees?", "Varies by office.")]
    );
}

#[test]
fn test_only_orphan_questions_fall_back_to_default_faqs() {
    let reply = parse_reply("FAQS:\nQ1: Anyone there?\nQ2: Hello?");
    assert_eq!(reply.faqs, StructuredReply::defaults().faqs);
}

#[test]
fn test_question_without_colon_is_ignored() {
    let reply = parse_reply("FAQS:\nQuestion one\nA1: Orphan answer");
    assert_eq!(reply.faqs, StructuredReply::defaults().faqs);
}

#[test]
fn test_answer_keeps_text_after_first_colon_only() {
    let reply = parse_reply("FAQS:\nQ1: Office hours?\nA1: Open 9:00 to 17:00");
    assert_eq!(reply.faqs[0].answer, "Open 9:00 to 17:00");
}

#[test]
fn test_guide_skips_lines_starting_with_q_or_a() {
    let raw = "GUIDE:\nFirst sentence.\nQuick note skipped.\nAlso skipped.\nLast sentence.";
    let reply = parse_reply(raw);
    assert_eq!(reply.guide, "First sentence. Last sentence.");
}

#[test]
fn test_guide_keeps_dash_lines() {
    let reply = parse_reply("GUIDE:\n- bring photos\nthen queue");
    assert_eq!(reply.guide, "- bring photos then queue");
}

#[test]
fn test_header_with_trailing_text_still_switches_section() {
    let reply = parse_reply("OUTLINE: steps below\n- Apply online");
    assert_eq!(reply.outline, vec!["Apply online"]);
}

#[test]
fn test_indented_lines_are_trimmed() {
    let raw = "    OUTLINE:\n      - Step 1: Apply\n    IMPORTANT NOTES:\n      - Be early";
    let reply = parse_reply(raw);
    assert_eq!(reply.outline, vec!["Step 1: Apply"]);
    assert_eq!(reply.important_notes, vec!["Be early"]);
}

#[test]
fn test_windows_line_endings() {
    let reply = parse_reply("OUTLINE:\r\n- Apply\r\nIMPORTANT NOTES:\r\n- Bring ID\r\n");
    assert_eq!(reply.outline, vec!["Apply"]);
    assert_eq!(reply.important_notes, vec!["Bring ID"]);
}

#[test]
fn test_lines_before_any_header_are_ignored() {
    let reply = parse_reply("- stray bullet\nIntro text\nOUTLINE:\n- Real step");
    assert_eq!(reply.outline, vec!["Real step"]);
    assert_eq!(reply.guide, StructuredReply::defaults().guide);
}

#[test]
fn test_missing_sections_use_defaults_independently() {
    let reply = parse_reply("OUTLINE:\n- Only step\nIMPORTANT NOTES:\n- Only note");
    let defaults = StructuredReply::defaults();

    assert_eq!(reply.outline, vec!["Only step"]);
    assert_eq!(reply.important_notes, vec!["Only note"]);
    assert_eq!(reply.guide, defaults.guide);
    assert_eq!(reply.faqs, defaults.faqs);
}

#[test]
fn test_parsed_reply_is_never_empty() {
    for raw in ["", "OUTLINE:", "GUIDE:\n\n", "FAQS:\nQ1:", "IMPORTANT NOTES:\n-"] {
        let reply = parse_reply(raw);
        assert!(!reply.outline.is_empty(), "outline empty for {raw:?}");
        assert!(!reply.guide.is_empty(), "guide empty for {raw:?}");
        assert!(!reply.faqs.is_empty(), "faqs empty for {raw:?}");
        assert!(!reply.important_notes.is_empty(), "notes empty for {raw:?}");
        assert!(!reply.is_error());
    }
}

// ========================================================================
// StructuredReply Tests (reply/mod.rs)
// ========================================================================

#[test]
fn test_defaults_content() {
    let defaults = StructuredReply::defaults();
    assert_eq!(defaults.outline.len(), 4);
    assert_eq!(defaults.outline[0], "Step 1: Gather required documents");
    assert_eq!(defaults.faqs.len(), 4);
    assert_eq!(defaults.faqs[3].question, "Can minors apply?");
    assert_eq!(
        defaults.important_notes,
        vec![
            "Always check the official website",
            "Bring original documents",
            "Make an appointment if required",
        ]
    );
}

#[test]
fn test_error_sentinel_shape() {
    let reply = StructuredReply::error("connection refused");
    assert_eq!(reply.outline, vec!["Error: Could not generate response"]);
    assert_eq!(reply.guide, "An error occurred: connection refused");
    assert!(reply.faqs.is_empty());
    assert_eq!(
        reply.important_notes,
        vec!["Please try again", "Check your API key", "Contact support if issue persists"]
    );
    assert!(reply.is_error());
}

#[test]
fn test_to_json_uses_important_notes_key() {
    let json = StructuredReply::defaults().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["important_notes"].is_array());
    assert_eq!(value["faqs"][0]["question"], "What are the fees?");
}
