/// Prefix added once the session already holds an earlier turn.
pub const CONTEXT_PREFIX: &str = "Based on our previous conversation, here's updated information: ";

const SERVICE_TEMPLATE: &str = r#"For the government service query: "{query}"

Please provide information in this exact format:

OUTLINE:
- Step 1: [action]
- Step 2: [action]
- Step 3: [action]
- Step 4: [action]

GUIDE:
[220-320 word guide: where to apply, required documents, biometrics, fees, tracking, collection]

FAQS:
Q1: [question about fees]
A1: [answer]
Q2: [question about time]
A2: [answer]
Q3: [question about lost documents]
A3: [answer]
Q4: [question about minors]
A4: [answer]

IMPORTANT NOTES:
- [note about official website]
- [note about original documents]
- [note about appointments]

Keep the tone clear, simple, and official-style."#;

/// Fill the service template for `query`.
pub fn build_service_prompt(query: &str, has_context: bool) -> String {
    let body = SERVICE_TEMPLATE.replacen("{query}", query, 1);
    if has_context {
        format!("{CONTEXT_PREFIX}{body}")
    } else {
        body
    }
}
