//! HelpBot centralized constants.
//! Model defaults, endpoints, fallback reply content and history limits.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
}

// ─── Section Headers ──────────────────────────────────────────────────────────

pub mod sections {
    pub const OUTLINE: &str = "OUTLINE:";
    pub const GUIDE: &str = "GUIDE:";
    pub const FAQS: &str = "FAQS:";
    pub const IMPORTANT_NOTES: &str = "IMPORTANT NOTES:";
    pub const BULLET: &str = "- ";
}

// ─── Fallback Reply Content ───────────────────────────────────────────────────

pub mod fallback {
    pub const OUTLINE: &[&str] = &[
        "Step 1: Gather required documents",
        "Step 2: Submit application",
        "Step 3: Pay fees",
        "Step 4: Collect result",
    ];

    pub const GUIDE: &str =
        "Please refer to the official government website for detailed information about this service.";

    /// (question, answer)
    pub const FAQS: &[(&str, &str)] = &[
        ("What are the fees?", "Check the official website for current fee structure."),
        ("How long does it take?", "Processing time varies, check with the office."),
        ("What if I lose my documents?", "Contact the office immediately for guidance."),
        ("Can minors apply?", "Yes, with proper documentation and parental consent."),
    ];

    pub const NOTES: &[&str] = &[
        "Always check the official website",
        "Bring original documents",
        "Make an appointment if required",
    ];
}

// ─── Error Sentinel ───────────────────────────────────────────────────────────

pub mod sentinel {
    pub const OUTLINE: &str = "Error: Could not generate response";
    pub const GUIDE_PREFIX: &str = "An error occurred: ";
    pub const NOTES: &[&str] = &[
        "Please try again",
        "Check your API key",
        "Contact support if issue persists",
    ];
}

// ─── History ──────────────────────────────────────────────────────────────────

pub mod history {
    /// Accepted as configuration, never enforced.
    pub const DEFAULT_MAX_TOKEN_LIMIT: usize = 2000;
    pub const SUMMARY_PREVIEW_QUERIES: usize = 3;
    pub const EMPTY_SUMMARY: &str = "No conversation history yet.";
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "helpbot";
    pub const CONFIG_FILE: &str = "config.toml";
}
