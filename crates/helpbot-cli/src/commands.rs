/// Result of processing a slash command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Clear the session history.
    Clear,
    /// Quit the application.
    Quit,
    /// Show recent conversation history.
    ShowHistory,
    /// Show the session summary line.
    ShowSummary,
    /// Show status (model, key, turns, tokens).
    ShowStatus,
    /// Not a command - treat as a query.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let input = input.trim();
    let cmd = input.split_whitespace().next().unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/clear" => CommandResult::Clear,
        "/history" => CommandResult::ShowHistory,
        "/summary" => CommandResult::ShowSummary,
        "/status" => CommandResult::ShowStatus,
        "/version" => CommandResult::Message(format!("HelpBot v{}", env!("CARGO_PKG_VERSION"))),

        // Unknown command
        _ => {
            if input.starts_with('/') {
                CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands."))
            } else {
                CommandResult::NotACommand
            }
        }
    }
}

fn show_help() -> CommandResult {
    let help_text = "\
╭─ HelpBot Commands ──────────────────────────────────────────────╮

  Type a question about a government service, e.g.
    How to renew CNIC in Pakistan?

  SESSION
    /history                  Show recent questions and replies
    /summary                  Show the session summary
    /clear                    Clear conversation history
    /status                   Show model, API key and history size

  OTHER
    /help, /h                 Show this help message
    /version                  Show version information
    /exit, /quit, /q          Quit the application

╰─────────────────────────────────────────────────────────────────╯";

    CommandResult::Message(help_text.into())
}
