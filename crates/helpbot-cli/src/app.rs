use anyhow::Result;
use helpbot_core::{ResponseGenerator, SessionHistory, Settings, StructuredReply};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{handle_command, CommandResult};
use crate::render::{render_history, render_reply, render_status};

fn print_reply(reply: &StructuredReply, json: bool) -> Result<()> {
    if json {
        println!("{}", reply.to_json()?);
    } else {
        println!("{}", render_reply(reply));
    }
    Ok(())
}

pub async fn run_single_prompt(settings: &Settings, prompt: &str, json: bool) -> Result<()> {
    let generator = ResponseGenerator::new(settings.build_llm_client()?);
    let mut session = SessionHistory::new().with_token_limit(settings.history.max_token_limit);

    let reply = generator.generate(&mut session, prompt).await;
    print_reply(&reply, json)
}

// ── Interactive loop ────────────────────────────────────────────────────

pub async fn run_interactive(settings: Settings, json: bool) -> Result<()> {
    let generator = ResponseGenerator::new(settings.build_llm_client()?);
    let mut session = SessionHistory::new().with_token_limit(settings.history.max_token_limit);
    tracing::debug!(model = %settings.llm.model, session = %session.id(), "starting interactive session");

    println!("HelpBot - help with government services and procedures");
    println!("Type your question, or /help for commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match handle_command(&line) {
            CommandResult::Quit => break,
            CommandResult::Message(msg) => println!("{msg}"),
            CommandResult::Clear => {
                session.clear();
                println!("History cleared.");
            }
            CommandResult::ShowHistory => print!("{}", render_history(&session)),
            CommandResult::ShowSummary => println!("{}", session.summarize()),
            CommandResult::ShowStatus => println!("{}", render_status(&settings, &session)),
            CommandResult::NotACommand => {
                let query = line.trim();
                if query.is_empty() {
                    println!("Please enter a question to get help.");
                    continue;
                }

                eprintln!("Generating helpful information...");
                let reply = generator.generate(&mut session, query).await;
                print_reply(&reply, json)?;
                if reply.is_error() {
                    println!("Please check your API key and try again.");
                }
            }
        }
    }

    println!("{}", session.summarize());
    Ok(())
}
