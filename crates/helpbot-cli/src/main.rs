use anyhow::Result;
use clap::Parser;
use helpbot_cli::app;

#[derive(Parser)]
#[command(name = "helpbot")]
#[command(about = "HelpBot - help with government services and procedures")]
#[command(version)]
struct Cli {
    /// Ask a single question and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Print replies as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    // A missing .env is fine; the key may come from the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = helpbot_core::Settings::load();
    if let Some(model) = cli.model {
        settings.llm.model = model;
    }

    // Fail before reading any input when the credential is absent.
    settings.require_api_key()?;

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, &prompt, cli.json).await?;
    } else {
        app::run_interactive(settings, cli.json).await?;
    }

    Ok(())
}
