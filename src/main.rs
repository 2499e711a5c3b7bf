//! Main entry point for the NLLB translation client CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nllb_client::cli::commands::{self, Commands};
use nllb_client::{ClientConfig, TranslationClient};

/// NLLB translation client - health, languages and translate
#[derive(Parser, Debug)]
#[command(name = "nllb-client", version, about, long_about = None)]
struct Args {
    /// Service base URL (defaults to NLLB_API_URL, then http://localhost:5000)
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args
        .base_url
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);
    let client = TranslationClient::with_config(config)?;

    let mut stdout = std::io::stdout();

    match args.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::handle_demo(&client, &mut stdout).await?,
        Commands::Health => commands::handle_health(&client, &mut stdout).await?,
        Commands::Languages => commands::handle_languages(&client, &mut stdout).await?,
        Commands::Translate {
            text,
            source_lang,
            target_lang,
        } => {
            commands::handle_translate(&client, &mut stdout, &text, &source_lang, &target_lang)
                .await?
        }
    }

    Ok(())
}
