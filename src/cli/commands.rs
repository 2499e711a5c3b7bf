//! CLI command definitions and handlers

use anyhow::bail;
use clap::Subcommand;
use std::io::Write;
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::models::ENGLISH;

/// English sample used by the demo
pub const DEMO_TEXT: &str = "Hello, how are you today?";

/// Swahili sample used by the demo
pub const DEMO_SWAHILI_TEXT: &str = "Habari za leo?";

/// Commands for the translation client
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Walk through health, languages and sample translations (default)
    Demo,

    /// Check whether the service is up
    Health,

    /// List the languages the service supports
    Languages,

    /// Translate a piece of text
    Translate {
        /// Text to translate
        text: String,

        /// Source language (default: english)
        #[arg(short, long, default_value = ENGLISH)]
        source_lang: String,

        /// Target language
        #[arg(short, long)]
        target_lang: String,
    },
}

/// Run the demo, printing `Error: <message>` instead of failing
pub async fn handle_demo<W: Write>(client: &TranslationClient, out: &mut W) -> anyhow::Result<()> {
    if let Err(e) = run_demo(client, out).await {
        writeln!(out, "Error: {}", e)?;
    }
    Ok(())
}

async fn run_demo<W: Write>(client: &TranslationClient, out: &mut W) -> anyhow::Result<()> {
    info!("Running demo against {}", client.base_url());

    match client.health_check().await {
        Some(health) if health.is_healthy() => writeln!(out, "Translation service is healthy!")?,
        _ => bail!("Translation service is not available"),
    }

    let languages = client.get_supported_languages().await;
    writeln!(out, "Supported languages: {}", languages.join(", "))?;

    let swahili = client.translate_to_swahili(DEMO_TEXT, None).await?;
    writeln!(out, "English to Swahili: {}", swahili.text().unwrap_or_default())?;

    let kinyarwanda = client.translate_to_kinyarwanda(DEMO_TEXT, None).await?;
    writeln!(
        out,
        "English to Kinyarwanda: {}",
        kinyarwanda.text().unwrap_or_default()
    )?;

    let english = client.translate_from_swahili(DEMO_SWAHILI_TEXT, None).await?;
    writeln!(out, "Swahili to English: {}", english.text().unwrap_or_default())?;

    Ok(())
}

/// Handle the health command
pub async fn handle_health<W: Write>(client: &TranslationClient, out: &mut W) -> anyhow::Result<()> {
    match client.health_check().await {
        Some(health) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&health)?)?;
            Ok(())
        }
        None => bail!("Translation service is not available at {}", client.base_url()),
    }
}

/// Handle the languages command
pub async fn handle_languages<W: Write>(
    client: &TranslationClient,
    out: &mut W,
) -> anyhow::Result<()> {
    let languages = client.get_supported_languages().await;
    if languages.is_empty() {
        writeln!(out, "No supported languages reported")?;
    }
    for language in &languages {
        writeln!(out, "{}", language)?;
    }
    Ok(())
}

/// Handle the translate command
pub async fn handle_translate<W: Write>(
    client: &TranslationClient,
    out: &mut W,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> anyhow::Result<()> {
    let result = client.translate(text, source_lang, target_lang).await?;
    match result.text() {
        Some(translated) => writeln!(out, "{}", translated)?,
        None => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
    }
    Ok(())
}
