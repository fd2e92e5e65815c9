// ABOUTME: Entry point for rdsp-chat — a bilingual terminal chat client for RDSP questions.
// ABOUTME: Parses CLI args, loads config, sets up logging, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use rdsp_chat::app::App;
use rdsp_chat::config::{Config, ENDPOINT_ENV, Overrides};
use rdsp_chat::i18n::Language;
use rdsp_chat::logging;

#[derive(Parser)]
#[command(name = "rdsp-chat")]
#[command(about = "Ask questions about the Canadian RDSP in French or English")]
struct Cli {
    /// Chat endpoint URL (overrides config and RDSP_CHAT_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Starting language: fr or en
    #[arg(short, long)]
    lang: Option<Language>,
    /// Config file path (default: ~/.rdsp-chat/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load local .env if present.
    let _ = dotenvy::dotenv();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(
        std::env::var(ENDPOINT_ENV).ok(),
        Overrides {
            endpoint: cli.endpoint,
            language: cli.lang,
        },
    );

    logging::init(&config.log_path(), &config.log_level)?;

    App::new(config).run().await
}
