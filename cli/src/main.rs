//! CLI entrypoint for Echo Chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use echo_application::ChatStore;
use echo_infrastructure::{ConfigLoader, HttpAssistantClient, JsonFileHistoryStore};
use echo_presentation::{ChatRepl, Cli};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    if let Some(base_url) = cli.base_url {
        config.assistant.base_url = base_url;
    }

    info!("Starting Echo Chat against {}", config.assistant.base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpAssistantClient::new(
        config.assistant.base_url.as_str(),
        Duration::from_secs(config.assistant.request_timeout_secs),
    )?);

    let history_path = config
        .history
        .path
        .as_ref()
        .map(PathBuf::from)
        .or_else(JsonFileHistoryStore::default_path)
        .unwrap_or_else(|| PathBuf::from("chat_history.json"));
    let history = Arc::new(JsonFileHistoryStore::new(history_path));

    let mut store = ChatStore::new(gateway, history);

    // One-shot mode: send a single message and print the reply
    if let Some(question) = cli.question {
        store.create_session();
        store.send_message(&question).await;
        if let Some(message) = store.current_messages().last() {
            println!("{}", message.content);
        }
        return Ok(());
    }

    // Interactive chat
    let repl = ChatRepl::new(store)
        .with_spinner(config.repl.show_spinner && !cli.quiet)
        .with_banner(!cli.quiet)
        .with_history_file(config.repl.history_file.map(PathBuf::from));

    repl.run().await?;

    Ok(())
}
