//! Aieth - terminal chat client
//!
#![doc = "Main entry point for the Aieth chat client."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aieth::cli::{Cli, Commands};
use aieth::commands;
use aieth::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Chat { conversation_id } => {
            tracing::info!("Starting interactive chat");
            commands::chat::run_chat(config, conversation_id).await?;
            Ok(())
        }
        Commands::Send {
            message,
            conversation_id,
            render,
        } => {
            tracing::debug!("Sending one-shot message");
            commands::send::run_send(config, message, conversation_id, render).await?;
            Ok(())
        }
        Commands::Format { text, render } => {
            commands::format::run_format(text, &render)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr and stay quiet by default so they do not interleave
/// with the conversation.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "aieth=debug" } else { "aieth=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
