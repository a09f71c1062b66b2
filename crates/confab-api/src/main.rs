//! Confab CLI entry point.
//!
//! Binary name: `confab`
//!
//! Parses CLI arguments, resolves configuration, then dispatches to the
//! interactive chat loop or the one-shot `ask` command.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,confab=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "confab", &mut std::io::stdout());
        return Ok(());
    }

    let config = cli.resolve_config().await;

    match cli.command {
        Commands::Chat => {
            cli::chat::run_chat_loop(&config).await?;
        }

        Commands::Ask {
            ref message,
            html,
        } => {
            cli::ask::run_ask(&config, message, html, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
