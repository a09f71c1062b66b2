//! CLI command definitions and dispatch for the `confab` binary.
//!
//! Uses clap derive macros for argument parsing. Both commands drive the
//! same `ChatController`; the interactive loop and the one-shot `ask` are
//! just two calling contexts for one session core.

pub mod ask;
pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use confab_types::config::ChatConfig;

/// Chat with a conversational backend from your terminal.
#[derive(Parser)]
#[command(name = "confab", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Backend base URL, overriding the config file.
    #[arg(long, global = true, env = "CONFAB_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory holding config.toml (default: ~/.confab).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Send a single message and print the reply.
    Ask {
        /// The message to send.
        message: String,

        /// Print the reply rendered as safe HTML (links + line breaks).
        #[arg(long)]
        html: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Resolve the effective configuration: config file, then flag/env
    /// overrides on top.
    pub async fn resolve_config(&self) -> ChatConfig {
        let data_dir = self
            .config_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".confab")))
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = confab_infra::config::load_chat_config(&data_dir).await;
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config
    }
}
