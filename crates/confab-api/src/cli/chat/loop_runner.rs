//! Main chat loop orchestration.
//!
//! Coordinates the session lifecycle: controller construction, welcome
//! banner, input loop with a pending spinner, slash commands, and reply
//! display.

use console::style;
use tracing::info;

use confab_core::chat::ChatController;
use confab_infra::http::HttpChatBackend;
use confab_types::chat::{ChatRole, SendOutcome};
use confab_types::config::ChatConfig;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Run the interactive chat loop.
pub async fn run_chat_loop(config: &ChatConfig) -> anyhow::Result<()> {
    let backend = HttpChatBackend::new(config);
    let controller = ChatController::new(backend, config);
    let session_id = controller.session_id().to_string();
    info!(session_id = %session_id, "interactive chat session started");

    print_welcome_banner(&config.base_url, &session_id);

    // The opening welcome bubble; not part of the transcript until a reset
    // seeds it there.
    println!("  {} {}", assistant_label(), config.welcome_message);
    println!();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::History => {
                            print_history(&controller.transcript());
                            continue;
                        }
                        ChatCommand::Reset => {
                            controller.reset_session().await;
                            println!();
                            println!("  {}", style("Conversation reset.").dim());
                            println!("  {} {}", assistant_label(), config.welcome_message);
                            println!();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Typing indicator while the exchange is pending
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .expect("spinner template is valid"),
                );
                spinner.set_message("typing...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let outcome = controller.send_message(&text).await;
                spinner.finish_and_clear();

                match outcome {
                    SendOutcome::Ignored => continue,
                    SendOutcome::Replied(reply) => {
                        println!("\n  {} {}\n", assistant_label(), reply);
                    }
                    SendOutcome::Fallback(notice) => {
                        println!(
                            "\n  {} {}\n",
                            style("!").yellow().bold(),
                            style(notice).dim()
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn assistant_label() -> String {
    format!("{}", style("Assistant >").cyan().bold())
}

fn print_history(transcript: &[confab_types::chat::TranscriptEntry]) {
    println!();
    if transcript.is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for entry in transcript {
        let label = match entry.role {
            ChatRole::User => format!("{}", style("You").green().bold()),
            ChatRole::Assistant => format!("{}", style("Assistant").cyan().bold()),
        };
        let preview = if entry.content.len() > 100 {
            format!("{}...", &entry.content[..97])
        } else {
            entry.content.clone()
        };
        println!("  {label} {preview}");
    }
    println!();
}
