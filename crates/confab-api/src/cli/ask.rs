//! One-shot `confab ask` command.
//!
//! Sends a single message through a fresh session and prints the reply.
//! Like every exchange, a backend failure comes back as the fallback
//! notice rather than an error.

use confab_core::chat::ChatController;
use confab_core::render::render_message;
use confab_infra::http::HttpChatBackend;
use confab_types::chat::SendOutcome;
use confab_types::config::ChatConfig;

/// Send one message and print the settled reply.
pub async fn run_ask(
    config: &ChatConfig,
    message: &str,
    html: bool,
    json: bool,
) -> anyhow::Result<()> {
    let backend = HttpChatBackend::new(config);
    let controller = ChatController::new(backend, config);

    let outcome = controller.send_message(message).await;
    let fallback = outcome.is_fallback();

    match outcome {
        SendOutcome::Ignored => {
            anyhow::bail!("message is empty");
        }
        SendOutcome::Replied(text) | SendOutcome::Fallback(text) => {
            if json {
                let payload = serde_json::json!({
                    "response": text,
                    "fallback": fallback,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if html {
                println!("{}", render_message(&text));
            } else {
                println!("{text}");
            }
        }
    }

    Ok(())
}
