//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the backend base URL and a short session id prefix, plus a hint
/// about slash commands.
pub fn print_welcome_banner(base_url: &str, session_id: &str) {
    println!();
    println!("  {}", style("Confab").cyan().bold());
    println!("  {}", style(base_url).dim());
    println!();
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
