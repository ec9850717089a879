//! Console formatting for messages and session lists

use colored::Colorize;
use echo_domain::{ChatSession, Message, Role};

/// Formats messages and session listings for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One message with a colored role prefix.
    pub fn format_message(message: &Message) -> String {
        let prefix = match message.role {
            Role::User => "you".cyan().bold(),
            Role::Assistant => "assistant".green().bold(),
        };
        format!("{}: {}", prefix, message.content)
    }

    /// One line of the session list: marker, 1-based index, title,
    /// last-update time, and the preview when there is one.
    pub fn format_session_line(index: usize, session: &ChatSession, active: bool) -> String {
        let marker = if active { "*" } else { " " };
        let when = session.updated_at.format("%Y-%m-%d %H:%M");
        let mut line = format!("{} [{}] {} ({})", marker, index + 1, session.title.bold(), when);
        if !session.last_message.is_empty() {
            line.push_str(&format!("\n      {}", session.last_message.dimmed()));
        }
        line
    }

    /// The full session list, newest first.
    pub fn format_session_list(sessions: &[ChatSession], active_id: Option<&str>) -> String {
        if sessions.is_empty() {
            return "No sessions yet. Type a message or /new to start one.".to_string();
        }
        sessions
            .iter()
            .enumerate()
            .map(|(i, s)| Self::format_session_line(i, s, active_id == Some(s.id.as_str())))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
