//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::login::prompt_login;
use echo_application::ChatStore;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::time::Duration;

/// Interactive chat REPL
pub struct ChatRepl {
    store: ChatStore,
    show_spinner: bool,
    show_banner: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl over the given store
    pub fn new(store: ChatStore) -> Self {
        Self {
            store,
            show_spinner: true,
            show_banner: true,
            history_file: None,
        }
    }

    /// Set whether to show the busy spinner while a reply is pending
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Set the input history file, overriding the default location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load input history
        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("echo-chat").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let Some(name) = prompt_login(&mut rl)? else {
            println!("Bye!");
            return Ok(());
        };

        if self.show_banner {
            self.print_welcome(&name);
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save input history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self, name: &str) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Echo Chat                      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Hello, {}! Type a message to start chatting.", name);
        if !self.store.sessions().is_empty() {
            println!(
                "{} stored session(s) — /sessions to list them.",
                self.store.sessions().len()
            );
        }
        println!();
        println!("Commands:");
        println!("  /new       - Start a new chat");
        println!("  /sessions  - List chats");
        println!("  /switch N  - Switch to chat N");
        println!("  /help      - Show this help");
        println!("  /quit      - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /new            - Start a new chat");
                println!("  /sessions       - List chats");
                println!("  /switch N       - Switch to chat N (see /sessions)");
                println!("  /help, /h, /?   - Show this help");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            "/new" => {
                self.store.create_session();
                println!("Started a new chat.");
                println!();
                false
            }
            "/sessions" => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_session_list(
                        self.store.sessions(),
                        self.store.active_session_id(),
                    )
                );
                println!();
                false
            }
            "/switch" => {
                self.switch_session(arg);
                false
            }
            _ => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
                false
            }
        }
    }

    fn switch_session(&mut self, arg: &str) {
        let Ok(n) = arg.parse::<usize>() else {
            println!("Usage: /switch <number> (see /sessions)");
            return;
        };
        let Some(session) = self.store.sessions().get(n.wrapping_sub(1)) else {
            println!("No chat [{}]", n);
            return;
        };

        let id = session.id.clone();
        self.store.select_session(id);

        // Replay the conversation so far
        println!();
        for message in self.store.current_messages() {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        println!();
    }

    async fn process_message(&mut self, content: &str) {
        // Sending requires an active session; start one on first message
        if self.store.current_session().is_none() {
            self.store.create_session();
        }

        let spinner = if self.show_spinner {
            Some(Self::spinner())
        } else {
            None
        };

        self.store.send_message(content).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        if let Some(message) = self.store.current_messages().last() {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        println!();
    }

    fn spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("waiting for the assistant...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use echo_application::{AssistantGateway, NoHistoryStore};
    use std::sync::Arc;

    struct CannedGateway;

    #[async_trait]
    impl AssistantGateway for CannedGateway {
        async fn ask(&self, _content: &str) -> String {
            "canned reply".to_string()
        }
    }

    fn repl() -> ChatRepl {
        let store = ChatStore::new(Arc::new(CannedGateway), Arc::new(NoHistoryStore));
        ChatRepl::new(store).with_spinner(false).with_banner(false)
    }

    #[tokio::test]
    async fn first_message_creates_a_session() {
        let mut repl = repl();
        assert!(repl.store.sessions().is_empty());

        repl.process_message("hello").await;

        assert_eq!(repl.store.sessions().len(), 1);
        assert_eq!(repl.store.current_messages().len(), 2);
    }

    #[tokio::test]
    async fn later_messages_reuse_the_active_session() {
        let mut repl = repl();
        repl.process_message("one").await;
        repl.process_message("two").await;

        assert_eq!(repl.store.sessions().len(), 1);
        assert_eq!(repl.store.current_messages().len(), 4);
    }

    #[test]
    fn new_command_starts_a_session() {
        let mut repl = repl();
        assert!(!repl.handle_command("/new"));
        assert_eq!(repl.store.sessions().len(), 1);
    }

    #[test]
    fn quit_command_exits() {
        let mut repl = repl();
        assert!(repl.handle_command("/quit"));
        assert!(repl.handle_command("/q"));
        assert!(!repl.handle_command("/help"));
        assert!(!repl.handle_command("/nonsense"));
    }

    #[tokio::test]
    async fn switch_command_selects_by_listed_index() {
        let mut repl = repl();
        repl.process_message("in first").await;
        repl.handle_command("/new");
        repl.process_message("in second").await;

        // Sessions list newest-first: [2]=first created
        repl.switch_session("2");
        assert_eq!(repl.store.current_messages()[0].content, "in first");

        repl.switch_session("1");
        assert_eq!(repl.store.current_messages()[0].content, "in second");
    }

    #[tokio::test]
    async fn switch_with_bad_index_keeps_selection() {
        let mut repl = repl();
        repl.process_message("hello").await;
        let active = repl.store.active_session_id().map(str::to_string);

        repl.switch_session("7");
        repl.switch_session("0");
        repl.switch_session("not-a-number");

        assert_eq!(
            repl.store.active_session_id().map(str::to_string),
            active
        );
    }
}
