//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for echo-chat
#[derive(Parser, Debug)]
#[command(name = "echo-chat")]
#[command(author, version, about = "Terminal chat client for a remote assistant")]
#[command(long_about = r#"
Echo Chat keeps a local list of chat sessions and forwards your messages to a
remote assistant endpoint, rendering the replies in the terminal.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./echo-chat.toml    Project-level config
3. ~/.config/echo-chat/config.toml   Global config

Example:
  echo-chat                                  # interactive chat
  echo-chat "What is borrow checking?"       # one-shot question
  echo-chat --base-url http://10.0.0.5:8000
"#)]
pub struct Cli {
    /// Send a single message and print the reply (skips the interactive chat)
    pub question: Option<String>,

    /// Base URL of the assistant service (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and busy spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
