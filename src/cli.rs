// CLI module - command-line argument parsing and handlers
//
// With no subcommand askme runs the interactive TUI. Subcommands:
// - ask <QUESTION>...: Run one submit cycle and print the answer
// - history: Print the transcript, newest first
// - clear: Delete the remote transcript
// - config --show/--path/--reset/--edit: Configuration management
//
// Conversation subcommands drive a `Session` against the same gateway the TUI
// uses and exit non-zero if any error notification was produced.

use crate::config::{Config, VERSION};
use crate::conversation::{Exchange, Notification, Session};
use crate::gateway::Gateway;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;
use std::sync::Arc;

/// Ask Me Anything - terminal chat client for a question-answering API
#[derive(Parser)]
#[command(name = "askme")]
#[command(version = VERSION)]
#[command(about = "Terminal chat client for a question-answering API", long_about = None)]
pub struct Cli {
    /// Talk to an in-process mock backend instead of the configured API
    #[arg(long, global = true)]
    pub demo: bool,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question and print the answer
    Ask {
        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Print the conversation history, newest first
    History {
        /// Only print the newest N exchanges
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete all conversations on the server
    Clear,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversation commands
// ─────────────────────────────────────────────────────────────────────────────

/// Run a conversation subcommand. Returns false if any error was reported.
pub async fn run_conversation_command(command: Commands, gateway: Arc<dyn Gateway>) -> bool {
    let mut session = Session::new(gateway);

    match command {
        Commands::Ask { question } => {
            let notifications = session.ask(question.join(" ")).await;
            let ok = report(&notifications);
            if ok {
                if let Some(latest) = session.exchanges().first() {
                    println!("{}", format_exchange(latest));
                }
            }
            ok
        }
        Commands::History { limit } => {
            let notifications = session.refresh().await;
            let ok = report(&notifications);
            if ok {
                print!("{}", format_history(session.exchanges(), limit));
            }
            ok
        }
        Commands::Clear => {
            let notifications = session.clear().await;
            report(&notifications)
        }
        // Handled before any gateway exists
        Commands::Config { .. } => true,
    }
}

/// Print notifications to stderr. Returns false if any was an error.
fn report(notifications: &[Notification]) -> bool {
    for note in notifications {
        if note.is_error() {
            eprintln!("✗ {}", note.message);
        } else {
            eprintln!("✓ {}", note.message);
        }
    }
    !notifications.iter().any(Notification::is_error)
}

fn format_exchange(exchange: &Exchange) -> String {
    format!("You: {}\nAI: {}", exchange.question, exchange.answer)
}

/// Transcript text, newest first, blank line between exchanges
fn format_history(exchanges: &[Exchange], limit: Option<usize>) -> String {
    if exchanges.is_empty() {
        return "No conversations yet.\n".to_string();
    }

    let shown = limit.unwrap_or(exchanges.len());
    exchanges
        .iter()
        .take(shown)
        .map(|e| format!("{}\n\n", format_exchange(e)))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Config commands
// ─────────────────────────────────────────────────────────────────────────────

/// Handle `askme config ...`
pub fn handle_config_command(show: bool, reset: bool, edit: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else if edit {
        handle_config_edit()
    } else {
        // No flag provided, show help
        println!("Usage: askme config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!("# demo_mode = {}", config.demo_mode);

    // Show source info
    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| {
            format!(
                "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
                editor
            )
        })?;

    if !status.success() {
        anyhow::bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Failure;
    use crate::gateway::testing::{Call, ScriptedGateway};

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli = Cli::try_parse_from(["askme", "ask", "why", "is", "the", "sky", "blue"]).unwrap();
        assert!(!cli.demo);
        match cli.command {
            Some(Commands::Ask { question }) => assert_eq!(question.join(" "), "why is the sky blue"),
            _ => panic!("expected ask"),
        }

        let cli = Cli::try_parse_from(["askme", "history", "-n", "3", "--demo"]).unwrap();
        assert!(cli.demo);
        assert!(matches!(cli.command, Some(Commands::History { limit: Some(3) })));

        let cli = Cli::try_parse_from(["askme"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["askme", "ask"]).is_err());
    }

    #[test]
    fn history_is_newest_first_and_limited() {
        let exchanges = vec![Exchange::new("B", "2"), Exchange::new("A", "1")];
        assert_eq!(
            format_history(&exchanges, None),
            "You: B\nAI: 2\n\nYou: A\nAI: 1\n\n"
        );
        assert_eq!(format_history(&exchanges, Some(1)), "You: B\nAI: 2\n\n");
        assert_eq!(format_history(&[], None), "No conversations yet.\n");
    }

    #[test]
    fn report_flags_errors() {
        assert!(report(&[]));
        assert!(!report(&[Failure::Submit.notification()]));
    }

    #[tokio::test]
    async fn ask_command_succeeds_against_working_gateway() {
        let gateway = Arc::new(ScriptedGateway::default());
        let ok = run_conversation_command(
            Commands::Ask {
                question: vec!["hello".to_string(), "there".to_string()],
            },
            gateway.clone(),
        )
        .await;

        assert!(ok);
        assert_eq!(
            gateway.calls(),
            vec![Call::Submit("hello there".to_string()), Call::Fetch]
        );
    }

    #[tokio::test]
    async fn failures_make_commands_fail() {
        let gateway = Arc::new(ScriptedGateway::default());
        gateway.fail_next_clear();
        assert!(!run_conversation_command(Commands::Clear, gateway.clone()).await);

        gateway.fail_next_fetch();
        assert!(!run_conversation_command(Commands::History { limit: None }, gateway).await);
    }
}
