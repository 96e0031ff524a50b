//! REPL (Read-Eval-Print Loop) for interactive chat

use super::session::ChatSession;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ConsoleProgress;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use suite_application::{NoProgress, ProgressNotifier};
use suite_domain::EnablementFlags;
use tracing::warn;

/// What the loop does after a slash command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl<S: ChatSession> {
    session: S,
    history_path: Option<PathBuf>,
    show_progress: bool,
    round: usize,
}

impl<S: ChatSession> ChatRepl<S> {
    /// Create a new ChatRepl
    pub fn new(session: S) -> Self {
        Self {
            session,
            history_path: Self::default_history_path(),
            show_progress: true,
            round: 0,
        }
    }

    /// Override the history file location
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    /// Set whether to show status lines
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("model-suite").join("history.txt"))
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandOutcome::Exit {
                            break;
                        }
                        continue;
                    }

                    self.process_prompt(line).await;
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

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Model Suite - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Default flags: {}", self.session.default_flags());
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /config            - Show current settings");
        println!("  /reload            - Re-read configuration files");
        println!("  /set <flags>       - Save default flags (e.g. /set ++-+)");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
        println!("Start a prompt with flags (\"+-+ question\") to override the default.");
        println!("Reference files with @path.");
        println!();
    }

    /// Handle slash commands
    fn handle_command(&mut self, cmd: &str) -> CommandOutcome {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return CommandOutcome::Exit;
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
            }
            "/config" => {
                println!("{}", ConsoleFormatter::format_settings(&self.session.settings()));
            }
            "/reload" => match self.session.reload() {
                Ok(()) => println!("Configuration reloaded."),
                Err(e) => eprintln!("{} {}", "Reload failed:".red(), e),
            },
            "/set" => match EnablementFlags::parse(arg) {
                Err(_) => eprintln!(
                    "{} expected 3 or 4 of '+'/'-', e.g. /set ++-+",
                    "Invalid flags.".red()
                ),
                Ok(flags) => {
                    let canonical = flags.to_string();
                    match self.session.set_default_flags(&canonical) {
                        Ok(path) => println!(
                            "Default flags set to {} → {} (saved to {})",
                            canonical,
                            flags.describe(),
                            path.display()
                        ),
                        Err(e) => eprintln!("{} {}", "Could not save flags:".red(), e),
                    }
                }
            },
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        CommandOutcome::Continue
    }

    async fn process_prompt(&mut self, raw: &str) {
        let console = ConsoleProgress::new();
        let progress: &dyn ProgressNotifier = if self.show_progress {
            &console
        } else {
            &NoProgress
        };

        // Input rejected before dispatch does not consume a round number
        let prepared = match self.session.prepare(raw, progress) {
            Ok(prepared) => prepared,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                return;
            }
        };

        self.round += 1;
        println!(
            "{}",
            ConsoleFormatter::format_round_header(self.round, &prepared.prompt, &prepared.flags)
        );

        match self.session.run(prepared, progress).await {
            Ok(outcome) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_summary(&outcome.record, &outcome.saved)
                );
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
        println!("{}", ConsoleFormatter::format_round_footer(self.round));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::session::RoundOutcome;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use suite_application::{PreparedPrompt, SavedRound};
    use suite_domain::{GenerationParams, Prompt, RoundRecord, extract_flags};

    #[derive(Default)]
    struct FakeSession {
        flags: String,
        submitted: Vec<String>,
        reloads: usize,
        fail_prepare: bool,
        fail_run: bool,
    }

    #[async_trait]
    impl ChatSession for FakeSession {
        type Error = String;

        fn prepare(
            &self,
            raw: &str,
            _progress: &dyn ProgressNotifier,
        ) -> Result<PreparedPrompt, String> {
            if self.fail_prepare {
                return Err("invalid flag format".to_string());
            }
            let extraction = extract_flags(raw, &self.flags).map_err(|e| e.to_string())?;
            Ok(PreparedPrompt {
                prompt: Prompt::new(extraction.text.clone()),
                flags: extraction.flags,
                extraction,
            })
        }

        async fn run(
            &mut self,
            prepared: PreparedPrompt,
            _progress: &dyn ProgressNotifier,
        ) -> Result<RoundOutcome, String> {
            self.submitted.push(prepared.prompt.content().to_string());
            if self.fail_run {
                return Err("all providers disabled".to_string());
            }
            Ok(RoundOutcome {
                record: RoundRecord {
                    timestamp: Utc::now(),
                    prompt: prepared.prompt,
                    flags: prepared.flags,
                    config: GenerationParams::default().snapshot(),
                    results: BTreeMap::new(),
                    comparison: None,
                },
                saved: SavedRound {
                    record_path: PathBuf::from("outputs/a.json"),
                    report_path: PathBuf::from("outputs/a.html"),
                },
            })
        }

        fn settings(&self) -> Vec<(String, String)> {
            vec![("default_flags".to_string(), self.flags.clone())]
        }

        fn reload(&mut self) -> Result<(), String> {
            self.reloads += 1;
            Ok(())
        }

        fn set_default_flags(&mut self, flags: &str) -> Result<PathBuf, String> {
            self.flags = flags.to_string();
            Ok(PathBuf::from("suite.toml"))
        }

        fn default_flags(&self) -> String {
            self.flags.clone()
        }
    }

    fn repl() -> ChatRepl<FakeSession> {
        ChatRepl::new(FakeSession {
            flags: "++++".to_string(),
            ..Default::default()
        })
        .with_progress(false)
    }

    #[test]
    fn test_exit_commands() {
        let mut repl = repl();
        for cmd in ["/quit", "/q", "/exit"] {
            assert_eq!(repl.handle_command(cmd), CommandOutcome::Exit);
        }
        assert_eq!(repl.handle_command("/help"), CommandOutcome::Continue);
        assert_eq!(repl.handle_command("/nope"), CommandOutcome::Continue);
    }

    #[test]
    fn test_set_validates_flags() {
        let mut repl = repl();

        repl.handle_command("/set +x+");
        assert_eq!(repl.session.flags, "++++");

        repl.handle_command("/set");
        assert_eq!(repl.session.flags, "++++");

        repl.handle_command("/set +-+");
        assert_eq!(repl.session.flags, "+-++");

        repl.handle_command("/set --+-");
        assert_eq!(repl.session.flags, "--+-");
    }

    #[test]
    fn test_reload_and_config() {
        let mut repl = repl();
        repl.handle_command("/reload");
        repl.handle_command("/config");
        assert_eq!(repl.session.reloads, 1);
    }

    #[tokio::test]
    async fn test_rounds_are_numbered_and_errors_do_not_stop() {
        let mut repl = repl();

        repl.process_prompt("first").await;
        repl.session.fail_run = true;
        repl.process_prompt("+-+ second").await;

        assert_eq!(repl.round, 2);
        assert_eq!(repl.session.submitted, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_rejected_input_does_not_count_as_round() {
        let mut repl = repl();

        repl.process_prompt("first").await;
        repl.session.fail_prepare = true;
        repl.process_prompt("+x+ second").await;

        assert_eq!(repl.round, 1);
        assert_eq!(repl.session.submitted, vec!["first"]);

        repl.session.fail_prepare = false;
        repl.process_prompt("third").await;
        assert_eq!(repl.round, 2);
    }

    #[test]
    fn test_history_override() {
        let repl = repl().with_history_path(Some(PathBuf::from("/tmp/h.txt")));
        assert_eq!(repl.history_path, Some(PathBuf::from("/tmp/h.txt")));
    }
}
