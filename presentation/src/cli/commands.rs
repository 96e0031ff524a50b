//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for model-suite
#[derive(Parser, Debug)]
#[command(name = "model-suite")]
#[command(author, version, about = "Send one prompt to several models in parallel and compare the answers")]
#[command(long_about = r#"
model-suite sends a prompt to the Opus, Sonnet and Haiku models concurrently,
then asks a local Ollama model to compare the answers.

Every round is saved as a JSON record and an HTML report.

Flags pick the models of a round, in the order opus, sonnet, haiku, ollama:
  ++++   everything (default)
  +-++   opus and haiku, plus the comparison
  ++-    three characters: opus and sonnet, comparison implied
A flag token may also appear anywhere in the prompt, separated by whitespace.
Options go before the prompt; everything after the first prompt word is prompt text.

Prompts may reference files with @path; the file content is inlined.

Configuration files are loaded from (in priority order):
1. MODEL_SUITE_* environment variables
2. --config <path>     Explicit config file
3. ./suite.toml        Project-level config
4. ~/.config/model-suite/config.toml   Global config

Example:
  model-suite "What's the best way to handle errors in Rust?"
  model-suite --flags +-+- "Summarize @notes.md"
  model-suite "++- compare tokio and async-std"
  model-suite -+-+ what is rust
  model-suite --chat
"#)]
pub struct Cli {
    /// The prompt to send (not required in chat mode)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model flags for this run, e.g. "++-+" (overrides the configured default)
    #[arg(short, long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub flags: Option<String>,

    /// Directory for round artifacts (overrides config)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not open the HTML report after the round
    #[arg(long)]
    pub no_open: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status lines
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

impl Cli {
    /// Prompt words joined with single spaces, `None` when absent
    pub fn prompt_text(&self) -> Option<String> {
        let text = self.prompt.join(" ");
        (!text.trim().is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_words_joined() {
        let cli = Cli::parse_from(["model-suite", "explain", "borrowing"]);
        assert_eq!(cli.prompt_text().as_deref(), Some("explain borrowing"));
        assert!(!cli.chat);
    }

    #[test]
    fn test_flags_accept_leading_hyphen() {
        let cli = Cli::parse_from(["model-suite", "--flags", "-+-+", "hi"]);
        assert_eq!(cli.flags.as_deref(), Some("-+-+"));
    }

    #[test]
    fn test_prompt_may_start_with_directive() {
        let cli = Cli::try_parse_from(["model-suite", "-+-+", "what", "is", "rust"]).unwrap();
        assert_eq!(cli.prompt_text().as_deref(), Some("-+-+ what is rust"));

        let cli = Cli::try_parse_from(["model-suite", "--+ what is rust"]).unwrap();
        assert_eq!(cli.prompt_text().as_deref(), Some("--+ what is rust"));
    }

    #[test]
    fn test_options_before_directive_still_parsed() {
        let cli = Cli::try_parse_from(["model-suite", "-v", "-q", "-+-+", "hi"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(cli.quiet);
        assert_eq!(cli.prompt_text().as_deref(), Some("-+-+ hi"));
    }

    #[test]
    fn test_chat_without_prompt() {
        let cli = Cli::parse_from(["model-suite", "--chat", "-vv", "--no-open"]);
        assert!(cli.chat);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_open);
        assert_eq!(cli.prompt_text(), None);
    }
}
