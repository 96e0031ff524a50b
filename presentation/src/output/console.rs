//! Console output formatter for round results

use colored::Colorize;
use suite_application::SavedRound;
use suite_domain::{ComparisonResult, EnablementFlags, Prompt, ProviderResult, RoundRecord};

const PREVIEW_CHARS: usize = 80;

/// Formats finished rounds for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Opening lines of a chat round: number, prompt preview, active providers
    pub fn format_round_header(round: usize, prompt: &Prompt, flags: &EnablementFlags) -> String {
        let active = flags.enabled_names();
        let targets = if active.is_empty() {
            "no providers".to_string()
        } else {
            active.join(", ")
        };
        format!(
            "\n{}\n  Prompt: {}\n  Sending to {}...\n",
            format!("── Round {} ──", round).yellow().bold(),
            prompt.preview(PREVIEW_CHARS),
            targets
        )
    }

    pub fn format_round_footer(round: usize) -> String {
        format!("{}", format!("── Round {} complete ──", round).yellow().bold())
    }

    /// Per-provider outcome, comparison outcome and artifact paths
    pub fn format_summary(record: &RoundRecord, saved: &SavedRound) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Round Summary"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Flags:".cyan().bold(),
            record.flags.describe()
        ));

        output.push_str(&format!(
            "{} {} ok, {} failed\n",
            "Primary:".cyan().bold(),
            record.succeeded().count(),
            record.failed().count()
        ));

        output.push_str(&Self::section_header("Primary providers"));
        if record.results.is_empty() {
            output.push_str(&format!("  {}\n", "(none enabled)".dimmed()));
        }
        for (provider, result) in &record.results {
            let line = match result {
                ProviderResult::Success(s) => format!(
                    "  {} {:<7} {} ({} tok, {:.1}s)",
                    "✓".green(),
                    provider.display_name(),
                    s.model,
                    s.output_tokens,
                    s.latency_seconds
                ),
                ProviderResult::Failure(f) => format!(
                    "  {} {:<7} {}",
                    "✗".red(),
                    provider.display_name(),
                    f.error.red()
                ),
            };
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str(&Self::section_header("Comparison"));
        let comparison = match &record.comparison {
            Some(ComparisonResult::Success(c)) => format!(
                "  {} {} ({:.1}s)",
                "✓".green(),
                c.model,
                c.latency_seconds
            ),
            Some(ComparisonResult::Failure(f)) => {
                format!("  {} {}", "✗".red(), f.error.red())
            }
            None => format!("  {}", "skipped".dimmed()),
        };
        output.push_str(&comparison);
        output.push('\n');

        output.push_str(&Self::section_header("Artifacts"));
        output.push_str(&format!("  {}\n", saved.record_path.display()));
        output.push_str(&format!("  {}\n", saved.report_path.display()));

        output.push_str(&Self::footer());
        output
    }

    /// Key/value listing for the effective settings
    pub fn format_settings(entries: &[(String, String)]) -> String {
        let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

        let mut output = Self::section_header("Current settings");
        for (key, value) in entries {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                key.cyan(),
                value,
                width = width
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use suite_domain::{ComparisonSuccess, GenerationParams, PrimaryProvider, ProviderSuccess};

    fn saved() -> SavedRound {
        SavedRound {
            record_path: PathBuf::from("outputs/20260101_120000_000.json"),
            report_path: PathBuf::from("outputs/20260101_120000_000.html"),
        }
    }

    fn record(comparison: Option<ComparisonResult>) -> RoundRecord {
        let mut results = BTreeMap::new();
        results.insert(
            PrimaryProvider::Sonnet,
            ProviderResult::Success(ProviderSuccess {
                model: "claude-sonnet-4-5-20250929".to_string(),
                model_id_requested: "claude-sonnet-4-5".to_string(),
                input_tokens: 10,
                output_tokens: 42,
                stop_reason: Some("end_turn".to_string()),
                latency_seconds: 1.234,
                response_text: "hello".to_string(),
                search_results: Vec::new(),
            }),
        );
        results.insert(
            PrimaryProvider::Haiku,
            ProviderResult::failure(PrimaryProvider::Haiku, "claude-haiku-4-5", "HTTP 500: boom"),
        );
        RoundRecord {
            timestamp: Utc::now(),
            prompt: Prompt::new("hi"),
            flags: EnablementFlags::parse("-++-").unwrap(),
            config: GenerationParams::default().snapshot(),
            results,
            comparison,
        }
    }

    #[test]
    fn test_summary_lists_each_provider_and_paths() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_summary(&record(None), &saved());

        assert!(text.contains("Sonnet  claude-sonnet-4-5-20250929 (42 tok, 1.2s)"));
        assert!(text.contains("Haiku   HTTP 500: boom"));
        assert!(text.contains("Primary: 1 ok, 1 failed"));
        assert!(!text.contains("Opus"));
        assert!(text.contains("skipped"));
        assert!(text.contains("outputs/20260101_120000_000.json"));
        assert!(text.contains("outputs/20260101_120000_000.html"));
    }

    #[test]
    fn test_summary_comparison_outcomes() {
        colored::control::set_override(false);
        let ok = record(Some(ComparisonResult::Success(ComparisonSuccess {
            model: "llama3.1".to_string(),
            response_text: "fine".to_string(),
            eval_count: Some(7),
            total_duration_ns: None,
            latency_seconds: 3.04,
        })));
        assert!(ConsoleFormatter::format_summary(&ok, &saved()).contains("llama3.1 (3.0s)"));

        let failed = record(Some(ComparisonResult::failure("connection refused")));
        assert!(
            ConsoleFormatter::format_summary(&failed, &saved()).contains("connection refused")
        );
    }

    #[test]
    fn test_round_header_preview_and_targets() {
        colored::control::set_override(false);
        let long = "x".repeat(100);
        let header = ConsoleFormatter::format_round_header(
            3,
            &Prompt::new(long),
            &EnablementFlags::parse("+-++").unwrap(),
        );

        assert!(header.contains("── Round 3 ──"));
        assert!(header.contains(&format!("  Prompt: {}...\n", "x".repeat(80))));
        assert!(header.contains("  Sending to opus, haiku, ollama...\n"));
        assert_eq!(
            ConsoleFormatter::format_round_footer(3),
            "── Round 3 complete ──"
        );
    }

    #[test]
    fn test_round_header_short_prompt_not_truncated() {
        colored::control::set_override(false);
        let header = ConsoleFormatter::format_round_header(
            1,
            &Prompt::new("what is rust"),
            &EnablementFlags::parse("----").unwrap(),
        );
        assert!(header.contains("  Prompt: what is rust\n"));
        assert!(header.contains("Sending to no providers..."));
    }

    #[test]
    fn test_settings_aligned() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_settings(&[
            ("default_flags".to_string(), "++++".to_string()),
            ("output_dir".to_string(), "outputs".to_string()),
        ]);
        assert!(text.contains("  default_flags  ++++\n"));
        assert!(text.contains("  output_dir     outputs\n"));
    }
}
