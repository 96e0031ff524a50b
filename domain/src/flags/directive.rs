//! Inline flag directive extraction.
//!
//! A prompt may carry a flag token such as `++-+` anywhere in its text,
//! delimited by whitespace or the string boundaries. The first such token
//! is removed from the prompt and selects the providers for the round.

use crate::core::error::DomainError;
use crate::flags::enablement::EnablementFlags;
use regex::Regex;
use std::sync::OnceLock;

fn directive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:^|\s)([+\-]{3,4})(?:\s|$)").expect("flag directive pattern is valid")
    })
}

/// Where the flags of a round came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagSource {
    /// A token in the prompt text
    Inline,
    /// The configured default
    Default,
}

/// Result of scanning raw input for a flag directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagExtraction {
    /// Input with the directive removed (unchanged if none was found)
    pub text: String,
    /// Flags to use for the round
    pub flags: EnablementFlags,
    /// The flag string as written (inline token or the default)
    pub raw_flags: String,
    pub source: FlagSource,
}

impl FlagExtraction {
    /// Human-readable status line naming the enabled providers
    pub fn status_line(&self) -> String {
        let enabled = self.flags.enabled_names();
        let enabled = if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled.join(", ")
        };
        match self.source {
            FlagSource::Inline => format!("model flags: {} → {}", self.raw_flags, enabled),
            FlagSource::Default => {
                format!("model flags: {} (default) → {}", self.raw_flags, enabled)
            }
        }
    }
}

/// Extract the first flag directive from `raw`, falling back to `default_flags`.
///
/// The whitespace around a removed token collapses to a single space and the
/// result is trimmed. A malformed `default_flags` is an error even when it
/// ends up unused, so a round never proceeds on an unvalidated flag set.
pub fn extract_flags(raw: &str, default_flags: &str) -> Result<FlagExtraction, DomainError> {
    let default = EnablementFlags::parse(default_flags)?;

    let found = directive_pattern()
        .captures(raw)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?)));

    if let Some((whole, token)) = found {
        let flags = EnablementFlags::parse(token.as_str())?;

        let before = raw[..whole.start()].trim_end();
        let after = raw[whole.end()..].trim_start();
        let text = match (before.is_empty(), after.is_empty()) {
            (true, _) => after.to_string(),
            (_, true) => before.to_string(),
            _ => format!("{} {}", before, after),
        };

        return Ok(FlagExtraction {
            text: text.trim().to_string(),
            flags,
            raw_flags: token.as_str().to_string(),
            source: FlagSource::Inline,
        });
    }

    Ok(FlagExtraction {
        text: raw.to_string(),
        flags: default,
        raw_flags: default_flags.to_string(),
        source: FlagSource::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_directive() {
        let ex = extract_flags("++- what is rust", "++++").unwrap();
        assert_eq!(ex.text, "what is rust");
        assert_eq!(ex.flags.to_string(), "++-+");
        assert_eq!(ex.source, FlagSource::Inline);
    }

    #[test]
    fn test_middle_directive_collapses_whitespace() {
        let ex = extract_flags("explain   -+-+   closures", "++++").unwrap();
        assert_eq!(ex.text, "explain closures");
        assert_eq!(ex.flags.to_string(), "-+-+");
    }

    #[test]
    fn test_trailing_directive() {
        let ex = extract_flags("summarize this +--", "++++").unwrap();
        assert_eq!(ex.text, "summarize this");
        assert_eq!(ex.raw_flags, "+--");
    }

    #[test]
    fn test_only_first_directive_is_taken() {
        let ex = extract_flags("+-- a --+ b", "++++").unwrap();
        assert_eq!(ex.text, "a --+ b");
        assert_eq!(ex.flags.to_string(), "+--+");
    }

    #[test]
    fn test_embedded_signs_are_not_directives() {
        let ex = extract_flags("is c++++ better than a+++b", "+-++").unwrap();
        assert_eq!(ex.text, "is c++++ better than a+++b");
        assert_eq!(ex.source, FlagSource::Default);
        assert_eq!(ex.flags.to_string(), "+-++");
    }

    #[test]
    fn test_too_long_token_is_ignored() {
        let ex = extract_flags("+++++ hello", "++++").unwrap();
        assert_eq!(ex.text, "+++++ hello");
        assert_eq!(ex.source, FlagSource::Default);
    }

    #[test]
    fn test_absent_directive_keeps_input_unchanged() {
        let ex = extract_flags("  spaced input  ", "+++").unwrap();
        assert_eq!(ex.text, "  spaced input  ");
        assert_eq!(ex.flags.to_string(), "++++");
    }

    #[test]
    fn test_malformed_default_fails() {
        let err = extract_flags("hello", "+?+").unwrap_err();
        assert!(err.is_flag_format());
        let err = extract_flags("++-+ hello", "bogus").unwrap_err();
        assert!(err.is_flag_format());
    }

    #[test]
    fn test_status_lines() {
        let ex = extract_flags("---- hi", "++++").unwrap();
        assert_eq!(ex.status_line(), "model flags: ---- → none");

        let ex = extract_flags("hi", "+-++").unwrap();
        assert_eq!(
            ex.status_line(),
            "model flags: +-++ (default) → opus, haiku, ollama"
        );
    }
}
