//! Enablement flags value object.
//!
//! [`EnablementFlags`] records, per round, which providers take part. It has
//! one named boolean per known identity and an injective mapping to the
//! positional string form (`opus sonnet haiku ollama`, `+` enabled, `-`
//! disabled).
//!
//! # String form
//!
//! | Input  | Parsed as | Formatted |
//! |--------|-----------|-----------|
//! | `++++` | all on    | `++++`    |
//! | `++-`  | haiku off, ollama implied on | `++-+` |
//! | `-+-+` | sonnet + ollama | `-+-+` |

use crate::core::error::DomainError;
use crate::core::provider::{COMPARISON_PROVIDER, PrimaryProvider};
use serde::{Deserialize, Serialize};

const ENABLED: char = '+';
const DISABLED: char = '-';

/// Which providers are enabled for a round (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnablementFlags {
    pub opus: bool,
    pub sonnet: bool,
    pub haiku: bool,
    /// The comparison provider
    #[serde(rename = "ollama")]
    pub comparison: bool,
}

impl Default for EnablementFlags {
    /// Every provider enabled
    fn default() -> Self {
        Self::all()
    }
}

impl EnablementFlags {
    /// Number of positions in the full string form
    pub const WIDTH: usize = PrimaryProvider::ALL.len() + 1;

    /// Every provider enabled
    pub fn all() -> Self {
        Self {
            opus: true,
            sonnet: true,
            haiku: true,
            comparison: true,
        }
    }

    /// Parse a 3- or 4-character `+`/`-` string.
    ///
    /// The 3-character shorthand omits the comparison position, which is
    /// then treated as enabled. Any other length or character fails with
    /// [`DomainError::InvalidFlagFormat`].
    pub fn parse(flags: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(flags) {
            return Err(DomainError::InvalidFlagFormat(flags.to_string()));
        }

        let bits: Vec<bool> = flags.chars().map(|c| c == ENABLED).collect();
        Ok(Self {
            opus: bits[0],
            sonnet: bits[1],
            haiku: bits[2],
            comparison: bits.get(3).copied().unwrap_or(true),
        })
    }

    /// Check the flag grammar without building a value
    pub fn is_valid(flags: &str) -> bool {
        let len = flags.chars().count();
        (len == Self::WIDTH - 1 || len == Self::WIDTH)
            && flags.chars().all(|c| c == ENABLED || c == DISABLED)
    }

    /// Whether a primary provider is enabled
    pub fn is_enabled(&self, provider: PrimaryProvider) -> bool {
        match provider {
            PrimaryProvider::Opus => self.opus,
            PrimaryProvider::Sonnet => self.sonnet,
            PrimaryProvider::Haiku => self.haiku,
        }
    }

    /// Builder-style toggle for one primary provider
    pub fn with_primary(mut self, provider: PrimaryProvider, enabled: bool) -> Self {
        match provider {
            PrimaryProvider::Opus => self.opus = enabled,
            PrimaryProvider::Sonnet => self.sonnet = enabled,
            PrimaryProvider::Haiku => self.haiku = enabled,
        }
        self
    }

    /// Builder-style toggle for the comparison provider
    pub fn with_comparison(mut self, enabled: bool) -> Self {
        self.comparison = enabled;
        self
    }

    /// Enabled primary providers in canonical order
    pub fn enabled_primaries(&self) -> Vec<PrimaryProvider> {
        PrimaryProvider::ALL
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    /// Names of every enabled identity in canonical order, comparison last
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .enabled_primaries()
            .iter()
            .map(|p| p.as_str())
            .collect();
        if self.comparison {
            names.push(COMPARISON_PROVIDER);
        }
        names
    }

    /// `name=on|off` labels for every identity in canonical order
    pub fn describe(&self) -> String {
        let state = |on: bool| if on { "on" } else { "off" };
        let mut labels: Vec<String> = PrimaryProvider::ALL
            .iter()
            .map(|p| format!("{}={}", p, state(self.is_enabled(*p))))
            .collect();
        labels.push(format!("{}={}", COMPARISON_PROVIDER, state(self.comparison)));
        labels.join(", ")
    }
}

impl std::fmt::Display for EnablementFlags {
    /// Always the full 4-character form
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = |on: bool| if on { ENABLED } else { DISABLED };
        let s: String = [self.opus, self.sonnet, self.haiku, self.comparison]
            .into_iter()
            .map(sign)
            .collect();
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for EnablementFlags {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
