//! Chat configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_file: Option<String>,
}
