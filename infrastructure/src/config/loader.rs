//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "model-suite";
const PROJECT_FILES: [&str; 2] = ["suite.toml", ".suite.toml"];
const ENV_PREFIX: &str = "MODEL_SUITE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `MODEL_SUITE_*` (nested keys joined with `__`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./suite.toml` or `./.suite.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/model-suite/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            debug!("Merging global config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            debug!("Merging project config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/model-suite/config.toml if set,
    /// otherwise falls back to ~/.config/model-suite/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// File that `/set` writes to: the existing project file, else `./suite.toml`
    pub fn writable_config_path() -> PathBuf {
        Self::project_config_path().unwrap_or_else(|| PathBuf::from(PROJECT_FILES[0]))
    }

    /// Persist `default_flags` into `path`, keeping every other key intact
    pub fn save_default_flags(path: &Path, flags: &str) -> io::Result<()> {
        let mut table = if path.exists() {
            fs::read_to_string(path)?
                .parse::<toml::Table>()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        } else {
            toml::Table::new()
        };

        table.insert(
            "default_flags".to_string(),
            toml::Value::String(flags.to_string()),
        );

        let rendered = toml::to_string_pretty(&table).map_err(io::Error::other)?;
        fs::write(path, rendered)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ env ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./suite.toml or ./.suite.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
