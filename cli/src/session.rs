//! Wiring of configuration and adapters into a chat/one-shot session

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use suite_application::{
    PreparePromptUseCase, PreparedPrompt, ProgressNotifier, PublishRoundUseCase, RunRoundInput,
    RunRoundUseCase,
};
use suite_domain::{EnablementFlags, Prompt};
use suite_infrastructure::{
    AnthropicGateway, ConfigLoader, FileConfig, FileRoundStore, LocalAttachmentLoader,
    OllamaGateway, SystemReportViewer,
};
use suite_presentation::{ChatSession, Cli, HtmlReportRenderer, RoundOutcome};
use tracing::info;

/// Command-line settings that outrank every configuration file
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config_path: Option<PathBuf>,
    pub no_config: bool,
    pub flags: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub no_open: bool,
}

impl SessionOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            no_config: cli.no_config,
            flags: cli.flags.clone(),
            output_dir: cli.output_dir.clone(),
            no_open: cli.no_open,
        }
    }

    fn load(&self) -> Result<FileConfig> {
        let mut config = if self.no_config {
            ConfigLoader::load_defaults()
        } else {
            ConfigLoader::load(self.config_path.as_ref())
                .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut FileConfig) {
        if let Some(flags) = &self.flags {
            config.default_flags = flags.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.to_string_lossy().into_owned();
        }
        if self.no_open {
            config.open_report = false;
        }
    }
}

type Runner = RunRoundUseCase<AnthropicGateway, OllamaGateway>;
type Publisher = PublishRoundUseCase<HtmlReportRenderer, FileRoundStore, SystemReportViewer>;

/// One configured pipeline: prepare, run, publish
pub struct SuiteSession {
    options: SessionOptions,
    config: FileConfig,
    prepare: PreparePromptUseCase<LocalAttachmentLoader>,
    run: Runner,
    publish: Publisher,
}

impl SuiteSession {
    /// Load configuration and build every adapter
    pub fn open(options: SessionOptions) -> Result<Self> {
        let config = options.load()?;
        let (run, publish) = Self::build(&config)?;
        Ok(Self {
            options,
            config,
            prepare: PreparePromptUseCase::new(LocalAttachmentLoader::new()),
            run,
            publish,
        })
    }

    fn build(config: &FileConfig) -> Result<(Runner, Publisher)> {
        let round_config = config
            .to_round_config()
            .context("Invalid configuration")?;

        let primary = Arc::new(AnthropicGateway::from_config(&config.anthropic)?);
        let comparison = match &config.ollama {
            Some(ollama) => Some(Arc::new(OllamaGateway::from_config(ollama)?)),
            None => {
                info!("No [ollama] section; comparison stage disabled");
                None
            }
        };

        let run = RunRoundUseCase::new(primary, comparison, round_config);
        let publish = PublishRoundUseCase::new(
            HtmlReportRenderer::new(),
            FileRoundStore::new(config.output_dir()),
            SystemReportViewer,
        )
        .with_open_report(config.open_report);

        Ok((run, publish))
    }

    fn replace(&mut self, config: FileConfig) -> Result<()> {
        let (run, publish) = Self::build(&config)?;
        self.config = config;
        self.run = run;
        self.publish = publish;
        Ok(())
    }

    /// History file configured under `[repl]`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.config.repl.history_file.as_ref().map(PathBuf::from)
    }
}

#[async_trait]
impl ChatSession for SuiteSession {
    type Error = anyhow::Error;

    fn prepare(&self, raw: &str, progress: &dyn ProgressNotifier) -> Result<PreparedPrompt> {
        let prepared = self.prepare.execute_with_progress(
            raw,
            &self.run.config().default_flags,
            progress,
        )?;
        Ok(prepared)
    }

    async fn run(
        &mut self,
        prepared: PreparedPrompt,
        progress: &dyn ProgressNotifier,
    ) -> Result<RoundOutcome> {
        let record = self
            .run
            .execute_with_progress(
                RunRoundInput::new(prepared.prompt, prepared.flags),
                progress,
            )
            .await;

        let saved = self.publish.execute_with_progress(&record, progress)?;
        Ok(RoundOutcome { record, saved })
    }

    fn settings(&self) -> Vec<(String, String)> {
        let c = &self.config;
        let unset = |value: Option<String>| value.unwrap_or_else(|| "default".to_string());

        let default_flags = match EnablementFlags::parse(&c.default_flags) {
            Ok(flags) => format!("{} ({})", flags, flags.describe()),
            Err(_) => format!("{} (invalid)", c.default_flags),
        };
        let comparison = match &c.ollama {
            Some(o) => format!("{} @ {}", o.model, o.base_url),
            None => "not configured".to_string(),
        };
        let system = c
            .generation
            .system
            .as_deref()
            .map(|s| Prompt::new(s).preview(60))
            .unwrap_or_else(|| "(none)".to_string());

        vec![
            ("default_flags".to_string(), default_flags),
            ("output_dir".to_string(), c.output_dir.clone()),
            ("open_report".to_string(), c.open_report.to_string()),
            ("opus".to_string(), c.models.opus.clone()),
            ("sonnet".to_string(), c.models.sonnet.clone()),
            ("haiku".to_string(), c.models.haiku.clone()),
            ("system".to_string(), system),
            ("max_tokens".to_string(), c.generation.max_tokens.to_string()),
            (
                "temperature".to_string(),
                unset(c.generation.temperature.map(|t| t.to_string())),
            ),
            ("top_p".to_string(), unset(c.generation.top_p.map(|p| p.to_string()))),
            ("top_k".to_string(), unset(c.generation.top_k.map(|k| k.to_string()))),
            ("web_search".to_string(), c.generation.web_search.to_string()),
            ("comparison".to_string(), comparison),
        ]
    }

    fn reload(&mut self) -> Result<()> {
        let config = self.options.load()?;
        self.replace(config)
    }

    fn set_default_flags(&mut self, flags: &str) -> Result<PathBuf> {
        let path = ConfigLoader::writable_config_path();
        ConfigLoader::save_default_flags(&path, flags)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        // The saved value replaces any --flags given at startup
        self.options.flags = None;
        let mut config = self.config.clone();
        config.default_flags = flags.to_string();
        self.replace(config)?;
        Ok(path)
    }

    fn default_flags(&self) -> String {
        self.config.default_flags.clone()
    }
}
