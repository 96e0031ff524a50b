//! Application layer for model-suite
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CallTimeouts, RoundConfig};
pub use ports::{
    attachment::{AttachmentError, AttachmentLoader},
    llm_gateway::{
        ComparisonGateway, ComparisonRequest, ComparisonResponse, GatewayError, PrimaryGateway,
        PrimaryRequest, PrimaryResponse,
    },
    progress::{NoProgress, ProgressNotifier},
    round_store::{
        NoViewer, PersistenceError, ReportRenderer, ReportViewer, RoundStore, SavedRound,
    },
};
pub use use_cases::prepare_prompt::{PreparePromptError, PreparePromptUseCase, PreparedPrompt};
pub use use_cases::publish_round::PublishRoundUseCase;
pub use use_cases::run_round::{RunRoundInput, RunRoundUseCase};
