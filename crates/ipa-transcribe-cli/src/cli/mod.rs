//! Subcommand implementations for the ipa-transcribe binary.

pub mod batch_cmd;
pub mod candidates_cmd;
pub mod config_cmd;
pub mod languages_cmd;
pub mod lookup_cmd;

use anyhow::{Context, Result};
use clap::Args;

use ipa_transcribe::{FailureStrategy, Language, Transcriber};

use crate::config::Settings;

/// Per-invocation flags layered over the settings file.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Dictionary language (british, american, dutch, french, german, polish, russian, spanish).
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output for words without a transcription (show, partial, whole, hide).
    #[arg(short = 's', long = "strategy")]
    pub failure_strategy: Option<FailureStrategy>,

    /// List every transcription of a single word.
    #[arg(short, long)]
    pub all: bool,

    /// Keep `.` syllable separators.
    #[arg(long)]
    pub keep_separators: bool,

    /// User agent for dictionary requests.
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Overrides {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(strategy) = self.failure_strategy {
            settings.failure_strategy = strategy;
        }
        if self.all {
            settings.all_transcriptions = true;
        }
        if self.keep_separators {
            settings.strip_syllable_separator = false;
        }
        if let Some(agent) = &self.user_agent {
            settings.user_agent = Some(agent.clone());
        }
        settings
    }
}

/// Transcriber over the live dictionaries, per `settings`.
pub fn transcriber(settings: &Settings) -> Result<Transcriber> {
    Transcriber::over_http(settings.user_agent.as_deref()).context("failed to build HTTP client")
}
