// Copyright 2026 ipa-transcribe Contributors
// SPDX-License-Identifier: Apache-2.0

//! ipa-transcribe: entry point.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use ipa_transcribe_cli::cli::{
    batch_cmd, candidates_cmd, config_cmd, languages_cmd, lookup_cmd, Overrides,
};
use ipa_transcribe_cli::config::{resolve_config_path, Settings};

#[derive(Parser)]
#[command(
    name = "ipa-transcribe",
    about = "IPA transcriptions for words and phrases from online dictionaries",
    version
)]
struct Cli {
    /// Path to a JSON settings file.
    /// Also reads from IPA_TRANSCRIBE_CONFIG env var.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe a word or phrase.
    Lookup {
        /// Text to transcribe; several arguments form one phrase.
        #[arg(required = true)]
        text: Vec<String>,

        #[command(flatten)]
        overrides: Overrides,

        /// Look words up as written instead of lowercased.
        #[arg(long)]
        keep_case: bool,

        /// Print a JSON object instead of the bare transcription.
        #[arg(long)]
        json: bool,
    },

    /// List every transcription found for one word.
    Candidates {
        word: String,

        #[command(flatten)]
        overrides: Overrides,

        /// Print a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Transcribe one phrase per line, writing `<phrase>\t<transcription>`.
    Batch {
        /// Input file (default: stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        overrides: Overrides,

        /// Look words up as written instead of lowercased.
        #[arg(long)]
        keep_case: bool,
    },

    /// List supported dictionary languages.
    Languages {
        #[arg(long)]
        json: bool,
    },

    /// Show the effective settings and the file they were read from.
    Config,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   ipa-transcribe completions bash > ~/.local/share/bash-completion/completions/ipa-transcribe
    ///   ipa-transcribe completions zsh > ~/.zfunc/_ipa-transcribe
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = resolve_config_path(cli.config.as_deref());
    let settings = Settings::load(&config_path)?;
    tracing::debug!("settings from {}", config_path.display());

    match cli.command {
        Commands::Lookup {
            text,
            overrides,
            keep_case,
            json,
        } => {
            let settings = overrides.apply(settings);
            lookup_cmd::run(&settings, &text, !keep_case, json).await?;
        }

        Commands::Candidates {
            word,
            overrides,
            json,
        } => {
            let settings = overrides.apply(settings);
            candidates_cmd::run(&settings, &word, json).await?;
        }

        Commands::Batch {
            input,
            overrides,
            keep_case,
        } => {
            let settings = overrides.apply(settings);
            batch_cmd::run(&settings, input.as_deref(), !keep_case).await?;
        }

        Commands::Languages { json } => languages_cmd::run(json)?,

        Commands::Config => config_cmd::run(&config_path, &settings)?,

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "ipa-transcribe", &mut std::io::stdout());
        }
    }

    Ok(())
}
