//! Core data types: languages, composition options, and lookup outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, TranscribeError};

/// Placeholder substituted for a word without any transcription.
pub const FAILURE_MARKER: &str = "~???~";

/// A supported dictionary language.
///
/// Each variant maps to exactly one extractor, see [`Language::extractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    British,
    American,
    French,
    Russian,
    Spanish,
    German,
    Polish,
    Dutch,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: [Language; 8] = [
        Language::British,
        Language::American,
        Language::Dutch,
        Language::French,
        Language::German,
        Language::Polish,
        Language::Russian,
        Language::Spanish,
    ];

    /// Stable identifier, as accepted by [`FromStr`] and used in settings files.
    pub fn id(self) -> &'static str {
        match self {
            Language::British => "british",
            Language::American => "american",
            Language::French => "french",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::German => "german",
            Language::Polish => "polish",
            Language::Dutch => "dutch",
        }
    }

    /// Human-readable name for language pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::British => "English (UK)",
            Language::American => "English (US)",
            Language::French => "French",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Polish => "Polish",
            Language::Dutch => "Dutch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = TranscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let language = match key.as_str() {
            "british" | "uk" | "en-gb" | "english (uk)" | "english (british)" => Language::British,
            "american" | "us" | "en-us" | "english (us)" | "english (american)" => {
                Language::American
            }
            "french" | "fr" | "français" => Language::French,
            "russian" | "ru" | "русский" => Language::Russian,
            "spanish" | "es" | "español" => Language::Spanish,
            "german" | "de" | "deutsch" => Language::German,
            "polish" | "pl" | "polski" => Language::Polish,
            "dutch" | "nl" | "nederlands" => Language::Dutch,
            _ => return Err(TranscribeError::UnknownLanguage(s.to_string())),
        };
        Ok(language)
    }
}

/// What to emit when one or more words of a phrase have no transcription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStrategy {
    /// Put [`FAILURE_MARKER`] in place of every failing word.
    Show,
    /// Drop failing words and join the rest, so `["nosuchword", "dog"]`
    /// gives `dɒɡ` rather than the [`Show`](FailureStrategy::Show) form
    /// `~???~ dɒɡ`. Empty when every word fails.
    Partial,
    /// Replace the whole output with a single [`FAILURE_MARKER`].
    Whole,
    /// Emit nothing at all. This is the all-or-nothing join.
    #[default]
    Hide,
}

impl FailureStrategy {
    pub fn id(self) -> &'static str {
        match self {
            FailureStrategy::Show => "show",
            FailureStrategy::Partial => "partial",
            FailureStrategy::Whole => "whole",
            FailureStrategy::Hide => "hide",
        }
    }
}

impl fmt::Display for FailureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FailureStrategy {
    type Err = TranscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "show" => Ok(FailureStrategy::Show),
            "partial" => Ok(FailureStrategy::Partial),
            "whole" => Ok(FailureStrategy::Whole),
            "hide" => Ok(FailureStrategy::Hide),
            _ => Err(TranscribeError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Options controlling how a phrase is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionOptions {
    /// Remove `.` syllable boundaries from every candidate.
    pub strip_syllable_separator: bool,
    /// For single-word phrases, list every candidate instead of the first.
    pub all_transcriptions: bool,
    pub failure_strategy: FailureStrategy,
}

impl Default for CompositionOptions {
    fn default() -> Self {
        Self {
            strip_syllable_separator: true,
            all_transcriptions: false,
            failure_strategy: FailureStrategy::default(),
        }
    }
}

/// Why a lookup produced no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// The fetcher returned nothing (network error, non-2xx, malformed payload).
    NoContent,
    /// Markup was fetched but holds no usable transcription.
    NoMatch,
}

/// Outcome of resolving one word with one extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Ordered, deduplicated, non-empty Candidate List.
    Found(Vec<String>),
    Missing(Miss),
    Failed(ExtractError),
}

impl Lookup {
    /// Wrap a candidate list, treating an empty one as [`Miss::NoMatch`].
    pub fn from_candidates(candidates: Vec<String>) -> Self {
        if candidates.is_empty() {
            Lookup::Missing(Miss::NoMatch)
        } else {
            Lookup::Found(candidates)
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Candidate list, empty for every outcome other than [`Lookup::Found`].
    pub fn into_candidates(self) -> Vec<String> {
        match self {
            Lookup::Found(candidates) => candidates,
            Lookup::Missing(_) | Lookup::Failed(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<String>, ExtractError>> for Lookup {
    fn from(result: Result<Vec<String>, ExtractError>) -> Self {
        match result {
            Ok(candidates) => Lookup::from_candidates(candidates),
            Err(e) => Lookup::Failed(e),
        }
    }
}
