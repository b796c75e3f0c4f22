//! Phrase composition.
//!
//! Words are resolved one after another, in phrase order, then the per-word
//! Candidate Lists are combined by [`combine`] under the configured
//! [`FailureStrategy`].

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::error::TranscribeResult;
use crate::fetch::{HttpFetcher, MarkupFetcher, DEFAULT_USER_AGENT};
use crate::types::{CompositionOptions, FailureStrategy, Language, Lookup, FAILURE_MARKER};

/// Resolves words and phrases against the dictionaries through one fetcher.
#[derive(Clone)]
pub struct Transcriber {
    fetcher: Arc<dyn MarkupFetcher>,
}

impl Transcriber {
    pub fn new(fetcher: Arc<dyn MarkupFetcher>) -> Self {
        Self { fetcher }
    }

    /// Transcriber talking to the live dictionary sites.
    pub fn over_http(user_agent: Option<&str>) -> TranscribeResult<Self> {
        let fetcher = HttpFetcher::new(user_agent.unwrap_or(DEFAULT_USER_AGENT))?;
        Ok(Self::new(Arc::new(fetcher)))
    }

    /// Resolve one word, keeping the reason when it fails.
    pub async fn lookup(
        &self,
        word: &str,
        language: Language,
        strip_syllable_separator: bool,
    ) -> Lookup {
        let lookup = language
            .extractor()
            .lookup(self.fetcher.as_ref(), word, strip_syllable_separator)
            .await;
        match &lookup {
            Lookup::Found(candidates) => {
                tracing::debug!(%language, word, candidates = candidates.len(), "resolved");
            }
            Lookup::Missing(miss) => {
                tracing::debug!(%language, word, ?miss, "no transcription");
            }
            Lookup::Failed(e) => {
                tracing::warn!(%language, word, "extractor failed: {e}");
            }
        }
        lookup
    }

    /// Candidate List for one word; empty when nothing was found.
    pub async fn candidates(
        &self,
        word: &str,
        language: Language,
        strip_syllable_separator: bool,
    ) -> Vec<String> {
        self.lookup(word, language, strip_syllable_separator)
            .await
            .into_candidates()
    }

    /// Transcription string for a whole phrase.
    pub async fn compose<S>(
        &self,
        words: &[S],
        language: Language,
        options: &CompositionOptions,
    ) -> String
    where
        S: AsRef<str>,
    {
        let mut per_word = Vec::with_capacity(words.len());
        for word in words {
            per_word.push(
                self.candidates(word.as_ref(), language, options.strip_syllable_separator)
                    .await,
            );
        }
        combine(&per_word, options)
    }
}

/// Combine per-word Candidate Lists, in phrase order, into one string.
///
/// A single word contributes all its candidates joined by `", "` when
/// `all_transcriptions` is set. In longer phrases every word contributes
/// only its first candidate and words are joined by a space.
pub fn combine(per_word: &[Vec<String>], options: &CompositionOptions) -> String {
    let strategy = options.failure_strategy;
    match per_word {
        [] => String::new(),
        [only] => match only.first() {
            None => all_failed(strategy),
            Some(first) if !options.all_transcriptions => first.clone(),
            Some(_) => only.join(", "),
        },
        words => {
            let failed = words.iter().filter(|c| c.is_empty()).count();
            if failed == words.len() {
                return all_failed(strategy);
            }
            if failed == 0 {
                return join_first(words.iter().filter_map(|c| c.first().map(String::as_str)));
            }
            match strategy {
                FailureStrategy::Show => join_first(
                    words
                        .iter()
                        .map(|c| c.first().map_or(FAILURE_MARKER, String::as_str)),
                ),
                FailureStrategy::Partial => {
                    join_first(words.iter().filter_map(|c| c.first().map(String::as_str)))
                }
                FailureStrategy::Whole => FAILURE_MARKER.to_string(),
                FailureStrategy::Hide => String::new(),
            }
        }
    }
}

/// Output when no word of the phrase resolved.
fn all_failed(strategy: FailureStrategy) -> String {
    match strategy {
        FailureStrategy::Show | FailureStrategy::Whole => FAILURE_MARKER.to_string(),
        FailureStrategy::Partial | FailureStrategy::Hide => String::new(),
    }
}

fn join_first<'a, I>(tokens: I) -> String
where
    I: Iterator<Item = &'a str>,
{
    tokens.collect::<Vec<_>>().join(" ")
}

static MARKUP_TAG: OnceLock<Option<Regex>> = OnceLock::new();

/// Split an editor field into the words of a Phrase.
///
/// HTML tags and `&nbsp;` become spaces, surrounding punctuation is trimmed,
/// and with `fold_case` every word is lowercased.
pub fn split_phrase(text: &str, fold_case: bool) -> Vec<String> {
    let stripped = match MARKUP_TAG.get_or_init(|| Regex::new(r"<[^>]*>").ok()) {
        Some(tag) => tag.replace_all(text, " ").into_owned(),
        None => text.to_string(),
    };
    let stripped = stripped.replace("&nbsp;", " ").replace("&amp;", "&");

    stripped
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-')))
        .filter(|w| !w.is_empty())
        .map(|w| if fold_case { w.to_lowercase() } else { w.to_string() })
        .collect()
}
