//! German Wiktionary: first `{{Lautschrift|...}}` after the `{{IPA}}` marker.
//!
//! ```text
//! {{Aussprache}}
//! :{{IPA}} ''standardsprachlich:'' {{Lautschrift|ʃpɛːt}}
//! ```
//!
//! Only the first transcription is taken, so the result has at most one
//! candidate.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use super::{cached_pattern, from_wikitext, Extractor};
use crate::error::ExtractError;
use crate::fetch::{MarkupFetcher, Source};
use crate::normalize::clean_candidates;
use crate::types::Lookup;

pub const SOURCE: Source = Source::Wikitext {
    api: "https://de.wiktionary.org/w/api.php",
};

const LAUTSCHRIFT_PATTERN: &str = r"(?s)\{\{IPA\}\}.*?\{\{Lautschrift\|([^}|]+)";
static LAUTSCHRIFT: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub struct German;

#[async_trait]
impl Extractor for German {
    fn source(&self) -> Source {
        SOURCE
    }

    async fn lookup(
        &self,
        fetcher: &dyn MarkupFetcher,
        word: &str,
        strip_syllable_separator: bool,
    ) -> Lookup {
        from_wikitext(fetcher, SOURCE, word, move |wikitext| {
            transcriptions(wikitext, strip_syllable_separator)
        })
        .await
    }
}

/// The primary transcription of a German entry, if any.
pub fn transcriptions(
    wikitext: &str,
    strip_syllable_separator: bool,
) -> Result<Vec<String>, ExtractError> {
    let pattern = cached_pattern(&LAUTSCHRIFT, LAUTSCHRIFT_PATTERN)?;
    let primary = pattern
        .captures(wikitext)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    Ok(clean_candidates(primary, strip_syllable_separator))
}
