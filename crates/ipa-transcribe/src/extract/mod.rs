//! Per-language transcription extractors.
//!
//! Each supported [`Language`] maps to one [`Extractor`] through a fixed
//! `match`, so the language set is closed and exhaustively checked. Two
//! shared pipelines do the plumbing:
//!
//! - wikitext: fetch through the parse API, then run a pure text rule;
//! - HTML: fetch the page, parse it, select, filter, map to text, then
//!   normalize and dedup.
//!
//! Extractors never fail outward. A missing page, an absent template or a
//! broken rule all end as a non-[`Lookup::Found`] value.

pub mod dutch;
pub mod english;
pub mod french;
pub mod german;
pub mod polish;
pub mod russian;
pub mod spanish;

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use crate::document::{Document, DocumentNode, ElementQuery, HtmlDocument};
use crate::error::ExtractError;
use crate::fetch::{MarkupFetcher, Source};
use crate::normalize::clean_candidates;
use crate::types::{Language, Lookup, Miss};

/// Resolves one word to its Candidate List for one dictionary.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Where this extractor's markup comes from.
    fn source(&self) -> Source;

    /// Resolve `word`, keeping the reason when nothing is found.
    async fn lookup(
        &self,
        fetcher: &dyn MarkupFetcher,
        word: &str,
        strip_syllable_separator: bool,
    ) -> Lookup;

    /// Ordered, deduplicated candidates for `word`; empty when none.
    async fn extract(
        &self,
        fetcher: &dyn MarkupFetcher,
        word: &str,
        strip_syllable_separator: bool,
    ) -> Vec<String> {
        self.lookup(fetcher, word, strip_syllable_separator)
            .await
            .into_candidates()
    }
}

impl Language {
    /// The extractor serving this language.
    pub fn extractor(self) -> &'static dyn Extractor {
        match self {
            Language::British => &english::BRITISH,
            Language::American => &english::AMERICAN,
            Language::French => &french::French,
            Language::Russian => &russian::Russian,
            Language::Spanish => &spanish::Spanish,
            Language::German => &german::German,
            Language::Polish => &polish::Polish,
            Language::Dutch => &dutch::Dutch,
        }
    }

    pub fn source(self) -> Source {
        self.extractor().source()
    }
}

// ── Shared pipelines ────────────────────────────────────────────────────────

/// Fetch wikitext and apply `rule` to it.
pub(crate) async fn from_wikitext<R>(
    fetcher: &dyn MarkupFetcher,
    source: Source,
    word: &str,
    rule: R,
) -> Lookup
where
    R: FnOnce(&str) -> Result<Vec<String>, ExtractError> + Send,
{
    match fetcher.fetch(source, word).await {
        Some(wikitext) => rule(&wikitext).into(),
        None => Lookup::Missing(Miss::NoContent),
    }
}

/// Fetch an HTML page and collect raw tokens from it with `collect`.
///
/// The parsed document never outlives this call, so callers stay `Send`.
pub(crate) async fn from_html<C>(
    fetcher: &dyn MarkupFetcher,
    source: Source,
    word: &str,
    strip_syllable_separator: bool,
    collect: C,
) -> Lookup
where
    C: FnOnce(&HtmlDocument) -> Vec<String> + Send,
{
    match fetcher.fetch(source, word).await {
        Some(html) => {
            let raw = {
                let document = HtmlDocument::parse(&html);
                collect(&document)
            };
            Lookup::from_candidates(clean_candidates(raw, strip_syllable_separator))
        }
        None => Lookup::Missing(Miss::NoContent),
    }
}

/// Select by `query`, keep nodes passing `keep`, and map the survivors
/// to raw tokens with `tokens`, in document order.
pub(crate) fn select_tokens<'a, D, K, T>(
    document: &'a D,
    query: &ElementQuery,
    keep: K,
    tokens: T,
) -> Vec<String>
where
    D: Document<'a>,
    K: Fn(&D::Node) -> bool,
    T: Fn(&D::Node) -> Vec<String>,
{
    document
        .select(query)
        .into_iter()
        .filter(|node| keep(node))
        .flat_map(|node| tokens(&node))
        .collect()
}

/// Text of the node as its single token.
pub(crate) fn node_text<N: DocumentNode>(node: &N) -> Vec<String> {
    vec![node.text()]
}

/// Lazily compiled pattern; a compile failure is reported, not panicked on.
pub(crate) fn cached_pattern(
    cell: &'static OnceLock<Result<Regex, regex::Error>>,
    pattern: &str,
) -> Result<&'static Regex, ExtractError> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| ExtractError::Pattern(e.to_string()))
}
