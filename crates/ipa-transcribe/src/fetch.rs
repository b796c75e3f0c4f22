//! Markup retrieval.
//!
//! A fetcher turns a word and a [`Source`] into raw markup. Every failure
//! (transport error, non-2xx status, malformed API payload) collapses to
//! `None`: extractors treat a missing page the same way whatever the cause.
//! One best-effort GET per word, no retry.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::TranscribeResult;

/// User agent sent when the caller does not configure one.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "ipa-transcribe/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/ipa-transcribe/ipa-transcribe)"
);

/// Where a language's dictionary markup lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// MediaWiki parse API returning the page's wikitext.
    Wikitext { api: &'static str },
    /// Rendered page at `base` + word.
    Html { base: &'static str },
}

impl Source {
    /// Request URL for `word`.
    pub fn url(&self, word: &str) -> TranscribeResult<Url> {
        match self {
            Source::Wikitext { api } => {
                let mut url = Url::parse(api)?;
                url.query_pairs_mut()
                    .append_pair("action", "parse")
                    .append_pair("page", word)
                    .append_pair("format", "json")
                    .append_pair("prop", "wikitext");
                Ok(url)
            }
            Source::Html { base } => {
                let mut url = Url::parse(base)?;
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(word);
                }
                Ok(url)
            }
        }
    }
}

/// Capability to retrieve raw markup for a word.
#[async_trait]
pub trait MarkupFetcher: Send + Sync {
    /// Wikitext or HTML for `word`, or `None` when nothing usable came back.
    async fn fetch(&self, source: Source, word: &str) -> Option<String>;
}

/// Fetcher backed by a reqwest client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    /// Scheme, host and port every request is rebased onto.
    origin: Option<Url>,
}

impl HttpFetcher {
    /// Build a fetcher with the given user agent and the transport's default timeouts.
    pub fn new(user_agent: &str) -> TranscribeResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            origin: None,
        })
    }

    /// Send every request to `origin` instead of the dictionary site, keeping
    /// path and query.
    pub fn with_origin(mut self, origin: &str) -> TranscribeResult<Self> {
        self.origin = Some(Url::parse(origin)?);
        Ok(self)
    }

    fn request_url(&self, source: Source, word: &str) -> Option<Url> {
        let mut url = match source.url(word) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("cannot build request URL for {word:?}: {e}");
                return None;
            }
        };
        if let Some(origin) = &self.origin {
            let rebased = url.set_scheme(origin.scheme()).is_ok()
                && url.set_host(origin.host_str()).is_ok()
                && url.set_port(origin.port()).is_ok();
            if !rebased {
                tracing::debug!("cannot rebase {url} onto {origin}");
                return None;
            }
        }
        Some(url)
    }
}

#[async_trait]
impl MarkupFetcher for HttpFetcher {
    async fn fetch(&self, source: Source, word: &str) -> Option<String> {
        let url = self.request_url(source, word)?;

        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("GET {url} failed: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {url} returned {status}");
            return None;
        }

        match source {
            Source::Html { .. } => match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::debug!("reading body of {url} failed: {e}");
                    None
                }
            },
            Source::Wikitext { .. } => match response.json::<Value>().await {
                Ok(payload) => {
                    let wikitext = wikitext_from_payload(&payload);
                    if wikitext.is_none() {
                        tracing::debug!("no wikitext in payload from {url}");
                    }
                    wikitext
                }
                Err(e) => {
                    tracing::debug!("malformed JSON from {url}: {e}");
                    None
                }
            },
        }
    }
}

/// Pull `parse.wikitext.*` out of a MediaWiki parse response.
fn wikitext_from_payload(payload: &Value) -> Option<String> {
    payload
        .pointer("/parse/wikitext/*")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// In-memory fetcher serving fixed markup.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<(Source, String), String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `markup` for `word` from `source`.
    ///
    /// Wikitext sources take the bare wikitext, not the API envelope.
    pub fn with_page(mut self, source: Source, word: &str, markup: impl Into<String>) -> Self {
        self.insert(source, word, markup);
        self
    }

    pub fn insert(&mut self, source: Source, word: &str, markup: impl Into<String>) {
        self.pages.insert((source, word.to_string()), markup.into());
    }
}

#[async_trait]
impl MarkupFetcher for StaticFetcher {
    async fn fetch(&self, source: Source, word: &str) -> Option<String> {
        self.pages.get(&(source, word.to_string())).cloned()
    }
}
