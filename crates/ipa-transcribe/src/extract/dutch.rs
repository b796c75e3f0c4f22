//! Dutch Wiktionary: every `span.IPAtekst` on the rendered page.

use async_trait::async_trait;

use super::{from_html, node_text, select_tokens, Extractor};
use crate::document::ElementQuery;
use crate::fetch::{MarkupFetcher, Source};
use crate::types::Lookup;

pub const SOURCE: Source = Source::Html {
    base: "https://nl.wiktionary.org/wiki/",
};

const TRANSCRIPTION: ElementQuery = ElementQuery::tag(&"span").with_class("IPAtekst");

#[derive(Debug, Clone, Copy)]
pub struct Dutch;

#[async_trait]
impl Extractor for Dutch {
    fn source(&self) -> Source {
        SOURCE
    }

    async fn lookup(
        &self,
        fetcher: &dyn MarkupFetcher,
        word: &str,
        strip_syllable_separator: bool,
    ) -> Lookup {
        from_html(fetcher, SOURCE, word, strip_syllable_separator, |document| {
            select_tokens(document, &TRANSCRIPTION, |_| true, |n| node_text(n))
        })
        .await
    }
}
