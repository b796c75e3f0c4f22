//! Polish Wiktionary: spans carrying the site's fixed IPA tooltip.

use async_trait::async_trait;

use super::{from_html, node_text, select_tokens, Extractor};
use crate::document::ElementQuery;
use crate::fetch::{MarkupFetcher, Source};
use crate::types::Lookup;

pub const SOURCE: Source = Source::Html {
    base: "https://pl.wiktionary.org/wiki/",
};

/// Tooltip the site puts on every IPA transcription.
pub const IPA_CAPTION: &str = "To jest wymowa w zapisie IPA; zobacz hasło IPA w Wikipedii";

const TRANSCRIPTION: ElementQuery = ElementQuery::tag(&"span").with_attr("title", IPA_CAPTION);

#[derive(Debug, Clone, Copy)]
pub struct Polish;

#[async_trait]
impl Extractor for Polish {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use crate::types::Miss;

    #[test]
    fn test_caption_must_match_exactly() {
        let html = format!(
            r#"<dd>wymowa: <span title="{}">[ˈmawɨ]</span>,
               <span title="IPA">[x]</span></dd>"#,
            IPA_CAPTION
        );
        let fetcher = StaticFetcher::new()
            .with_page(SOURCE, "mały", html)
            .with_page(SOURCE, "pusty", "<p>brak</p>");
        tokio_test::block_on(async {
            assert_eq!(
                Polish.lookup(&fetcher, "mały", true).await,
                Lookup::Found(vec!["ˈmawɨ".to_string()])
            );
            assert_eq!(
                Polish.lookup(&fetcher, "pusty", true).await,
                Lookup::Missing(Miss::NoMatch)
            );
        });
    }
}
