//! Russian Wiktionary: every `span.IPA` on the rendered page, in page order.

use async_trait::async_trait;

use super::{from_html, node_text, select_tokens, Extractor};
use crate::document::ElementQuery;
use crate::fetch::{MarkupFetcher, Source};
use crate::types::Lookup;

pub const SOURCE: Source = Source::Html {
    base: "https://ru.wiktionary.org/wiki/",
};

const TRANSCRIPTION: ElementQuery = ElementQuery::tag(&"span").with_class("IPA");

#[derive(Debug, Clone, Copy)]
pub struct Russian;

#[async_trait]
impl Extractor for Russian {
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

    #[test]
    fn test_ipa_spans_in_page_order() {
        let html = r#"
        <p>МФА: <span class="IPA">[spɐˈsʲi.bə]</span></p>
        <table><tr><td><span class="IPA">[spɐˈsʲi.bə]</span></td></tr></table>
        <p><span class="IPA transcription">[ˈspasʲ]</span> <span class="ipa">[x]</span></p>
        "#;
        let fetcher = StaticFetcher::new().with_page(SOURCE, "спасибо", html);
        tokio_test::block_on(async {
            assert_eq!(
                Russian.extract(&fetcher, "спасибо", true).await,
                vec!["spɐˈsʲibə".to_string(), "ˈspasʲ".to_string()]
            );
        });
    }
}
