//! French Wiktionary: `<span title="Prononciation API">` on the rendered page.
//!
//! Pages mix languages, inflection tables and etymologies, so a match is kept
//! only if all of these hold:
//!
//! - the nearest preceding `span.sectionlangue` is French (or absent);
//! - it is not inside a `table.flextable` (forms of other words);
//! - the nearest preceding heading is not an etymology heading.

use async_trait::async_trait;

use super::{from_html, node_text, select_tokens, Extractor};
use crate::document::{DocumentNode, ElementQuery};
use crate::fetch::{MarkupFetcher, Source};
use crate::types::Lookup;

pub const SOURCE: Source = Source::Html {
    base: "https://fr.wiktionary.org/wiki/",
};

const PRONUNCIATION: ElementQuery =
    ElementQuery::tag(&"span").with_attr("title", "Prononciation API");
const LANGUAGE_SECTION: ElementQuery = ElementQuery::tag(&"span").with_class("sectionlangue");
const FORMS_TABLE: ElementQuery = ElementQuery::tag(&"table").with_class("flextable");
const HEADING: ElementQuery = ElementQuery::tags(&["h1", "h2", "h3", "h4", "h5", "h6"]);

const FRENCH_SECTION_ID: &str = "fr";

#[derive(Debug, Clone, Copy)]
pub struct French;

#[async_trait]
impl Extractor for French {
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
            select_tokens(
                document,
                &PRONUNCIATION,
                |n| is_french_pronunciation(n),
                |n| node_text(n),
            )
        })
        .await
    }
}

/// Whether a pronunciation element belongs to the French entry proper.
pub fn is_french_pronunciation<N: DocumentNode>(node: &N) -> bool {
    if let Some(section) = node.find_previous(&LANGUAGE_SECTION) {
        if let Some(id) = section.attr("id").filter(|id| !id.is_empty()) {
            if id != FRENCH_SECTION_ID {
                return false;
            }
        }
    }
    if node.closest(&FORMS_TABLE).is_some() {
        return false;
    }
    !node
        .find_previous(&HEADING)
        .is_some_and(|heading| is_etymology_heading(&heading))
}

fn is_etymology_heading<N: DocumentNode>(heading: &N) -> bool {
    let title = heading.text().trim().to_lowercase();
    title.starts_with("étymologie") || title.starts_with("etymologie")
}
