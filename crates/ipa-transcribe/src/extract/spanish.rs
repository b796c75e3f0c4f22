//! Spanish Wiktionary: pronunciation tables on the rendered page.
//!
//! Each entry carries a `table.pron-graf` with label/value rows, e.g.
//! `pronunciación (AFI) | [e.teɾ.niˈðað]`. Only tables under a Spanish
//! level-2 heading count, and only two-column rows labelled as IPA.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use super::{cached_pattern, from_html, select_tokens, Extractor};
use crate::document::{DocumentNode, ElementQuery};
use crate::fetch::{MarkupFetcher, Source};
use crate::types::Lookup;

pub const SOURCE: Source = Source::Html {
    base: "https://es.wiktionary.org/wiki/",
};

const PRONUNCIATION_TABLE: ElementQuery = ElementQuery::tag(&"table").with_class("pron-graf");
const SECTION_HEADING: ElementQuery = ElementQuery::tag(&"h2");
const ROW: ElementQuery = ElementQuery::tag(&"tr");

const SPANISH_SECTION: &str = "Español";

/// Row labels marking an IPA value. The site writes "AFI"; "API" also occurs.
const IPA_LABELS: [&str; 2] = ["(AFI)", "(API)"];

const LEADING_BRACKET_PATTERN: &str = r"^\s*(\[[^\]]+\])";
static LEADING_BRACKET: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub struct Spanish;

#[async_trait]
impl Extractor for Spanish {
    fn source(&self) -> Source {
        SOURCE
    }

    async fn lookup(
        &self,
        fetcher: &dyn MarkupFetcher,
        word: &str,
        strip_syllable_separator: bool,
    ) -> Lookup {
        let pattern = match cached_pattern(&LEADING_BRACKET, LEADING_BRACKET_PATTERN) {
            Ok(p) => p,
            Err(e) => return Lookup::Failed(e),
        };
        from_html(fetcher, SOURCE, word, strip_syllable_separator, move |document| {
            select_tokens(
                document,
                &PRONUNCIATION_TABLE,
                |table| in_spanish_section(table),
                |table| table_transcriptions(table, pattern),
            )
        })
        .await
    }
}

/// Whether the nearest level-2 heading before `table` opens the Spanish entry.
pub fn in_spanish_section<N: DocumentNode>(table: &N) -> bool {
    table.find_previous(&SECTION_HEADING).is_some_and(|heading| {
        heading.text().contains(SPANISH_SECTION)
            || heading
                .find_all(&ElementQuery::tags(&["span"]))
                .iter()
                .chain(std::iter::once(&heading))
                .any(|n| n.attr("id").is_some_and(|id| id.starts_with(SPANISH_SECTION)))
    })
}

/// Bracketed IPA tokens from the table's labelled rows, in row order.
pub fn table_transcriptions<N: DocumentNode>(table: &N, leading_bracket: &Regex) -> Vec<String> {
    table
        .find_all(&ROW)
        .iter()
        .filter_map(|row| {
            let cells: Vec<N> = row
                .children()
                .into_iter()
                .filter(|c| c.tag() == "td" || c.tag() == "th")
                .collect();
            let [label, value] = cells.as_slice() else {
                return None;
            };
            let label = label.text();
            if !IPA_LABELS.iter().any(|l| label.contains(l)) {
                return None;
            }
            let value = value.text();
            leading_bracket
                .captures(&value)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
