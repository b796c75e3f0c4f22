//! English Wiktionary: `{{IPA|en|...}}` templates with accent preference.
//!
//! A pronunciation line looks like
//! `* {{a|RP|GA}} {{enPR|băk}}, {{IPA|en|/bæk/|[bæk]|a=RP}}`. Accent labels
//! come from the `{{a|...}}` template in front of the IPA template and from
//! its `a=` field. Every (accent, IPA) pair is collected in page order; the
//! caller's preference list then decides which pairs survive.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use super::{cached_pattern, from_wikitext, Extractor};
use crate::error::ExtractError;
use crate::fetch::{MarkupFetcher, Source};
use crate::normalize::clean_candidates;
use crate::types::Lookup;

pub const SOURCE: Source = Source::Wikitext {
    api: "https://en.wiktionary.org/w/api.php",
};

/// Accent preference, most preferred first; `None` is an unlabelled entry.
pub type AccentPreference = &'static [Option<&'static str>];

pub const BRITISH_ACCENTS: AccentPreference = &[Some("RP"), Some("UK"), None];
pub const AMERICAN_ACCENTS: AccentPreference = &[Some("US"), Some("GA"), Some("GenAm"), None];

pub static BRITISH: English = English::new(BRITISH_ACCENTS);
pub static AMERICAN: English = English::new(AMERICAN_ACCENTS);

const TEMPLATE_PATTERN: &str = concat!(
    r"(?:\{\{a(?:ccent)?\|(?P<accent>[^}]*)\}\}\s*)?",
    r"(?:\{\{enPR\|(?P<respelling>[^}]*)\}\},?\s*)?",
    r"\{\{IPA\|en\|(?P<body>[^}]*)\}\}",
);

static TEMPLATE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// English extractor parameterised by accent preference.
#[derive(Debug, Clone, Copy)]
pub struct English {
    preferences: AccentPreference,
}

impl English {
    pub const fn new(preferences: AccentPreference) -> Self {
        Self { preferences }
    }
}

#[async_trait]
impl Extractor for English {
    fn source(&self) -> Source {
        SOURCE
    }

    async fn lookup(
        &self,
        fetcher: &dyn MarkupFetcher,
        word: &str,
        strip_syllable_separator: bool,
    ) -> Lookup {
        let preferences = self.preferences;
        from_wikitext(fetcher, SOURCE, word, move |wikitext| {
            transcriptions(wikitext, preferences, strip_syllable_separator)
        })
        .await
    }
}

/// One `{{IPA|en|...}}` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Empty for an unaccented entry.
    accents: Vec<String>,
    ipa: Vec<String>,
}

/// Candidates from English wikitext under the given accent preference.
pub fn transcriptions(
    wikitext: &str,
    preferences: AccentPreference,
    strip_syllable_separator: bool,
) -> Result<Vec<String>, ExtractError> {
    let entries = parse_entries(wikitext)?;
    let pairs = accent_pairs(&entries);
    let selected = select_preferred(&pairs, preferences);
    Ok(clean_candidates(selected, strip_syllable_separator))
}

fn parse_entries(wikitext: &str) -> Result<Vec<Entry>, ExtractError> {
    let pattern = cached_pattern(&TEMPLATE, TEMPLATE_PATTERN)?;

    let mut entries = Vec::new();
    for caps in pattern.captures_iter(wikitext) {
        let mut labels: Vec<String> = caps
            .name("accent")
            .map(|m| positional_fields(m.as_str()).map(str::to_string).collect())
            .unwrap_or_default();

        let mut ipa = Vec::new();
        let body = caps.name("body").map_or("", |m| m.as_str());
        for field in body.split('|').map(str::trim).filter(|f| !f.is_empty()) {
            match named_field(field) {
                Some(("a", value)) => labels.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|a| !a.is_empty())
                        .map(str::to_string),
                ),
                Some(_) => {}
                None => ipa.push(field.to_string()),
            }
        }

        // Dialect notes ("Northern England:") are not accents.
        let had_labels = !labels.is_empty();
        labels.retain(|label| !label.ends_with(':'));
        if had_labels && labels.is_empty() {
            continue;
        }

        if !ipa.is_empty() {
            entries.push(Entry {
                accents: labels,
                ipa,
            });
        }
    }
    Ok(entries)
}

/// Positional (non `key=value`) fields of a template body.
fn positional_fields(body: &str) -> impl Iterator<Item = &str> {
    body.split('|')
        .map(str::trim)
        .filter(|f| !f.is_empty() && named_field(f).is_none())
}

/// Split `key=value` when `key` looks like a template parameter name.
fn named_field(field: &str) -> Option<(&str, &str)> {
    let (key, value) = field.split_once('=')?;
    let key = key.trim();
    let is_name =
        !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_name.then_some((key, value.trim()))
}

/// Cross product of each entry's accents and IPA strings, in page order.
fn accent_pairs(entries: &[Entry]) -> Vec<(Option<&str>, &str)> {
    let mut pairs = Vec::new();
    for entry in entries {
        if entry.accents.is_empty() {
            pairs.extend(entry.ipa.iter().map(|ipa| (None, ipa.as_str())));
        } else {
            for accent in &entry.accents {
                pairs.extend(
                    entry
                        .ipa
                        .iter()
                        .map(|ipa| (Some(accent.as_str()), ipa.as_str())),
                );
            }
        }
    }
    pairs
}

/// Pairs grouped by preference order. When nothing matches, the group of the
/// first accent seen on the page is returned instead.
fn select_preferred<'p>(
    pairs: &[(Option<&str>, &'p str)],
    preferences: AccentPreference,
) -> Vec<&'p str> {
    let mut selected = Vec::new();
    for preferred in preferences {
        selected.extend(
            pairs
                .iter()
                .filter(|(accent, _)| accent == preferred)
                .map(|(_, ipa)| *ipa),
        );
    }

    if selected.is_empty() {
        if let Some((first_accent, _)) = pairs.first() {
            selected = pairs
                .iter()
                .filter(|(accent, _)| accent == first_accent)
                .map(|(_, ipa)| *ipa)
                .collect();
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use crate::types::Miss;

    const CHARCOAL: &str = "\
==English==
===Pronunciation===
* {{a|RP}} {{IPA|en|/ˈtʃɑː.kəʊl/}}
* {{a|GA}} {{IPA|en|/ˈt͡ʃɑɹ.koʊl/}}
* {{audio|en|en-us-charcoal.ogg|Audio (US)}}

==French==
* {{IPA|fr|/ʃaʁ.kɔl/}}
";

    const BACK: &str = "* {{a|RP|GA}} {{IPA|en|/bæk/|[bæk]|[bak]|[-k̚]|[-ˀk]}}";

    const HILL: &str = "* {{enPR|hĭl}}, {{IPA|en|/hɪl/|[hɪɫ]}}";

    const SCHEDULE: &str = "\
* {{IPA|en|/ˈʃɛd.juːl/|a=RP}}
* {{IPA|en|/ˈskɛd͡ʒ.ʊl/|/ˈskɛd͡ʒ.uːl/|a=GA,Canada}}
* {{IPA|en|/ˈʃɛd͡ʒ.uːl/|a=UK}}
";

    #[test]
    fn test_accent_template_selects_variant() {
        assert_eq!(
            transcriptions(CHARCOAL, BRITISH_ACCENTS, true).unwrap(),
            vec!["ˈtʃɑːkəʊl"]
        );
        assert_eq!(
            transcriptions(CHARCOAL, AMERICAN_ACCENTS, false).unwrap(),
            vec!["ˈt͡ʃɑɹ.koʊl"]
        );
    }

    #[test]
    fn test_shared_accents_keep_every_variant_once() {
        let expected = vec!["bæk", "bak", "-k̚", "-ˀk"];
        assert_eq!(transcriptions(BACK, BRITISH_ACCENTS, true).unwrap(), expected);
        assert_eq!(transcriptions(BACK, AMERICAN_ACCENTS, true).unwrap(), expected);
    }

    #[test]
    fn test_respelling_prefix_and_unaccented_entry() {
        assert_eq!(
            transcriptions(HILL, AMERICAN_ACCENTS, true).unwrap(),
            vec!["hɪl", "hɪɫ"]
        );
    }

    #[test]
    fn test_named_accent_field_and_preference_order() {
        // RP before UK for British.
        assert_eq!(
            transcriptions(SCHEDULE, BRITISH_ACCENTS, true).unwrap(),
            vec!["ˈʃɛdjuːl", "ˈʃɛd͡ʒuːl"]
        );
        assert_eq!(
            transcriptions(SCHEDULE, AMERICAN_ACCENTS, true).unwrap(),
            vec!["ˈskɛd͡ʒʊl", "ˈskɛd͡ʒuːl"]
        );
    }

    #[test]
    fn test_unknown_accents_fall_back_to_first_group() {
        let text = "\
* {{a|Scotland}} {{IPA|en|/dɔg/}}
* {{a|Ireland}} {{IPA|en|/dɑg/}}
* {{a|Scotland}} {{IPA|en|/dɔːg/}}
";
        assert_eq!(
            transcriptions(text, BRITISH_ACCENTS, true).unwrap(),
            vec!["dɔg", "dɔːg"]
        );
    }

    #[test]
    fn test_dialect_notes_are_skipped() {
        let text = "\
* {{a|Northern England:}} {{IPA|en|/ʊp/}}
* {{IPA|en|/ʌp/}}
";
        assert_eq!(transcriptions(text, BRITISH_ACCENTS, true).unwrap(), vec!["ʌp"]);
    }

    #[test]
    fn test_no_english_section_yields_nothing() {
        let text = "==French==\n* {{fr-IPA}}\n* {{IPA|fr|/ɑ̃.mə.ne/}}";
        assert!(transcriptions(text, BRITISH_ACCENTS, true).unwrap().is_empty());
    }

    #[test]
    fn test_named_field() {
        assert_eq!(named_field("a=RP,GA"), Some(("a", "RP,GA")));
        assert_eq!(named_field("qq=rare"), Some(("qq", "rare")));
        assert_eq!(named_field("/bæk/"), None);
    }

    #[test]
    fn test_lookup_through_fetcher() {
        let fetcher = StaticFetcher::new().with_page(SOURCE, "charcoal", CHARCOAL);
        tokio_test::block_on(async {
            let found = BRITISH.lookup(&fetcher, "charcoal", true).await;
            assert_eq!(found, Lookup::Found(vec!["ˈtʃɑːkəʊl".to_string()]));

            let missing = BRITISH.lookup(&fetcher, "nosuchword", true).await;
            assert_eq!(missing, Lookup::Missing(Miss::NoContent));
            assert!(BRITISH.extract(&fetcher, "nosuchword", true).await.is_empty());
        });
    }
}
