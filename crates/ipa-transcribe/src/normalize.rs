//! Candidate cleanup: markup delimiter stripping and order-preserving dedup.

use std::collections::HashSet;

/// Characters that delimit a transcription in dictionary markup.
const DELIMITERS: [char; 4] = ['/', ']', '[', '\\'];

/// Syllable boundary mark.
const SYLLABLE_SEPARATOR: char = '.';

/// Strip markup delimiters from a raw transcription token.
///
/// With `strip_syllable_separator`, `.` boundaries go as well.
pub fn normalize(raw: &str, strip_syllable_separator: bool) -> String {
    raw.chars()
        .filter(|c| !DELIMITERS.contains(c))
        .filter(|c| !(strip_syllable_separator && *c == SYLLABLE_SEPARATOR))
        .collect()
}

/// Remove exact duplicates, keeping first occurrences in their original order.
pub fn dedup<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Normalize raw tokens, drop the ones left empty, and dedup the rest.
pub fn clean_candidates<I, S>(raw: I, strip_syllable_separator: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedup(
        raw.into_iter()
            .map(|token| normalize(token.as_ref().trim(), strip_syllable_separator))
            .filter(|candidate| !candidate.is_empty()),
    )
}
