//! CLI handler for `ipa-transcribe languages`.

use anyhow::Result;
use serde_json::json;

use ipa_transcribe::Language;

pub fn run(as_json: bool) -> Result<()> {
    if as_json {
        let list: Vec<_> = Language::ALL
            .iter()
            .map(|l| json!({ "id": l.id(), "name": l.display_name() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for language in Language::ALL {
            println!("  {:<10} {}", language.id(), language.display_name());
        }
    }
    Ok(())
}
