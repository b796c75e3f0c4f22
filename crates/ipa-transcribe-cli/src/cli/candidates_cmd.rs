//! `ipa-transcribe candidates <WORD>`: every candidate for one word.

use anyhow::{bail, Result};

use ipa_transcribe::{Lookup, Miss};

use crate::config::Settings;

/// Run the candidates command.
pub async fn run(settings: &Settings, word: &str, as_json: bool) -> Result<()> {
    let transcriber = super::transcriber(settings)?;
    let language = settings.language;

    let candidates = match transcriber
        .lookup(word, language, settings.strip_syllable_separator)
        .await
    {
        Lookup::Found(candidates) => candidates,
        Lookup::Missing(Miss::NoContent) => {
            bail!("no {language} dictionary page for '{word}'")
        }
        Lookup::Missing(Miss::NoMatch) => {
            bail!("no {language} transcription on the page for '{word}'")
        }
        Lookup::Failed(e) => bail!("{language} extractor failed for '{word}': {e}"),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        for candidate in &candidates {
            println!("{candidate}");
        }
    }
    Ok(())
}
