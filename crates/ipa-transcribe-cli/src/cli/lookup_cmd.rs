//! `ipa-transcribe lookup <TEXT>...`: transcription of one phrase.

use anyhow::Result;
use serde_json::json;

use ipa_transcribe::split_phrase;

use crate::config::Settings;

/// Run the lookup command.
pub async fn run(settings: &Settings, text: &[String], fold_case: bool, as_json: bool) -> Result<()> {
    let transcriber = super::transcriber(settings)?;
    let source_text = text.join(" ");
    let words = split_phrase(&source_text, fold_case);

    let transcription = transcriber
        .compose(words.as_slice(), settings.language, &settings.composition())
        .await;

    if as_json {
        let out = json!({
            "text": source_text,
            "words": words,
            "language": settings.language,
            "transcription": transcription,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{transcription}");
    }
    Ok(())
}
