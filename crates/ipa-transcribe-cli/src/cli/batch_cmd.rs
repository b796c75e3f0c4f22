//! `ipa-transcribe batch`: one phrase per input line, tab-separated output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use ipa_transcribe::{split_phrase, Transcriber};

use crate::config::Settings;

/// Run the batch command over `input`, or stdin when absent.
pub async fn run(settings: &Settings, input: Option<&Path>, fold_case: bool) -> Result<()> {
    let transcriber = super::transcriber(settings)?;
    let stdout = std::io::stdout();

    let count = match input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            let reader = BufReader::new(file);
            transcribe_lines(&transcriber, reader, settings, fold_case, &mut stdout.lock()).await?
        }
        None => {
            let reader = BufReader::new(tokio::io::stdin());
            transcribe_lines(&transcriber, reader, settings, fold_case, &mut stdout.lock()).await?
        }
    };

    tracing::info!("transcribed {count} lines");
    Ok(())
}

/// Write `<line>\t<transcription>` for every non-blank line of `reader`.
/// Returns the number of lines written.
pub async fn transcribe_lines<R, W>(
    transcriber: &Transcriber,
    reader: R,
    settings: &Settings,
    fold_case: bool,
    out: &mut W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let options = settings.composition();
    let mut lines = reader.lines();
    let mut count = 0;

    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let words = split_phrase(text, fold_case);
        let transcription = transcriber
            .compose(words.as_slice(), settings.language, &options)
            .await;
        writeln!(out, "{text}\t{transcription}").context("failed to write output")?;
        count += 1;
    }
    Ok(count)
}
