//! `ipa-transcribe config`: effective settings and where they came from.

use std::path::Path;

use anyhow::Result;

use crate::config::Settings;

pub fn run(path: &Path, settings: &Settings) -> Result<()> {
    let origin = if path.exists() { "" } else { " (not found, defaults)" };
    println!("Settings file: {}{origin}", path.display());
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
