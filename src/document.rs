use std::{fs, path::Path};

use crate::{
    error::AppResult,
    models::{ActionOutcome, InputDocument},
};

/// Reads and parses an input document
pub fn load_document(path: impl AsRef<Path>) -> AppResult<InputDocument> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let document: InputDocument = serde_json::from_str(&raw)?;

    tracing::info!(
        path = %path.display(),
        actions = document.commands.len(),
        "Input document loaded"
    );

    Ok(document)
}

/// Writes the outcomes as a pretty-printed JSON array
pub fn write_outcomes(path: impl AsRef<Path>, outcomes: &[ActionOutcome]) -> AppResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(outcomes)?;
    fs::write(path, json)?;

    tracing::info!(path = %path.display(), outcomes = outcomes.len(), "Results written");
    Ok(())
}
