use std::fs;
use std::path::Path;

use creator_ui_layout::LayoutEvent;
use thiserror::Error;

/// Errors emitted while reading an event script.
#[derive(Debug, Error)]
pub(crate) enum ScriptError {
    #[error("script IO failed")]
    Io(#[from] std::io::Error),
    #[error("script JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of layout events.
pub(crate) fn load_script(
    path: &Path,
) -> Result<Vec<LayoutEvent>, ScriptError> {
    let data = fs::read_to_string(path)?;
    let events = parse_script(&data)?;
    log::info!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

pub(crate) fn parse_script(
    data: &str,
) -> Result<Vec<LayoutEvent>, ScriptError> {
    Ok(serde_json::from_str(data)?)
}
