use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{dataset::error::DatasetError, model::structures::match_event::MatchEvent};

/// Reads match records from a JSON array or a JSON-lines file.
pub fn load_events(path: &Path) -> Result<Vec<MatchEvent>, DatasetError> {
    info!(path = %path.display(), "Loading matches...");
    let contents = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;

    let events = parse_events(path, &contents)?;
    info!(matches = events.len(), "Matches loaded");

    Ok(events)
}

/// Parses file contents. A leading `[` selects the JSON array form; anything
/// else is read line by line, skipping blank lines.
pub fn parse_events(path: &Path, contents: &str) -> Result<Vec<MatchEvent>, DatasetError> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source
        });
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| DatasetError::JsonLine {
                path: path.to_path_buf(),
                line: i + 1,
                source
            })
        })
        .collect()
}

/// Keeps only matches from tournaments of the given level (e.g. `G` for Grand Slams).
/// Matches without a level are dropped.
pub fn filter_by_level(events: Vec<MatchEvent>, level: &str) -> Vec<MatchEvent> {
    let total = events.len();
    let kept: Vec<MatchEvent> = events
        .into_iter()
        .filter(|e| e.tourney_level.as_deref() == Some(level))
        .collect();

    debug!(tourney_level = level, kept = kept.len(), dropped = total - kept.len(), "Filtered matches by level");
    kept
}
