use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path
};

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::{
    dataset::error::DatasetError,
    model::structures::{player_rating::LeaderboardEntry, rating_snapshot::RatingSnapshot}
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A single pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    JsonLines
}

pub fn write_snapshots(path: &Path, snapshots: &[RatingSnapshot], format: OutputFormat) -> Result<(), DatasetError> {
    write_records(path, snapshots, format)?;
    info!(path = %path.display(), records = snapshots.len(), "Wrote rating timeseries");

    Ok(())
}

pub fn write_leaderboard(path: &Path, entries: &[LeaderboardEntry], format: OutputFormat) -> Result<(), DatasetError> {
    write_records(path, entries, format)?;
    info!(path = %path.display(), records = entries.len(), "Wrote leaderboard");

    Ok(())
}

fn write_records<T: Serialize>(path: &Path, records: &[T], format: OutputFormat) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DatasetError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let serialize_error = |source| DatasetError::Serialize {
        path: path.to_path_buf(),
        source
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records).map_err(serialize_error)?;
            writeln!(writer).map_err(|e| DatasetError::io(path, e))?;
        }
        OutputFormat::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut writer, record).map_err(serialize_error)?;
                writeln!(writer).map_err(|e| DatasetError::io(path, e))?;
            }
        }
    }

    writer.flush().map_err(|e| DatasetError::io(path, e))
}
