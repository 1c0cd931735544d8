//! JSON adapter between the rating model and the files the binary reads and writes.
//! Records are taken as given: no renaming, deduplication or normalization happens here.

pub mod error;
pub mod export;
pub mod loader;

pub use error::DatasetError;
pub use export::{write_leaderboard, write_snapshots, OutputFormat};
pub use loader::{filter_by_level, load_events, parse_events};
