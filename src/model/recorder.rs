use crate::model::structures::rating_snapshot::RatingSnapshot;

/// Append-only log of processed matches, in processing order.
#[derive(Debug, Default)]
pub struct TimeSeriesRecorder {
    snapshots: Vec<RatingSnapshot>
}

impl TimeSeriesRecorder {
    pub fn new() -> TimeSeriesRecorder {
        TimeSeriesRecorder::default()
    }

    pub fn record(&mut self, snapshot: RatingSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn snapshots(&self) -> &[RatingSnapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn into_snapshots(self) -> Vec<RatingSnapshot> {
        self.snapshots
    }
}
