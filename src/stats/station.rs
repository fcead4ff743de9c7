use std::collections::BTreeMap;

use crate::data::model::Dataset;

use super::most_common;

// ---------------------------------------------------------------------------
// StationStats – most popular start / end station and trip
// ---------------------------------------------------------------------------

/// Most frequent start station, end station, and (start, end) trip, each
/// with its occurrence count. Equal frequencies resolve to the first value
/// in sorted order. All `None` on an empty dataset.
#[derive(Debug)]
pub struct StationStats {
    pub top_start: Option<(String, u64)>,
    pub top_end: Option<(String, u64)>,
    pub top_trip: Option<(String, String, u64)>,
}

impl StationStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let mut starts: BTreeMap<&str, u64> = BTreeMap::new();
        let mut ends: BTreeMap<&str, u64> = BTreeMap::new();
        let mut trips: BTreeMap<(&str, &str), u64> = BTreeMap::new();

        for ride in &dataset.rides {
            *starts.entry(&ride.start_station).or_insert(0) += 1;
            *ends.entry(&ride.end_station).or_insert(0) += 1;
            *trips
                .entry((&ride.start_station, &ride.end_station))
                .or_insert(0) += 1;
        }

        Self {
            top_start: most_common(&starts).map(|(name, count)| (name.to_string(), count)),
            top_end: most_common(&ends).map(|(name, count)| (name.to_string(), count)),
            top_trip: most_common(&trips)
                .map(|((start, end), count)| (start.to_string(), end.to_string(), count)),
        }
    }
}
