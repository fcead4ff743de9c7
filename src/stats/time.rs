use crate::data::model::{Dataset, Month, Weekday};

use super::mode_index;

// ---------------------------------------------------------------------------
// TravelTimeStats – most frequent month / weekday / start hour
// ---------------------------------------------------------------------------

/// Bucket counts over the start timestamps of a trip log.
#[derive(Debug)]
pub struct TravelTimeStats {
    /// Trips per calendar month, January first.
    pub month_counts: [u64; 12],
    /// Trips per weekday, Saturday first.
    pub weekday_counts: [u64; 7],
    /// Trips per start hour of day.
    pub hour_counts: [u64; 24],
}

impl TravelTimeStats {
    /// Count every ride's start month, weekday, and hour.
    pub fn compute(dataset: &Dataset) -> Self {
        let mut month_counts = [0u64; 12];
        let mut weekday_counts = [0u64; 7];
        let mut hour_counts = [0u64; 24];

        for ride in &dataset.rides {
            month_counts[ride.start_month() as usize - 1] += 1;
            weekday_counts[ride.start_weekday().rank() as usize - 1] += 1;
            hour_counts[ride.start_hour() as usize] += 1;
        }

        Self {
            month_counts,
            weekday_counts,
            hour_counts,
        }
    }

    /// Most common start month with its trip count.
    pub fn top_month(&self) -> Option<(Month, u64)> {
        mode_index(&self.month_counts).map(|(index, count)| (Month::from_index(index), count))
    }

    /// Most common start weekday with its trip count.
    pub fn top_weekday(&self) -> Option<(Weekday, u64)> {
        mode_index(&self.weekday_counts).map(|(index, count)| (Weekday::from_index(index), count))
    }

    /// Most common start hour (0–23) with its trip count.
    pub fn top_hour(&self) -> Option<(u32, u64)> {
        mode_index(&self.hour_counts).map(|(index, count)| (index as u32, count))
    }
}

/// Render an hour of day (0–23) in 12-hour AM/PM form.
/// Hours 0 and 12 both render as "12".
pub fn hour_label(hour24: u32) -> String {
    let suffix = if hour24 >= 12 { "PM" } else { "AM" };
    let mut hour12 = if hour24 > 12 { hour24 - 12 } else { hour24 };
    if hour12 == 0 {
        hour12 = 12;
    }
    format!("{hour12} {suffix}")
}
