use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// DurationStats – total and mean trip duration
// ---------------------------------------------------------------------------

/// Total and mean trip duration in whole seconds. The mean is truncated,
/// never rounded, and absent when there are no rides.
#[derive(Debug, PartialEq, Eq)]
pub struct DurationStats {
    pub ride_count: usize,
    pub total_secs: i64,
    pub mean_secs: Option<i64>,
}

impl DurationStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let ride_count = dataset.len();
        let total_secs: i64 = dataset.rides.iter().map(|ride| ride.duration_secs).sum();
        let mean_secs = if ride_count == 0 {
            None
        } else {
            Some((total_secs as f64 / ride_count as f64) as i64)
        };
        Self {
            ride_count,
            total_secs,
            mean_secs,
        }
    }
}

/// Render a second count as days / hours / minutes, discarding the seconds
/// remainder: `"1 days, 2 hours, and 41 minutes"`, `"4 hours and 26
/// minutes"`, or `"5 minutes"`.
pub fn format_duration(total_secs: i64) -> String {
    let days = total_secs / 86_400;
    let mut left = total_secs % 86_400;
    let hours = left / 3_600;
    left %= 3_600;
    let mins = left / 60;

    if days > 0 {
        format!("{days} days, {hours} hours, and {mins} minutes")
    } else if hours > 0 {
        format!("{hours} hours and {mins} minutes")
    } else {
        format!("{mins} minutes")
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::{City, RideRecord};

    fn ride(duration_secs: i64) -> RideRecord {
        let start_time = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        RideRecord {
            start_time,
            end_time: start_time + chrono::Duration::seconds(duration_secs),
            duration_secs,
            start_station: "Adams St".to_string(),
            end_station: "Belmont Ave".to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn format_duration_picks_the_right_shape() {
        assert_eq!(format_duration(90), "1 minutes");
        assert_eq!(format_duration(3660), "1 hours and 1 minutes");
        assert_eq!(format_duration(90061), "1 days, 1 hours, and 1 minutes");
    }

    #[test]
    fn seconds_remainder_is_discarded_not_rounded() {
        assert_eq!(format_duration(59), "0 minutes");
        assert_eq!(format_duration(119), "1 minutes");
    }

    #[test]
    fn mean_truncates_toward_zero() {
        let dataset = Dataset {
            city: City::Chicago,
            rides: vec![ride(100), ride(101), ride(101)],
            has_demographics: false,
        };
        let stats = DurationStats::compute(&dataset);
        assert_eq!(stats.total_secs, 302);
        assert_eq!(stats.mean_secs, Some(100)); // 100.67 truncated
    }

    #[test]
    fn empty_dataset_has_no_mean() {
        let dataset = Dataset {
            city: City::Chicago,
            rides: Vec::new(),
            has_demographics: false,
        };
        let stats = DurationStats::compute(&dataset);
        assert_eq!(stats.total_secs, 0);
        assert_eq!(stats.mean_secs, None);
    }
}
