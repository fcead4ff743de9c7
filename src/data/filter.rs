use super::model::{Dataset, Month, RideRecord, Weekday};

// ---------------------------------------------------------------------------
// TripFilter – optional month / weekday predicates
// ---------------------------------------------------------------------------

/// Month and weekday restriction applied to a loaded dataset.
/// `None` on either axis means "all" (no restriction).
#[derive(Debug, Clone, Copy, Default)]
pub struct TripFilter {
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
}

impl TripFilter {
    pub fn new(month: Option<Month>, weekday: Option<Weekday>) -> Self {
        Self { month, weekday }
    }

    /// Whether a single ride passes both active predicates.
    pub fn matches(&self, ride: &RideRecord) -> bool {
        if let Some(month) = self.month {
            if ride.start_month() != month.number() {
                return false;
            }
        }
        if let Some(weekday) = self.weekday {
            if ride.start_weekday() != weekday {
                return false;
            }
        }
        true
    }

    /// Narrow `dataset` to the rides passing the filter, preserving the
    /// original row order. An empty result is valid and flows through to
    /// the aggregators unchanged.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        Dataset {
            city: dataset.city,
            has_demographics: dataset.has_demographics,
            rides: dataset
                .rides
                .iter()
                .filter(|ride| self.matches(ride))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::City;

    fn ride(y: i32, m: u32, d: u32, h: u32) -> RideRecord {
        let start_time = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        RideRecord {
            start_time,
            end_time: start_time + chrono::Duration::seconds(600),
            duration_secs: 600,
            start_station: "Adams St".to_string(),
            end_station: "Belmont Ave".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            city: City::Chicago,
            rides: vec![
                ride(2017, 1, 1, 0),  // Sunday
                ride(2017, 1, 2, 9),  // Monday
                ride(2017, 1, 7, 12), // Saturday
                ride(2017, 2, 3, 8),  // Friday
                ride(2017, 2, 11, 14), // Saturday
            ],
            has_demographics: true,
        }
    }

    #[test]
    fn no_filter_keeps_everything_in_order() {
        let ds = dataset();
        let filtered = TripFilter::default().apply(&ds);
        assert_eq!(filtered.len(), ds.len());
        for (kept, original) in filtered.rides.iter().zip(&ds.rides) {
            assert_eq!(kept.start_time, original.start_time);
        }
    }

    #[test]
    fn month_filter_keeps_only_matching_rows() {
        let ds = dataset();
        let filter = TripFilter::new(Some(Month::January), None);
        let filtered = filter.apply(&ds);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.len() <= ds.len());
        assert!(filtered.rides.iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn combined_filters_intersect() {
        let ds = dataset();
        let filter = TripFilter::new(Some(Month::January), Some(Weekday::Saturday));
        let filtered = filter.apply(&ds);
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered.rides[0].start_time.date(),
            NaiveDate::from_ymd_opt(2017, 1, 7).unwrap()
        );
    }

    #[test]
    fn empty_result_is_valid() {
        let ds = dataset();
        let filtered = TripFilter::new(Some(Month::December), None).apply(&ds);
        assert!(filtered.is_empty());
        assert_eq!(filtered.city, ds.city);
        assert!(filtered.has_demographics);
    }
}
