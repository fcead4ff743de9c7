use std::collections::BTreeMap;

use crate::data::model::Dataset;

use super::most_common;

// ---------------------------------------------------------------------------
// UserStats – rider demographics
// ---------------------------------------------------------------------------

/// Rides per user-type and gender category, plus the birth-year range and
/// mode. Blank cells are excluded from the counts; categories iterate in
/// sorted order. Only computed for datasets carrying the demographic
/// columns (the caller skips Washington entirely).
#[derive(Debug)]
pub struct UserStats {
    pub user_type_counts: BTreeMap<String, u64>,
    pub gender_counts: BTreeMap<String, u64>,
    pub birth_years: Option<BirthYearStats>,
}

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl UserStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let mut user_type_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut gender_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut year_counts: BTreeMap<i32, u64> = BTreeMap::new();

        for ride in &dataset.rides {
            if let Some(user_type) = &ride.user_type {
                *user_type_counts.entry(user_type.clone()).or_insert(0) += 1;
            }
            if let Some(gender) = &ride.gender {
                *gender_counts.entry(gender.clone()).or_insert(0) += 1;
            }
            if let Some(year) = ride.birth_year {
                *year_counts.entry(year).or_insert(0) += 1;
            }
        }

        let birth_years = match (
            year_counts.first_key_value(),
            year_counts.last_key_value(),
            most_common(&year_counts),
        ) {
            (Some((&earliest, _)), Some((&most_recent, _)), Some((mode_year, _))) => {
                Some(BirthYearStats {
                    earliest,
                    most_recent,
                    most_common: mode_year,
                })
            }
            _ => None,
        };

        Self {
            user_type_counts,
            gender_counts,
            birth_years,
        }
    }
}
