use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::model::{City, Dataset, RideRecord, TIMESTAMP_FORMAT};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a city file could not be loaded.
///
/// Any variant aborts the whole load; there is no partial-load recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: malformed record")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}, {column}: '{value}' does not match YYYY-MM-DD HH:MM:SS")]
    Timestamp {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One row as serde sees it. Extra columns (the files carry an unnamed
/// index column) are ignored; the demographic columns are missing entirely
/// from the Washington file and blank cells elsewhere decode as `None`.
#[derive(Debug, Deserialize)]
struct RawRide {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    /// Written as an integer in some files and a float in others.
    #[serde(rename = "Trip Duration")]
    duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawRide {
    fn into_ride(self, row: usize) -> Result<RideRecord, LoadError> {
        let start_time = parse_timestamp(&self.start_time, "Start Time", row)?;
        let end_time = parse_timestamp(&self.end_time, "End Time", row)?;
        Ok(RideRecord {
            start_time,
            end_time,
            duration_secs: self.duration as i64,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: self.user_type,
            gender: self.gender,
            birth_year: self.birth_year.map(|y| y as i32),
        })
    }
}

fn parse_timestamp(value: &str, column: &'static str, row: usize) -> Result<NaiveDateTime, LoadError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| LoadError::Timestamp {
        row,
        column,
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the full trip log for `city` from `data_dir`.
///
/// Row numbers in errors are 1-based data rows (the header is row 0).
pub fn load_city(city: City, data_dir: &Path) -> Result<Dataset, LoadError> {
    let path = data_dir.join(city.file_name());
    let mut reader = csv::Reader::from_path(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Record { row: 0, source })?;
    let has_demographics =
        headers.iter().any(|h| h == "Gender") && headers.iter().any(|h| h == "Birth Year");

    let mut rides = Vec::new();
    for (idx, result) in reader.deserialize::<RawRide>().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|source| LoadError::Record { row, source })?;
        rides.push(raw.into_ride(row)?);
    }

    log::info!("loaded {} rides from {}", rides.len(), path.display());

    Ok(Dataset {
        city,
        rides,
        has_demographics,
    })
}
