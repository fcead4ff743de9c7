use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::data::filter::TripFilter;
use crate::data::loader;
use crate::data::model::Dataset;
use crate::prompt::{self, FilterSelection};
use crate::report;
use crate::stats::duration::DurationStats;
use crate::stats::station::StationStats;
use crate::stats::time::TravelTimeStats;
use crate::stats::user::UserStats;

/// Rows shown per page of the raw-trip viewer.
const PAGE_SIZE: usize = 5;

/// Where the city CSV files live: `BIKESHARE_DATA_DIR`, falling back to
/// the current directory.
fn data_dir() -> PathBuf {
    std::env::var_os("BIKESHARE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

// ---------------------------------------------------------------------------
// Interaction loop
// ---------------------------------------------------------------------------

/// Run the interactive loop until the user declines to restart.
///
/// A load failure (missing file, malformed row) aborts the program; every
/// other path re-prompts or loops.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let data_dir = data_dir();

    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let selection = prompt::get_filters(&mut input)?;
        let dataset = load_and_filter(&selection, &data_dir)?;

        report_stats(&dataset);
        view_rows(&mut input, &dataset)?;

        if !prompt::answered_yes(&mut input, "\nWould you like to restart? Enter yes or no.\n> ")? {
            break;
        }
    }

    Ok(())
}

/// Load the selected city and narrow it to the selected month / weekday.
fn load_and_filter(selection: &FilterSelection, data_dir: &Path) -> Result<Dataset> {
    println!("\nLoading data...\n");
    let started = Instant::now();

    let dataset = loader::load_city(selection.city, data_dir)
        .with_context(|| format!("loading the {} trip log", selection.city.label()))?;
    let filtered = TripFilter::new(selection.month, selection.weekday).apply(&dataset);
    if filtered.is_empty() {
        log::warn!(
            "no rides match month={:?} weekday={:?}",
            selection.month,
            selection.weekday
        );
    }

    report::elapsed(started);
    Ok(filtered)
}

/// Run the four stat blocks in order; user stats only when the dataset
/// carries the demographic columns.
fn report_stats(dataset: &Dataset) {
    stage("\nCalculating The Most Frequent Times of Travel...\n", || {
        report::time_stats(&TravelTimeStats::compute(dataset));
    });
    stage("\nCalculating The Most Popular Stations and Trip...\n", || {
        report::station_stats(&StationStats::compute(dataset));
    });
    stage("\nCalculating Trip Duration...\n", || {
        report::duration_stats(&DurationStats::compute(dataset));
    });
    if dataset.has_demographics {
        stage("\nCalculating User Stats...\n", || {
            report::user_stats(&UserStats::compute(dataset));
        });
    }
}

/// Print a stage heading, run it, then report how long it took.
fn stage<F: FnOnce()>(heading: &str, body: F) {
    println!("{heading}");
    let started = Instant::now();
    body();
    report::elapsed(started);
}

/// Offer the filtered rides five at a time while the user keeps answering
/// "yes" and rows remain.
fn view_rows<R: BufRead>(input: &mut R, dataset: &Dataset) -> Result<()> {
    let mut answer = prompt::answered_yes(
        input,
        "\nWould you like to view 5 rows of individual trip data?\nEnter yes or no\n> ",
    )?;

    let mut offset = 0;
    while answer && offset < dataset.len() {
        let end = (offset + PAGE_SIZE).min(dataset.len());
        report::ride_rows(&dataset.rides[offset..end]);
        offset = end;
        answer = prompt::answered_yes(input, "Do you wish to continue?: ")?;
    }
    Ok(())
}
