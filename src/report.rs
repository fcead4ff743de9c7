use std::time::Instant;

use crate::data::model::{RideRecord, TIMESTAMP_FORMAT};
use crate::stats::duration::{format_duration, DurationStats};
use crate::stats::station::StationStats;
use crate::stats::time::{hour_label, TravelTimeStats};
use crate::stats::user::UserStats;

/// Width of the rule printed between report sections.
const RULE_WIDTH: usize = 40;

// ---------------------------------------------------------------------------
// Stat blocks
// ---------------------------------------------------------------------------

/// Most common month, weekday, and start hour.
pub fn time_stats(stats: &TravelTimeStats) {
    let Some((month, count)) = stats.top_month() else {
        println!("No trips match the selected filters.");
        return;
    };
    println!(
        "The most common month is \"{}\" with {} total trips.",
        month.abbrev(),
        count
    );

    if let Some((weekday, count)) = stats.top_weekday() {
        println!(
            "The most common weekday is \"{}\" with {} total trips.",
            weekday.abbrev(),
            count
        );
    }
    if let Some((hour, count)) = stats.top_hour() {
        println!(
            "The most common start hour is \"{}\" with {} total trips.",
            hour_label(hour),
            count
        );
    }
}

/// Most popular start station, end station, and trip.
pub fn station_stats(stats: &StationStats) {
    let Some((station, count)) = &stats.top_start else {
        println!("No trips match the selected filters.");
        return;
    };
    println!("The most common start station is \"{station}\" with {count} total trips.");

    if let Some((station, count)) = &stats.top_end {
        println!("The most common end station is \"{station}\" with {count} total trips.");
    }
    if let Some((start, end, count)) = &stats.top_trip {
        println!("The most common combination is \"{start} to {end}\" with {count} total trips.");
    }
}

/// Total and average travel time.
pub fn duration_stats(stats: &DurationStats) {
    println!(
        "The total travel time is \"{}\".",
        format_duration(stats.total_secs)
    );
    match stats.mean_secs {
        Some(mean) => println!("The average travel time is \"{}\".", format_duration(mean)),
        None => println!("No trips match the selected filters."),
    }
}

/// User type, gender, and birth-year breakdowns.
pub fn user_stats(stats: &UserStats) {
    println!("Count of user types:");
    for (user_type, count) in &stats.user_type_counts {
        println!("\t{user_type}: {count}");
    }

    println!();
    println!("Count of genders:");
    for (gender, count) in &stats.gender_counts {
        println!("\t{gender}: {count}");
    }

    println!();
    match stats.birth_years {
        Some(years) => {
            println!("Birth Years:");
            println!("\tEarliest: {}", years.earliest);
            println!("\tMost recent: {}", years.most_recent);
            println!("\tMost common: {}", years.most_common);
        }
        None => println!("No birth years on record."),
    }
}

// ---------------------------------------------------------------------------
// Raw-row preview
// ---------------------------------------------------------------------------

/// Print a page of individual trips as a fixed-width table.
pub fn ride_rows(rides: &[RideRecord]) {
    println!(
        "{:<20} {:<20} {:>10} {:<28} {:<28} {:<12}",
        "Start Time", "End Time", "Duration", "Start Station", "End Station", "User Type"
    );
    println!("{}", "-".repeat(122));
    for ride in rides {
        println!(
            "{:<20} {:<20} {:>10} {:<28} {:<28} {:<12}",
            ride.start_time.format(TIMESTAMP_FORMAT).to_string(),
            ride.end_time.format(TIMESTAMP_FORMAT).to_string(),
            ride.duration_secs,
            ride.start_station,
            ride.end_station,
            ride.user_type.as_deref().unwrap_or("-"),
        );
    }
}

// ---------------------------------------------------------------------------
// Stage timing
// ---------------------------------------------------------------------------

/// Per-stage elapsed-time line followed by the section rule.
pub fn elapsed(started: Instant) {
    println!("\nThis took {:.2} seconds.", started.elapsed().as_secs_f64());
    println!("{}", "-".repeat(RULE_WIDTH));
}
