use chrono::{Datelike, NaiveDateTime, Timelike};

/// Timestamp layout shared by all three city files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// City – which trip log to load
// ---------------------------------------------------------------------------

/// One of the three cities with published trip logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip log inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Menu choice (`"1"` .. `"3"`) → city.
    pub fn from_menu_choice(choice: &str) -> Option<City> {
        match choice {
            "1" => Some(City::Chicago),
            "2" => Some(City::NewYorkCity),
            "3" => Some(City::Washington),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Month – calendar month with prompt abbreviations
// ---------------------------------------------------------------------------

/// Calendar month, January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Abbreviations accepted at the month prompt, indexed by `Month as usize`.
    pub const ABBREVIATIONS: [&'static str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
    ];

    /// Calendar number, January = 1.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Month at `index` (0-based, `index < 12`).
    pub fn from_index(index: usize) -> Month {
        Self::ALL[index]
    }

    /// Abbreviation shown in prompts and reports.
    pub fn abbrev(self) -> &'static str {
        Self::ABBREVIATIONS[self as usize]
    }

    /// Parse a prompt abbreviation.
    pub fn from_abbrev(entry: &str) -> Option<Month> {
        Self::ABBREVIATIONS
            .iter()
            .position(|&a| a == entry)
            .map(Self::from_index)
    }
}

// ---------------------------------------------------------------------------
// Weekday – Saturday-first numbering used throughout the reports
// ---------------------------------------------------------------------------

/// Day of week in the Saturday-first numbering (Saturday = 1 .. Friday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Abbreviations accepted at the day prompt, indexed by `Weekday as usize`.
    pub const ABBREVIATIONS: [&'static str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

    /// Saturday-first rank, Saturday = 1.
    pub fn rank(self) -> u32 {
        self as u32 + 1
    }

    /// Weekday at `index` (0-based, `index < 7`).
    pub fn from_index(index: usize) -> Weekday {
        Self::ALL[index]
    }

    /// Abbreviation shown in prompts and reports.
    pub fn abbrev(self) -> &'static str {
        Self::ABBREVIATIONS[self as usize]
    }

    /// Parse a prompt abbreviation.
    pub fn from_abbrev(entry: &str) -> Option<Weekday> {
        Self::ABBREVIATIONS
            .iter()
            .position(|&a| a == entry)
            .map(Self::from_index)
    }

    /// Remap a Monday-first day number (Monday = 0 .. Sunday = 6) into this
    /// numbering: rank = `((d + 2) mod 7) + 1`.
    pub fn from_monday_first(monday_first: u32) -> Weekday {
        Self::from_index(((monday_first + 2) % 7) as usize)
    }
}

// ---------------------------------------------------------------------------
// RideRecord – one row of a city's trip log
// ---------------------------------------------------------------------------

/// A single trip. Immutable once loaded.
///
/// The demographic fields are absent for the Washington file and may be
/// blank for individual rows elsewhere.
#[derive(Debug, Clone)]
pub struct RideRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip duration in whole seconds.
    pub duration_secs: i64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl RideRecord {
    /// Calendar month of the start timestamp (January = 1).
    pub fn start_month(&self) -> u32 {
        self.start_time.month()
    }

    /// Saturday-first weekday of the start timestamp.
    pub fn start_weekday(&self) -> Weekday {
        Weekday::from_monday_first(self.start_time.weekday().num_days_from_monday())
    }

    /// Hour of day (0–23) of the start timestamp.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded (or filtered) trip log
// ---------------------------------------------------------------------------

/// Ordered collection of rides for one city.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    /// All rides, in source-file order.
    pub rides: Vec<RideRecord>,
    /// Whether the source file carries the Gender / Birth Year columns.
    pub has_demographics: bool,
}

impl Dataset {
    /// Number of rides.
    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Whether the dataset holds no rides.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_remap_is_a_bijection_onto_ranks() {
        let mut ranks: Vec<u32> = (0u32..7).map(|d| Weekday::from_monday_first(d).rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn weekday_remap_pins_known_days() {
        // Monday-first numbering: Monday = 0, Saturday = 5, Sunday = 6.
        assert_eq!(Weekday::from_monday_first(0), Weekday::Monday);
        assert_eq!(Weekday::from_monday_first(0).rank(), 3);
        assert_eq!(Weekday::from_monday_first(5), Weekday::Saturday);
        assert_eq!(Weekday::from_monday_first(5).rank(), 1);
        assert_eq!(Weekday::from_monday_first(6), Weekday::Sunday);
        assert_eq!(Weekday::from_monday_first(6).rank(), 2);
    }

    #[test]
    fn month_abbreviations_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_abbrev(month.abbrev()), Some(month));
        }
        assert_eq!(Month::from_abbrev("Sept"), Some(Month::September));
        assert_eq!(Month::from_abbrev("Sep"), None);
        assert_eq!(Month::June.number(), 6);
    }

    #[test]
    fn city_menu_choices() {
        assert_eq!(City::from_menu_choice("1"), Some(City::Chicago));
        assert_eq!(City::from_menu_choice("3"), Some(City::Washington));
        assert_eq!(City::from_menu_choice("4"), None);
        assert_eq!(City::from_menu_choice(""), None);
    }
}
