//! Writes deterministic sample trip logs for the three cities, for demos
//! and manual runs: `chicago.csv`, `new_york_city.csv`, `washington.csv`
//! under `BIKESHARE_DATA_DIR` (or the current directory).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

use bikeshare_explorer::data::model::{City, TIMESTAMP_FORMAT};

const RIDES_PER_CITY: usize = 240;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Integer in `lo..hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn stations_for(city: City) -> &'static [&'static str] {
    match city {
        City::Chicago => &[
            "Streeter Dr & Grand Ave",
            "Canal St & Adams St",
            "Clinton St & Washington Blvd",
            "Theater on the Lake",
            "Lake Shore Dr & Monroe St",
            "Michigan Ave & Oak St",
        ],
        City::NewYorkCity => &[
            "Pershing Square North",
            "West St & Chambers St",
            "Broadway & E 22 St",
            "E 17 St & Broadway",
            "Lafayette St & E 8 St",
            "8 Ave & W 31 St",
        ],
        City::Washington => &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Massachusetts Ave & Dupont Circle NW",
            "Jefferson Dr & 14th St SW",
            "14th & V St NW",
            "Maine Ave SW",
        ],
    }
}

fn write_city(path: &Path, city: City, seed: u64) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let demographics = city != City::Washington;

    // Real exports carry a leading unnamed index column; the loader skips it.
    if demographics {
        writer.write_record([
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year",
        ])?;
    } else {
        writer.write_record([
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ])?;
    }

    let stations = stations_for(city);
    let user_types: &[&str] = if demographics {
        &["Subscriber", "Customer"]
    } else {
        &["Registered", "Casual"]
    };

    for row in 0..RIDES_PER_CITY {
        let month = rng.range(1, 13) as u32;
        let day = rng.range(1, 29) as u32;
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .expect("valid sample date")
            .and_hms_opt(
                rng.range(0, 24) as u32,
                rng.range(0, 60) as u32,
                rng.range(0, 60) as u32,
            )
            .expect("valid sample time");

        let duration_secs = rng.gauss(900.0, 600.0).abs().max(60.0) as i64;
        let end = start + Duration::seconds(duration_secs);

        let index = row.to_string();
        let start_s = start.format(TIMESTAMP_FORMAT).to_string();
        let end_s = end.format(TIMESTAMP_FORMAT).to_string();
        let duration_s = duration_secs.to_string();
        let start_station = rng.pick(stations);
        let end_station = rng.pick(stations);
        let user_type = if rng.next_f64() < 0.7 {
            user_types[0]
        } else {
            user_types[1]
        };

        if demographics {
            // Roughly one blank cell in ten, like the real exports.
            let gender = match rng.next_u64() % 10 {
                0 => "",
                1..=5 => "Male",
                _ => "Female",
            };
            let birth_year = if rng.next_f64() < 0.9 {
                format!("{}.0", rng.range(1945, 2001))
            } else {
                String::new()
            };
            writer.write_record([
                index.as_str(),
                start_s.as_str(),
                end_s.as_str(),
                duration_s.as_str(),
                start_station,
                end_station,
                user_type,
                gender,
                birth_year.as_str(),
            ])?;
        } else {
            writer.write_record([
                index.as_str(),
                start_s.as_str(),
                end_s.as_str(),
                duration_s.as_str(),
                start_station,
                end_station,
                user_type,
            ])?;
        }
    }

    writer.flush().context("flushing sample file")?;
    Ok(())
}

fn main() -> Result<()> {
    let data_dir = std::env::var_os("BIKESHARE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    for (city, seed) in [
        (City::Chicago, 42),
        (City::NewYorkCity, 43),
        (City::Washington, 44),
    ] {
        let path = data_dir.join(city.file_name());
        write_city(&path, city, seed)?;
        println!("Wrote {RIDES_PER_CITY} rides to {}", path.display());
    }

    Ok(())
}
