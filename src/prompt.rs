use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::data::model::{City, Month, Weekday};

// ---------------------------------------------------------------------------
// FilterSelection – the (city, month, weekday) triple for one cycle
// ---------------------------------------------------------------------------

/// What the user chose to analyze. `None` means "all" on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
}

// ---------------------------------------------------------------------------
// Low-level read / validate loop
// ---------------------------------------------------------------------------

/// Print `prompt`, read one line, and repeat until `accept` maps the
/// trimmed answer to a value. Invalid entries re-prompt indefinitely; a
/// closed input stream is an error.
pub fn ask_until_valid<R, T, F>(input: &mut R, prompt: &str, accept: F) -> Result<T>
where
    R: BufRead,
    F: Fn(&str) -> Option<T>,
{
    loop {
        print!("{prompt}");
        io::stdout().flush().context("flushing prompt")?;
        let line = read_line(input)?;
        if let Some(value) = accept(line.trim()) {
            return Ok(value);
        }
        println!("\nInvalid Input! Try Again.");
    }
}

/// Ask a yes/no question; `true` only when the trimmed answer is
/// case-insensitively "yes".
pub fn answered_yes<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;
    let line = read_line(input)?;
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}

// ---------------------------------------------------------------------------
// Filter selection prompts
// ---------------------------------------------------------------------------

/// Ask for a city, an optional month, and an optional weekday.
pub fn get_filters<R: BufRead>(input: &mut R) -> Result<FilterSelection> {
    let city = ask_until_valid(
        input,
        "\nChoose which city to analyze.\n \
         - 1 for Chicago\n \
         - 2 for New York\n \
         - 3 for Washington\n> ",
        City::from_menu_choice,
    )?;

    let month_prompt = format!(
        "\nChoose which month to analyze.\n  {:?}\n  Or press enter to get the whole year.\n> ",
        Month::ABBREVIATIONS
    );
    let month = ask_until_valid(input, &month_prompt, |entry| {
        if entry.is_empty() {
            Some(None)
        } else {
            Month::from_abbrev(entry).map(Some)
        }
    })?;

    let day_prompt = format!(
        "\nChoose which day to analyze.\n  {:?}\n  Or press enter to get the whole week.\n> ",
        Weekday::ABBREVIATIONS
    );
    let weekday = ask_until_valid(input, &day_prompt, |entry| {
        if entry.is_empty() {
            Some(None)
        } else {
            Weekday::from_abbrev(entry).map(Some)
        }
    })?;

    println!("{}", "-".repeat(40));

    Ok(FilterSelection {
        city,
        month,
        weekday,
    })
}
