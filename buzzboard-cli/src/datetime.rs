//! Date and time parsing for prompt and flag input.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

/// Parse a date field: ISO first, then natural language ("tomorrow",
/// "next friday", "dec 1").
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Parse a time-of-day field ("14:00", "09:30:00").
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let input = input.trim();

    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\" (expected HH:MM)", input))
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_parse_directly() {
        assert_eq!(
            parse_date("2025-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
    }

    #[test]
    fn fuzzy_dates_parse() {
        assert!(parse_date("tomorrow").is_ok());
        assert!(parse_date("next fri").is_ok());
        assert!(parse_date("definitely not a date").is_err());
    }

    #[test]
    fn times_want_hh_mm() {
        assert_eq!(
            parse_time("14:00").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:30:00").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert!(parse_time("2pm").is_err());
    }
}
