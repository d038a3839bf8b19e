use crate::error::NumerologyError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A birth date as supplied by the caller.
///
/// Only the component ranges are checked; calendar validity (e.g. 31
/// February) is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    day: u32,
    month: u32,
    year: u32,
}

impl BirthDate {
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, NumerologyError> {
        let date = Self { day, month, year };
        if !(1..=31).contains(&day) {
            return Err(NumerologyError::invalid_date(
                &date.to_string(),
                format!("day {day} is outside 1-31"),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(NumerologyError::invalid_date(
                &date.to_string(),
                format!("month {month} is outside 1-12"),
            ));
        }
        Ok(date)
    }

    /// Parses `DD-MM-YYYY` (or `DD/MM/YYYY`).
    pub fn parse(input: &str) -> Result<Self, NumerologyError> {
        let trimmed = input.trim();
        let separator = if trimmed.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = trimmed.split(separator).collect();
        if parts.len() != 3 {
            return Err(NumerologyError::invalid_date(
                input,
                "expected three components in DD-MM-YYYY form",
            ));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.trim().parse::<u32>().map_err(|e| {
                NumerologyError::invalid_date(input, format!("'{part}' is not a number: {e}"))
            })?;
        }
        let [day, month, year] = numbers;

        Self::new(day, month, year).map_err(|err| match err {
            NumerologyError::InvalidDateFormat { reason, .. } => {
                NumerologyError::invalid_date(input, reason)
            }
            other => other,
        })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// English month name, independent of any locale or report language.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("")
    }

    /// Human readable form used on the cover page, e.g. `5 August, 1990`.
    pub fn long_form(&self) -> String {
        format!("{} {}, {}", self.day, self.month_name(), self.year)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BirthDate::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashes_and_slashes() {
        let date = BirthDate::parse("05-08-1990").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (5, 8, 1990));
        assert_eq!(BirthDate::parse("05/08/1990").unwrap(), date);
        assert_eq!(" 5-8-1990 ".parse::<BirthDate>().unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "1990", "05-08", "aa-08-1990", "05-08-1990-01", "5.8.1990"] {
            assert!(
                matches!(
                    BirthDate::parse(bad),
                    Err(NumerologyError::InvalidDateFormat { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        let err = BirthDate::parse("32-01-1990").unwrap_err();
        match err {
            NumerologyError::InvalidDateFormat { input, reason } => {
                assert_eq!(input, "32-01-1990");
                assert!(reason.contains("day"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(BirthDate::parse("01-13-1990").is_err());
        assert!(BirthDate::parse("00-01-1990").is_err());
    }

    #[test]
    fn test_calendar_validity_is_not_checked() {
        assert!(BirthDate::parse("31-02-2001").is_ok());
    }

    #[test]
    fn test_long_form_uses_english_month() {
        let date = BirthDate::new(5, 8, 1990).unwrap();
        assert_eq!(date.long_form(), "5 August, 1990");
        assert_eq!(BirthDate::new(1, 12, 2000).unwrap().month_name(), "December");
    }

    #[test]
    fn test_display_round_trips() {
        let date = BirthDate::new(9, 3, 1985).unwrap();
        assert_eq!(date.to_string(), "09-03-1985");
        assert_eq!(BirthDate::parse(&date.to_string()).unwrap(), date);
    }
}
