use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DAYS_PER_GREGORIAN_CYCLE, UNIX_EPOCH_DAY_OFFSET};
use crate::numerology::{LifePathNumber, LifePathRule, life_path_number};
use crate::types::{CalendarError, Day, Month, Year};
use crate::{ProfileError, prelude::*};

/// Day of the week in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays starting from Monday.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Full English name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Weekday of a day count relative to 1970-01-01 (a Thursday).
    const fn from_days_since_epoch(days: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (days + 3).rem_euclid(7) as usize;
        ALL_WEEKDAYS[index]
    }
}

/// A validated birthdate, written `dd-mm-yyyy`.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}-{:02}-{:04}", "day.get()", "month.get()", "year.get()")]
pub struct BirthDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl BirthDate {
    /// Creates a birthdate from raw day, month and year values.
    ///
    /// # Errors
    /// Returns a `CalendarError` if the values do not form a real Gregorian date.
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    /// Days since 1970-01-01, negative before it.
    pub const fn days_since_epoch(&self) -> i64 {
        let (year, month, day) = (
            self.year.get() as i64,
            self.month.get() as i64,
            self.day.get() as i64,
        );
        // Shift the year to start in March so the leap day is last
        let y = if month <= 2 { year - 1 } else { year };
        let era = y.div_euclid(400);
        let year_of_era = y - era * 400;
        let month_from_march = (month + 9) % 12;
        let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - UNIX_EPOCH_DAY_OFFSET
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch())
    }

    pub fn life_path(&self, rule: LifePathRule) -> LifePathNumber {
        life_path_number(self.day, self.month, self.year, rule)
    }

    /// Helper to parse one numeric field with better error messages
    ///
    /// One leading `+` is allowed. Digit runs past `u32::MAX` saturate so the
    /// calendar check rejects them instead of the format check.
    fn parse_field(field: &str, input: &str) -> Result<u32, ProfileError> {
        let digits = field.strip_prefix('+').unwrap_or(field);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProfileError::InvalidDateFormat(format!(
                "{input:?}: field {field:?} is not a number"
            )));
        }
        Ok(digits.parse::<u32>().unwrap_or(u32::MAX))
    }
}

impl FromStr for BirthDate {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::InvalidDateFormat(
                "empty date string".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ProfileError::InvalidDateFormat(format!(
                "{s:?}: expected 2 {DATE_SEPARATOR} separators (dd-mm-yyyy), found {}",
                parts.len() - 1
            )));
        };

        let day = Self::parse_field(day, s)?;
        let month = Self::parse_field(month, s)?;
        let year = Self::parse_field(year, s)?;

        Self::new(day, month, year).map_err(ProfileError::from)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
