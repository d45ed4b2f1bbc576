use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A calendar component that does not form a real Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: u32, month: u8, year: u16 },
    #[display(fmt = "No zodiac sign covers month {month}, day {day}")]
    Unclassified { month: u8, day: u8 },
}

impl std::error::Error for CalendarError {}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        u16::try_from(value)
            .ok()
            .filter(|year| *year <= MAX_YEAR)
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(CalendarError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|month| *month <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u32, year: Year, month: Month) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDay {
            day: value,
            month: month.get(),
            year: year.get(),
        };

        let max_day = days_in_month(year.get(), month.get());
        u8::try_from(value)
            .ok()
            .filter(|day| *day <= max_day)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the upper bound without year/month context
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                day: value.into(),
                month: 0,
                year: 0,
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
