//! Deterministic "cosmic profile" of a birthdate.
//!
//! Given a date written `dd-mm-yyyy`, [`compute_profile`] derives the Western
//! zodiac sign, its ruling planet and element, the numerology life-path number
//! and the day of the week. The calculation is pure: no I/O, no shared state.
//!
//! ```
//! use cosmic_profile::{Element, ZodiacSign, compute_profile};
//!
//! let profile = compute_profile("21-03-1990").unwrap();
//! assert_eq!(profile.zodiac_sign, ZodiacSign::Aries);
//! assert_eq!(profile.ruling_planet, "Mars");
//! assert_eq!(profile.element, Element::Fire);
//! assert_eq!(profile.life_path_number.get(), 7);
//! ```

mod consts;
mod date;
mod numerology;
mod prelude;
mod profile;
mod types;
mod zodiac;

pub use consts::*;
pub use date::{ALL_WEEKDAYS, BirthDate, Weekday};
pub use numerology::{
    InvalidLifePathNumber, LifePathNumber, LifePathRule, digit_sum, life_path_number, reduce,
};
pub use profile::{Profile, ProfileOptions, compute_profile, compute_profile_with};
pub use types::{CalendarError, Day, Month, Year, days_in_month, is_leap_year};
pub use zodiac::{ALL_SIGNS, Element, SIGN_RANGES, SignRange, ZodiacSign};

/// Error type for profile computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Text is not three numeric fields separated by `-`.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Fields are numeric but do not name a real Gregorian date.
    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(#[from] CalendarError),
}
