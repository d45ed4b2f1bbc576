use serde::{Deserialize, Serialize};

use crate::date::{BirthDate, Weekday};
use crate::numerology::{LifePathNumber, LifePathRule};
use crate::types::CalendarError;
use crate::zodiac::{Element, ZodiacSign};
use crate::ProfileError;

/// Settings a caller passes to [`compute_profile_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    pub life_path_rule: LifePathRule,
}

impl ProfileOptions {
    pub const fn with_life_path_rule(mut self, rule: LifePathRule) -> Self {
        self.life_path_rule = rule;
        self
    }
}

/// Everything derived from one birthdate.
///
/// Serializes with camelCase keys; `birth_date` is the caller's text exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub zodiac_sign:      ZodiacSign,
    pub ruling_planet:    String,
    pub element:          Element,
    pub life_path_number: LifePathNumber,
    pub day_of_week:      Weekday,
    pub birth_date:       String,
}

/// Computes the profile of a `dd-mm-yyyy` birthdate, keeping master numbers.
///
/// # Errors
/// Returns `ProfileError::InvalidDateFormat` if the text is not three numeric
/// fields, or `ProfileError::InvalidCalendarDate` if they are not a real date.
pub fn compute_profile(date_text: &str) -> Result<Profile, ProfileError> {
    compute_profile_with(date_text, &ProfileOptions::default())
}

/// Computes the profile of a `dd-mm-yyyy` birthdate under the given options.
///
/// # Errors
/// Same as [`compute_profile`].
pub fn compute_profile_with(
    date_text: &str,
    options: &ProfileOptions,
) -> Result<Profile, ProfileError> {
    let date: BirthDate = date_text.parse()?;
    let (month, day) = (date.month().get(), date.day().get());
    let sign = ZodiacSign::from_month_day(month, day)
        .ok_or(CalendarError::Unclassified { month, day })?;

    Ok(Profile {
        zodiac_sign: sign,
        ruling_planet: sign.ruling_planet().to_owned(),
        element: sign.element(),
        life_path_number: date.life_path(options.life_path_rule),
        day_of_week: date.weekday(),
        birth_date: date_text.to_owned(),
    })
}
