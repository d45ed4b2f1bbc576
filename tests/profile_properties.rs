//! End-to-end checks of `compute_profile` through the public API.

use cosmic_profile::{
    CalendarError, Element, LifePathRule, ProfileError, ProfileOptions, Weekday, ZodiacSign,
    compute_profile, compute_profile_with, days_in_month,
};

fn sign_of(dob: &str) -> ZodiacSign {
    compute_profile(dob).unwrap().zodiac_sign
}

#[test]
fn boundary_dates_switch_sign_exactly() {
    assert_eq!(sign_of("21-03-2001"), ZodiacSign::Aries);
    assert_eq!(sign_of("20-03-2001"), ZodiacSign::Pisces);
    assert_eq!(sign_of("21-12-2001"), ZodiacSign::Sagittarius);
    assert_eq!(sign_of("22-12-2001"), ZodiacSign::Capricorn);
    assert_eq!(sign_of("19-01-2001"), ZodiacSign::Capricorn);
    assert_eq!(sign_of("20-01-2001"), ZodiacSign::Aquarius);
}

#[test]
fn every_date_of_a_leap_year_has_a_profile() {
    for month in 1..=12u8 {
        for day in 1..=days_in_month(2024, month) {
            let dob = format!("{day:02}-{month:02}-2024");
            let profile = compute_profile(&dob).unwrap();
            assert_eq!(profile.element, profile.zodiac_sign.element(), "{dob}");
            assert_eq!(profile.ruling_planet, profile.zodiac_sign.ruling_planet(), "{dob}");
            assert!(profile.zodiac_sign.range().contains(month, day), "{dob}");
        }
    }
}

#[test]
fn reference_profiles() {
    let aries = compute_profile("21-03-1990").unwrap();
    assert_eq!(aries.zodiac_sign, ZodiacSign::Aries);
    assert_eq!(aries.ruling_planet, "Mars");
    assert_eq!(aries.element, Element::Fire);
    assert_eq!(aries.life_path_number.get(), 7);

    let leap = compute_profile("29-02-2000").unwrap();
    assert_eq!(leap.day_of_week, Weekday::Tuesday);

    let master = compute_profile("05-03-1992").unwrap();
    assert_eq!(master.life_path_number.get(), 11);
}

#[test]
fn legacy_reduction_is_opt_in() {
    let legacy = ProfileOptions::default().with_life_path_rule(LifePathRule::ReduceToSingleDigit);
    assert_eq!(
        compute_profile_with("05-03-1992", &legacy)
            .unwrap()
            .life_path_number
            .get(),
        2
    );
    assert_eq!(
        compute_profile("05-03-1992").unwrap().life_path_number.get(),
        11
    );
}

#[test]
fn format_and_calendar_errors_are_distinguished() {
    assert!(matches!(
        compute_profile("abc-01-1990"),
        Err(ProfileError::InvalidDateFormat(_))
    ));
    assert_eq!(
        compute_profile("32-01-1990"),
        Err(ProfileError::InvalidCalendarDate(CalendarError::InvalidDay {
            day: 32,
            month: 1,
            year: 1990,
        }))
    );
    assert!(matches!(
        compute_profile("29-02-1999"),
        Err(ProfileError::InvalidCalendarDate(_))
    ));
}

#[test]
fn profile_json_shape() {
    let json = serde_json::to_string(&compute_profile("05-03-1992").unwrap()).unwrap();
    assert_eq!(
        json,
        r#"{"zodiacSign":"Pisces","rulingPlanet":"Neptune & Jupiter","element":"Water","lifePathNumber":11,"dayOfWeek":"Thursday","birthDate":"05-03-1992"}"#
    );
}
