//! Western tropical zodiac signs and their fixed attributes.
//!
//! A sign is chosen purely by (month, day) from the ordered [`SIGN_RANGES`]
//! table. Each range is inclusive at both ends; a range whose start falls later
//! in the year than its end (Capricorn) wraps over the new year.

use serde::{Deserialize, Serialize};

use crate::consts::{
    APRIL, AUGUST, DECEMBER, FEBRUARY, JANUARY, JULY, JUNE, MARCH, MAY, NOVEMBER, OCTOBER,
    SEPTEMBER,
};
use crate::prelude::*;

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// The three signs of this element, in canonical order.
    pub const fn signs(self) -> [ZodiacSign; 3] {
        match self {
            Self::Fire => [ZodiacSign::Aries, ZodiacSign::Leo, ZodiacSign::Sagittarius],
            Self::Earth => [ZodiacSign::Taurus, ZodiacSign::Virgo, ZodiacSign::Capricorn],
            Self::Air => [ZodiacSign::Gemini, ZodiacSign::Libra, ZodiacSign::Aquarius],
            Self::Water => [ZodiacSign::Cancer, ZodiacSign::Scorpio, ZodiacSign::Pisces],
        }
    }
}

/// The 12 signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Inclusive span of the year covered by one sign, as (month, day) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignRange {
    pub sign:  ZodiacSign,
    pub start: (u8, u8),
    pub end:   (u8, u8),
}

impl SignRange {
    const fn new(sign: ZodiacSign, start: (u8, u8), end: (u8, u8)) -> Self {
        Self { sign, start, end }
    }

    /// True when the range runs over December 31st.
    pub const fn wraps_year(&self) -> bool {
        self.start.0 > self.end.0 || (self.start.0 == self.end.0 && self.start.1 > self.end.1)
    }

    /// Checks if the range contains the given month and day
    pub fn contains(&self, month: u8, day: u8) -> bool {
        let date = (month, day);
        if self.wraps_year() {
            self.start <= date || date <= self.end
        } else {
            self.start <= date && date <= self.end
        }
    }
}

/// Sign boundaries, evaluated in this order.
pub const SIGN_RANGES: [SignRange; 12] = [
    SignRange::new(ZodiacSign::Aries, (MARCH, 21), (APRIL, 19)),
    SignRange::new(ZodiacSign::Taurus, (APRIL, 20), (MAY, 20)),
    SignRange::new(ZodiacSign::Gemini, (MAY, 21), (JUNE, 20)),
    SignRange::new(ZodiacSign::Cancer, (JUNE, 21), (JULY, 22)),
    SignRange::new(ZodiacSign::Leo, (JULY, 23), (AUGUST, 22)),
    SignRange::new(ZodiacSign::Virgo, (AUGUST, 23), (SEPTEMBER, 22)),
    SignRange::new(ZodiacSign::Libra, (SEPTEMBER, 23), (OCTOBER, 22)),
    SignRange::new(ZodiacSign::Scorpio, (OCTOBER, 23), (NOVEMBER, 21)),
    SignRange::new(ZodiacSign::Sagittarius, (NOVEMBER, 22), (DECEMBER, 21)),
    SignRange::new(ZodiacSign::Capricorn, (DECEMBER, 22), (JANUARY, 19)),
    SignRange::new(ZodiacSign::Aquarius, (JANUARY, 20), (FEBRUARY, 18)),
    SignRange::new(ZodiacSign::Pisces, (FEBRUARY, 19), (MARCH, 20)),
];

impl ZodiacSign {
    /// Classifies a (month, day) pair; first matching range wins.
    ///
    /// Returns `None` only for pairs outside every range, which no real
    /// calendar date is.
    pub fn from_month_day(month: u8, day: u8) -> Option<Self> {
        SIGN_RANGES
            .iter()
            .find(|range| range.contains(month, day))
            .map(|range| range.sign)
    }

    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn ruling_planet(self) -> &'static str {
        match self {
            Self::Aries => "Mars",
            Self::Taurus | Self::Libra => "Venus",
            Self::Gemini | Self::Virgo => "Mercury",
            Self::Cancer => "Moon",
            Self::Leo => "Sun",
            Self::Scorpio => "Pluto & Mars",
            Self::Sagittarius => "Jupiter",
            Self::Capricorn => "Saturn",
            Self::Aquarius => "Uranus & Saturn",
            Self::Pisces => "Neptune & Jupiter",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// The calendar range this sign covers.
    pub const fn range(self) -> SignRange {
        SIGN_RANGES[self.index() as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Self; 12] {
        &ALL_SIGNS
    }
}
