//! Life-path numbers.
//!
//! The digits of day, month and year are written as plain integers (day 5 is
//! `5`, not `05`) and summed. The total is then re-summed until it is a single
//! digit, unless the rule in force keeps master numbers (11, 22, 33) as they
//! are.

use serde::{Deserialize, Serialize};

use crate::consts::MASTER_NUMBERS;
use crate::prelude::*;
use crate::types::{Day, Month, Year};

/// How far a digit total is reduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifePathRule {
    /// Stop as soon as the total is 11, 22 or 33.
    #[default]
    PreserveMasterNumbers,
    /// Always reduce to one digit. Older deployments computed profiles this way.
    ReduceToSingleDigit,
}

/// A value that is neither 1..=9 nor a master number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Invalid life-path number: {0} (must be 1-9, 11, 22 or 33)")]
pub struct InvalidLifePathNumber(pub u8);

/// A reduced life-path value: 1..=9, or a master number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LifePathNumber(u8);

impl LifePathNumber {
    /// Creates a life-path number, validating its range
    ///
    /// # Errors
    /// Returns `InvalidLifePathNumber` unless the value is 1..=9, 11, 22 or 33.
    pub const fn new(value: u8) -> Result<Self, InvalidLifePathNumber> {
        match value {
            1..=9 | 11 | 22 | 33 => Ok(Self(value)),
            _ => Err(InvalidLifePathNumber(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_master(self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }
}

impl TryFrom<u8> for LifePathNumber {
    type Error = InvalidLifePathNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces a digit total under `rule`.
///
/// Returns `None` for 0, which no date produces.
pub fn reduce(total: u32, rule: LifePathRule) -> Option<LifePathNumber> {
    (total > 0).then(|| reduce_nonzero(total, rule))
}

/// `total` must be non-zero; digit sums of non-zero values stay non-zero.
#[allow(clippy::cast_possible_truncation)]
fn reduce_nonzero(mut total: u32, rule: LifePathRule) -> LifePathNumber {
    debug_assert!(total > 0);
    while total > 9 {
        if rule == LifePathRule::PreserveMasterNumbers && MASTER_NUMBERS.contains(&total) {
            break;
        }
        total = digit_sum(total);
    }
    // 1..=9 or a master number here
    LifePathNumber(total as u8)
}

/// Life-path number of a calendar date.
pub fn life_path_number(day: Day, month: Month, year: Year, rule: LifePathRule) -> LifePathNumber {
    let total = digit_sum(day.get().into())
        + digit_sum(month.get().into())
        + digit_sum(year.get().into());
    reduce_nonzero(total, rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life_path(day: u32, month: u32, year: u32, rule: LifePathRule) -> u8 {
        let year = Year::new(year).unwrap();
        let month = Month::new(month).unwrap();
        let day = Day::new(day, year, month).unwrap();
        life_path_number(day, month, year, rule).get()
    }

    fn reduced(total: u32, rule: LifePathRule) -> LifePathNumber {
        reduce(total, rule).unwrap()
    }

    const MASTER: LifePathRule = LifePathRule::PreserveMasterNumbers;
    const LEGACY: LifePathRule = LifePathRule::ReduceToSingleDigit;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1992), 21);
        assert_eq!(digit_sum(9999), 36);
    }

    #[test]
    fn test_life_path_cases() {
        struct TestCase {
            day: u32,
            month: u32,
            year: u32,
            rule: LifePathRule,
            expected: u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                day: 5,
                month: 3,
                year: 1992,
                rule: MASTER,
                expected: 11,
                description: "29 reduces to master 11",
            },
            TestCase {
                day: 5,
                month: 3,
                year: 1992,
                rule: LEGACY,
                expected: 2,
                description: "29 -> 11 -> 2 when masters are not kept",
            },
            TestCase {
                day: 21,
                month: 3,
                year: 1990,
                rule: MASTER,
                expected: 7,
                description: "25 reduces to 7",
            },
            TestCase {
                day: 1,
                month: 1,
                year: 1991,
                rule: MASTER,
                expected: 22,
                description: "first sum is master 22",
            },
            TestCase {
                day: 1,
                month: 1,
                year: 1991,
                rule: LEGACY,
                expected: 4,
                description: "22 reduces to 4",
            },
            TestCase {
                day: 3,
                month: 5,
                year: 1987,
                rule: MASTER,
                expected: 33,
                description: "first sum is master 33",
            },
            TestCase {
                day: 3,
                month: 5,
                year: 1987,
                rule: LEGACY,
                expected: 6,
                description: "33 reduces to 6",
            },
            TestCase {
                day: 1,
                month: 1,
                year: 1,
                rule: MASTER,
                expected: 3,
                description: "already a single digit",
            },
            TestCase {
                day: 31,
                month: 12,
                year: 9999,
                rule: MASTER,
                expected: 7,
                description: "43 -> 7",
            },
        ];

        for case in &cases {
            assert_eq!(
                life_path(case.day, case.month, case.year, case.rule),
                case.expected,
                "{:02}-{:02}-{} ({})",
                case.day,
                case.month,
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_no_zero_padding() {
        // "10" contributes 1 + 0, "5" contributes 5
        assert_eq!(life_path(10, 5, 2000, MASTER), 8);
    }

    #[test]
    fn test_reduce_stops_at_master_after_resumming() {
        // 38 -> 11, 47 -> 11, 56 -> 11
        for total in [38, 47, 56] {
            assert_eq!(reduced(total, MASTER).get(), 11, "{total}");
            assert_eq!(reduced(total, LEGACY).get(), 2, "{total}");
        }
    }

    #[test]
    fn test_reduce_results_are_in_range() {
        for total in 1..=100 {
            for rule in [MASTER, LEGACY] {
                let value = reduced(total, rule);
                assert!(
                    (1..=9).contains(&value.get()) || value.is_master(),
                    "{total} under {rule:?} gave {value}"
                );
                if rule == LEGACY {
                    assert!(!value.is_master());
                }
            }
        }
    }

    #[test]
    fn test_reduce_zero_has_no_life_path() {
        assert_eq!(reduce(0, MASTER), None);
        assert_eq!(reduce(0, LEGACY), None);
    }

    #[test]
    fn test_new_validates_range() {
        for value in [1, 5, 9, 11, 22, 33] {
            assert_eq!(LifePathNumber::new(value).map(LifePathNumber::get), Ok(value));
        }
        for value in [0, 10, 12, 44, 99, 255] {
            assert_eq!(LifePathNumber::new(value), Err(InvalidLifePathNumber(value)));
        }
        let result: Result<LifePathNumber, _> = 10.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_master() {
        assert!(reduced(11, MASTER).is_master());
        assert!(reduced(22, MASTER).is_master());
        assert!(reduced(33, MASTER).is_master());
        assert!(!reduced(44, MASTER).is_master());
        assert!(!reduced(9, MASTER).is_master());
    }

    #[test]
    fn test_newtype_conversions() {
        let value = reduced(29, MASTER);
        assert_eq!(*value, 11);
        let raw: u8 = value.into();
        assert_eq!(raw, 11);
        assert_eq!(value.to_string(), "11");
    }

    #[test]
    fn test_default_rule_preserves_masters() {
        assert_eq!(LifePathRule::default(), MASTER);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&reduced(22, MASTER)).unwrap(), "22");
        assert_eq!(
            serde_json::to_string(&LEGACY).unwrap(),
            "\"reduce_to_single_digit\""
        );
        let rule: LifePathRule = serde_json::from_str("\"preserve_master_numbers\"").unwrap();
        assert_eq!(rule, MASTER);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: LifePathNumber = serde_json::from_str("33").unwrap();
        assert_eq!(parsed.get(), 33);

        for json in ["0", "10", "44", "99"] {
            assert!(
                serde_json::from_str::<LifePathNumber>(json).is_err(),
                "{json} should be rejected"
            );
        }
    }
}
