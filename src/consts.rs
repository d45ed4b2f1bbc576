/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for April
pub const APRIL: u8 = 4;
/// Month number for May
pub const MAY: u8 = 5;
/// Month number for June
pub const JUNE: u8 = 6;
/// Month number for July
pub const JULY: u8 = 7;
/// Month number for August
pub const AUGUST: u8 = 8;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for October
pub const OCTOBER: u8 = 10;
/// Month number for November
pub const NOVEMBER: u8 = 11;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Offset from 0000-03-01 to 1970-01-01 in days
pub(crate) const UNIX_EPOCH_DAY_OFFSET: i64 = 719_468;

/// Birthdate component separator (`dd-mm-yyyy`)
pub const DATE_SEPARATOR: char = '-';

/// Life-path totals that are kept unreduced
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];
