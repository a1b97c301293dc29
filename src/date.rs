//! date.rs
//!
//! The Gregorian Easter computus and its supporting calendar helpers.
//!
//! The central function is [`easter`], which maps a year to the calendar
//! date of Easter Sunday using the closed-form algorithm submitted to the
//! Nature journal in 1876 by "A New York correspondent" (a refinement of
//! Gauss's method). The formula is pure integer arithmetic: no iteration,
//! no lookup tables, no floating point, so the result can never drift by
//! a rounding error.
//!
//! The module also carries the supported year window. The formula encodes
//! the Gregorian leap-year and epact rules, so it is only meaningful for
//! years in which that calendar is, was or will be in use. The earliest
//! adoption was 1582, and leap-second corrections suggest the calendar
//! will stay with us for a long while; [`MINYEAR`]–[`MAXYEAR`] is a
//! comfortable window within that, not a mathematically derived boundary.
//!
//! Reference: <https://en.wikipedia.org/wiki/Computus>

use chrono::NaiveDate;

/// Earliest year accepted by the calculator.
pub const MINYEAR: i32 = 1900;

/// Latest year accepted by the calculator.
pub const MAXYEAR: i32 = 4000;

/// Returns `true` if `year` lies inside the supported [`MINYEAR`]–[`MAXYEAR`]
/// window (inclusive on both ends).
///
/// ```
/// # use computus::date::in_supported_range;
/// assert!(in_supported_range(1900));
/// assert!(in_supported_range(4000));
/// assert!(!in_supported_range(1899));
/// assert!(!in_supported_range(4001));
/// ```
pub fn in_supported_range(year: i32) -> bool {
    (MINYEAR..=MAXYEAR).contains(&year)
}

/// Returns `true` if the given year is a leap year under the Gregorian rules.
///
/// ```
/// # use computus::date::leap_year;
/// assert!(leap_year(2000));  // divisible by 400
/// assert!(!leap_year(1900)); // divisible by 100 but not 400
/// assert!(leap_year(2024));  // divisible by 4 but not 100
/// assert!(!leap_year(2023));
/// ```
pub fn leap_year(year: i32) -> bool {
    (year % 4 == 0) && ((year % 100 != 0) || (year % 400 == 0))
}

/// Computes the date of Easter Sunday (Gregorian) for the given year.
///
/// Deterministic and pure: the same year always yields the same date. The
/// caller is expected to have checked [`in_supported_range`] first; outside
/// that window the formula's correctness is unverified.
///
/// ```
/// # use computus::date::easter;
/// use chrono::NaiveDate;
/// assert_eq!(easter(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert_eq!(easter(2018), NaiveDate::from_ymd_opt(2018, 4, 1).unwrap());
/// ```
pub fn easter(year: i32) -> NaiveDate {
    // "A New York correspondent" submission to the Nature journal, 1876:
    // A = year mod 19
    // B = year div 100, C = year mod 100
    // D = B div 4, E = B mod 4
    // F = (B + 8) div 25
    // G = (B - F + 1) div 3
    // H = (19A + B - D - G + 15) mod 30
    // I = C div 4, K = C mod 4
    // L = (32 + 2E + 2I - H - K) mod 7
    // M = (A + 11H + 22L) div 451
    // N = H + L - 7M + 114
    // month = N div 31, day = 1 + N mod 31
    //
    // Every intermediate is non-negative for a non-negative year (the
    // operand of `mod 7` bottoms out at 32 - 29 - 3 = 0), so Rust's
    // truncating `/` and `%` coincide with the floor division and
    // mathematical modulus the formula requires.
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (1 + n % 31) as u32;
    // N lands in 114..=144, so month/day always form a real date in
    // March or April.
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("computus yields a valid March or April date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_known_easter_dates() {
        // Cross-checked against published Easter tables, including the
        // extreme attainable dates (25 April in 1943/2038, 22 March in 2285).
        let expected = [
            (1900, 4, 15),
            (1943, 4, 25),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2018, 4, 1),
            (2024, 3, 31),
            (2038, 4, 25),
            (2285, 3, 22),
            (4000, 4, 9),
        ];
        for (year, month, day) in expected {
            assert_eq!(easter(year), ymd(year, month, day), "year {}", year);
        }
    }

    #[test]
    fn test_easter_is_a_sunday_within_the_gregorian_bounds() {
        for year in MINYEAR..=MAXYEAR {
            let date = easter(year);
            assert_eq!(date.year(), year);
            assert_eq!(date.weekday(), Weekday::Sun, "year {}", year);
            match date.month() {
                3 => assert!(date.day() >= 22, "year {}: {}", year, date),
                4 => assert!(date.day() <= 25, "year {}: {}", year, date),
                other => panic!("year {}: easter in month {}", year, other),
            }
        }
    }

    #[test]
    fn test_easter_is_idempotent() {
        for year in [MINYEAR, 1954, 2018, 2100, MAXYEAR] {
            assert_eq!(easter(year), easter(year));
        }
    }

    #[test]
    fn test_range_bounds() {
        assert!(in_supported_range(MINYEAR));
        assert!(in_supported_range(MAXYEAR));
        assert!(in_supported_range(2018));
        assert!(!in_supported_range(MINYEAR - 1));
        assert!(!in_supported_range(MAXYEAR + 1));
        assert!(!in_supported_range(0));
        assert!(!in_supported_range(-44));
    }

    #[test]
    fn test_leap_year_century_rule() {
        assert!(leap_year(2400));
        assert!(!leap_year(2100));
        assert!(!leap_year(2200));
        assert!(!leap_year(2300));
    }
}
