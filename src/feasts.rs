//! feasts.rs
//!
//! The movable feasts that hang off Easter by a fixed number of days.
//!
//! Every date here is derived from Easter Sunday by whole-day subtraction
//! in a fixed chain:
//!
//! - Palm Sunday = Easter − 7 days
//! - Ash Wednesday = Palm Sunday − 39 days
//! - Tuesday of Carnival = Ash Wednesday − 1 day
//! - Maundy Thursday = Tuesday of Carnival − 5 days
//!
//! The subtraction is calendar-aware (`chrono` rolls over short months,
//! leap-year February and year boundaries), and since Easter is always a
//! valid date in late March or April, every derived date is valid too.

use chrono::{Duration, NaiveDate};

use crate::date::easter;

/// The five Easter-dependent dates of one liturgical year.
///
/// Immutable once built; construct a fresh value per year.
///
/// ```
/// # use computus::feasts::MovableFeasts;
/// use chrono::NaiveDate;
/// let feasts = MovableFeasts::for_year(2018);
/// assert_eq!(feasts.easter, NaiveDate::from_ymd_opt(2018, 4, 1).unwrap());
/// assert_eq!(feasts.palm_sunday, NaiveDate::from_ymd_opt(2018, 3, 25).unwrap());
/// assert_eq!(feasts.ash_wednesday, NaiveDate::from_ymd_opt(2018, 2, 14).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableFeasts {
    pub maundy_thursday: NaiveDate,
    pub tuesday_of_carnival: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub easter: NaiveDate,
}

impl MovableFeasts {
    /// Computes Easter for `year` and derives the dependent dates.
    pub fn for_year(year: i32) -> MovableFeasts {
        MovableFeasts::from_easter(easter(year))
    }

    /// Derives the dependent dates from an already-computed Easter Sunday.
    pub fn from_easter(easter: NaiveDate) -> MovableFeasts {
        let palm_sunday = easter - Duration::days(7);
        let ash_wednesday = palm_sunday - Duration::days(39);
        let tuesday_of_carnival = ash_wednesday - Duration::days(1);
        let maundy_thursday = tuesday_of_carnival - Duration::days(5);
        MovableFeasts {
            maundy_thursday,
            tuesday_of_carnival,
            ash_wednesday,
            palm_sunday,
            easter,
        }
    }

    /// The five dates paired with their display labels, in the order they
    /// are printed: earliest first, Easter last.
    pub fn labeled(&self) -> [(&'static str, NaiveDate); 5] {
        [
            ("Maundy Thursday", self.maundy_thursday),
            ("Tuesday of Carnival", self.tuesday_of_carnival),
            ("Ash Wednesday", self.ash_wednesday),
            ("Palm Sunday", self.palm_sunday),
            ("Easter", self.easter),
        ]
    }
}

/// Formats one output line: the label left-justified to 20 columns, two
/// spaces, then the date as zero-padded `YYYY-MM-DD`.
///
/// ```
/// # use computus::feasts::monthday_line;
/// use chrono::NaiveDate;
/// let easter = NaiveDate::from_ymd_opt(2018, 4, 1).unwrap();
/// assert_eq!(monthday_line("Easter", easter).len(), 32);
/// ```
pub fn monthday_line(label: &str, date: NaiveDate) -> String {
    format!("{:<20}  {}", label, date.format("%Y-%m-%d"))
}
