//! Gregorian Easter computus and the movable feasts derived from it.
//!
//! Two modules:
//!
//! 1. **[`date`]**: the supported year window ([`date::MINYEAR`] to
//!    [`date::MAXYEAR`]) and [`date::easter`], which computes the calendar
//!    date of Easter Sunday for a given year using the 1876 "New York
//!    correspondent" closed form of the computus.
//! 2. **[`feasts`]**: [`feasts::MovableFeasts`], deriving Maundy Thursday,
//!    Tuesday of Carnival, Ash Wednesday and Palm Sunday from Easter by
//!    fixed day offsets, plus the line formatter used by the CLI.
//!
//! # Usage
//!
//! ```
//! use computus::feasts::MovableFeasts;
//! use chrono::Datelike;
//!
//! let feasts = MovableFeasts::for_year(2018);
//! assert_eq!(feasts.easter.month(), 4);
//! assert_eq!(feasts.easter.day(), 1);
//! ```

pub mod date;
pub mod feasts;
