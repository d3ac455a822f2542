//! Chinese lunisolar calendar.
//!
//! The generator only talks to the calendar through [`LunarCalendar`], which
//! covers solar/lunar conversion in both directions, the leap month query and
//! the traditional names of a lunar date.

mod names;
mod table;

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

pub use names::LunarLabel;
pub use table::{ChineseCalendar, FIRST_YEAR, LAST_YEAR};

/// A date in the lunar calendar. `is_leap` marks the intercalary copy of `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub is_leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u8, day: u8, is_leap: bool) -> Self {
        LunarDate {
            year,
            month,
            day,
            is_leap,
        }
    }

    /// Same month and day in another lunar year.
    pub fn in_year(&self, year: i32) -> Self {
        LunarDate { year, ..*self }
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap { "leap " } else { "" };
        write!(f, "{}-{}{:02}-{:02}", self.year, leap, self.month, self.day)
    }
}

/// Errors raised by a [`LunarCalendar`] for dates it cannot represent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LunarError {
    #[error("lunar year {0} is outside the supported range {first}..={last}", first = FIRST_YEAR, last = LAST_YEAR)]
    YearOutOfRange(i32),

    #[error("solar date {0} is outside the supported range")]
    SolarOutOfRange(NaiveDate),

    #[error("{0} does not exist: the year has no such month")]
    NoSuchMonth(LunarDate),

    #[error("{date} does not exist: the month has {days_in_month} days")]
    NoSuchDay { date: LunarDate, days_in_month: u8 },
}

/// The calendar operations needed to place lunar anniversaries.
pub trait LunarCalendar {
    /// Convert a Gregorian date to its lunar equivalent.
    fn to_lunar(&self, solar: NaiveDate) -> Result<LunarDate, LunarError>;

    /// Convert a lunar date to the Gregorian date it falls on.
    fn to_solar(&self, date: &LunarDate) -> Result<NaiveDate, LunarError>;

    /// Whether lunar `year` has an intercalary copy of `month`.
    fn is_leap_month(&self, year: i32, month: u8) -> bool;

    /// Whether lunar `year` is within the range this calendar can convert.
    fn supports_year(&self, _year: i32) -> bool {
        true
    }

    /// Traditional names of a lunar date.
    fn label(&self, date: &LunarDate) -> LunarLabel {
        LunarLabel::of(date)
    }
}
