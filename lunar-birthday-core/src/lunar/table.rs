//! Table driven Chinese calendar for lunar years 1900 to 2100.
//!
//! Each year is packed into one word:
//! - bits 0..4: the month that is followed by a leap month, 0 if none
//! - bits 4..16: month lengths, bit `16 - m` set when month `m` has 30 days
//! - bit 16: set when the leap month has 30 days

use chrono::{Datelike, NaiveDate};

use super::{LunarCalendar, LunarDate, LunarError};

pub const FIRST_YEAR: i32 = 1900;
pub const LAST_YEAR: i32 = 2100;

/// 1900-01-31, the first day of lunar year 1900, counted from 0001-01-01 as day 1.
const EPOCH_DAYS_FROM_CE: i32 = 693_626;

#[rustfmt::skip]
const YEAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// The Chinese lunisolar calendar as published for 1900 to 2100.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChineseCalendar;

impl ChineseCalendar {
    pub fn new() -> Self {
        ChineseCalendar
    }

    fn info(year: i32) -> Result<u32, LunarError> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(LunarError::YearOutOfRange(year));
        }
        Ok(YEAR_INFO[(year - FIRST_YEAR) as usize])
    }

    /// The month followed by a leap month in `year`, if any.
    pub fn leap_month(year: i32) -> Result<Option<u8>, LunarError> {
        let leap = (Self::info(year)? & 0xf) as u8;
        Ok((leap != 0).then_some(leap))
    }

    /// Length of `month` (or of its leap copy) in `year`, `None` if the month does not exist.
    pub fn days_in_month(year: i32, month: u8, is_leap: bool) -> Result<Option<u8>, LunarError> {
        let info = Self::info(year)?;
        if !(1..=12).contains(&month) {
            return Ok(None);
        }
        if is_leap {
            if Self::leap_month(year)? != Some(month) {
                return Ok(None);
            }
            return Ok(Some(if info & 0x10000 != 0 { 30 } else { 29 }));
        }
        Ok(Some(if info & (0x10000 >> month) != 0 { 30 } else { 29 }))
    }

    /// Months of `year` in calendar order as `(month, is_leap, days)`.
    fn months(year: i32) -> Result<Vec<(u8, bool, u8)>, LunarError> {
        let leap = Self::leap_month(year)?;
        let mut months = Vec::with_capacity(13);
        for month in 1..=12u8 {
            if let Some(days) = Self::days_in_month(year, month, false)? {
                months.push((month, false, days));
            }
            if leap == Some(month) {
                if let Some(days) = Self::days_in_month(year, month, true)? {
                    months.push((month, true, days));
                }
            }
        }
        Ok(months)
    }

    fn days_in_year(year: i32) -> Result<i32, LunarError> {
        Ok(Self::months(year)?
            .iter()
            .map(|&(_, _, days)| i32::from(days))
            .sum())
    }
}

impl LunarCalendar for ChineseCalendar {
    fn to_lunar(&self, solar: NaiveDate) -> Result<LunarDate, LunarError> {
        let mut offset = solar.num_days_from_ce() - EPOCH_DAYS_FROM_CE;
        if offset < 0 {
            return Err(LunarError::SolarOutOfRange(solar));
        }

        let mut year = FIRST_YEAR;
        loop {
            let days = Self::days_in_year(year).map_err(|_| LunarError::SolarOutOfRange(solar))?;
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        for (month, is_leap, days) in Self::months(year)? {
            let days = i32::from(days);
            if offset < days {
                return Ok(LunarDate::new(year, month, (offset + 1) as u8, is_leap));
            }
            offset -= days;
        }

        Err(LunarError::SolarOutOfRange(solar))
    }

    fn to_solar(&self, date: &LunarDate) -> Result<NaiveDate, LunarError> {
        let days_in_month = Self::days_in_month(date.year, date.month, date.is_leap)?
            .ok_or(LunarError::NoSuchMonth(*date))?;
        if date.day == 0 || date.day > days_in_month {
            return Err(LunarError::NoSuchDay {
                date: *date,
                days_in_month,
            });
        }

        let mut offset = 0;
        for year in FIRST_YEAR..date.year {
            offset += Self::days_in_year(year)?;
        }
        for (month, is_leap, days) in Self::months(date.year)? {
            if month == date.month && is_leap == date.is_leap {
                break;
            }
            offset += i32::from(days);
        }
        offset += i32::from(date.day) - 1;

        NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE + offset)
            .ok_or(LunarError::YearOutOfRange(date.year))
    }

    fn is_leap_month(&self, year: i32, month: u8) -> bool {
        matches!(Self::leap_month(year), Ok(Some(leap)) if leap == month)
    }

    fn supports_year(&self, year: i32) -> bool {
        (FIRST_YEAR..=LAST_YEAR).contains(&year)
    }
}
