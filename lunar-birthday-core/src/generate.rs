//! Lunar anniversary generation.
//!
//! A person born on lunar month M day D celebrates on M/D of every following
//! lunar year. Someone born in a leap month only celebrates in the years where
//! the same month is leap again, so those years are skipped, as are years
//! where day D does not exist in month M.

use chrono::NaiveDate;

use crate::error::BirthdayResult;
use crate::lunar::{LunarCalendar, LunarDate, LunarError, LunarLabel};
use crate::request::{PersonRequest, Reminder, Transparency};

/// The lunar date a person's anniversaries are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarAnniversaryRule {
    pub birth: LunarDate,
    pub is_leap_month_birth: bool,
}

impl LunarAnniversaryRule {
    pub fn lunar_month(&self) -> u8 {
        self.birth.month
    }

    pub fn lunar_day(&self) -> u8 {
        self.birth.day
    }

    /// Build the rule for a solar birth date.
    pub fn from_birth_date<C: LunarCalendar + ?Sized>(
        calendar: &C,
        birth_date: NaiveDate,
    ) -> BirthdayResult<Self> {
        let birth = calendar.to_lunar(birth_date)?;
        let is_leap_month_birth = birth.is_leap && calendar.is_leap_month(birth.year, birth.month);
        Ok(LunarAnniversaryRule {
            birth,
            is_leap_month_birth,
        })
    }
}

/// One yearly occurrence of a lunar birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub name: String,
    /// 0 for the birth year.
    pub age: u32,
    pub solar_date: NaiveDate,
    pub lunar_date: LunarDate,
    pub label: LunarLabel,
    pub birth_solar_date: NaiveDate,
    pub birth_label: LunarLabel,
    pub transparency: Transparency,
    pub location: String,
    pub reminder: Option<Reminder>,
}

/// Why no event was produced for a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The birth month is a leap month and this year has no leap copy of it.
    NotLeapMonth { month: u8 },
    /// The calendar rejected the anniversary date, e.g. day 30 of a 29 day month.
    InvalidLunarDate(LunarError),
    /// The year and every later one are outside the calendar's range.
    /// Recorded once, for the first such year; `remaining` counts it and
    /// the years after it that were not generated.
    BeyondCalendarRange { remaining: u32 },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotLeapMonth { month } => {
                write!(f, "month {} is not a leap month this year", month)
            }
            SkipReason::InvalidLunarDate(e) => write!(f, "{}", e),
            SkipReason::BeyondCalendarRange { remaining } => write!(
                f,
                "beyond the supported calendar range, {} years not generated",
                remaining
            ),
        }
    }
}

/// A year for which no event was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedYear {
    pub age: u32,
    pub lunar_year: i32,
    pub reason: SkipReason,
}

/// Result of generating one person's anniversaries.
#[derive(Debug, Clone)]
pub struct Generation {
    pub rule: LunarAnniversaryRule,
    /// Events in increasing age order.
    pub events: Vec<CalendarEvent>,
    pub skipped: Vec<SkippedYear>,
}

/// Generate the birth year event and up to `request.years - 1` anniversaries.
///
/// Age `i` is celebrated in lunar year `birth lunar year + i`, not in solar
/// year `birth year + i`. The two only differ for births before lunar new
/// year, where counting solar years would skip the first lunar anniversary.
///
/// Fails only when the birth date itself cannot be converted; problems with
/// individual years end up in [`Generation::skipped`]. Generation stops at
/// the first year the calendar cannot represent.
pub fn generate<C: LunarCalendar + ?Sized>(
    calendar: &C,
    request: &PersonRequest,
) -> BirthdayResult<Generation> {
    let rule = LunarAnniversaryRule::from_birth_date(calendar, request.birth_date)?;
    let birth_label = calendar.label(&rule.birth);

    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for age in 0..request.years {
        let Some(lunar_year) = i32::try_from(age)
            .ok()
            .and_then(|age| rule.birth.year.checked_add(age))
        else {
            tracing::debug!(name = %request.name, age, "lunar year overflows, stopping");
            break;
        };

        if !calendar.supports_year(lunar_year) {
            let reason = SkipReason::BeyondCalendarRange {
                remaining: request.years - age,
            };
            tracing::debug!(name = %request.name, age, lunar_year, %reason, "stopping");
            skipped.push(SkippedYear {
                age,
                lunar_year,
                reason,
            });
            break;
        }

        match anniversary(calendar, &rule, lunar_year) {
            Ok((lunar_date, solar_date)) => {
                tracing::debug!(name = %request.name, age, %solar_date, "anniversary");
                events.push(CalendarEvent {
                    name: request.name.clone(),
                    age,
                    solar_date,
                    lunar_date,
                    label: calendar.label(&lunar_date),
                    birth_solar_date: request.birth_date,
                    birth_label: birth_label.clone(),
                    transparency: request.transparency,
                    location: request.location.clone(),
                    reminder: request.reminder.clone(),
                });
            }
            Err(reason) => {
                tracing::debug!(name = %request.name, age, lunar_year, %reason, "skipping year");
                skipped.push(SkippedYear {
                    age,
                    lunar_year,
                    reason,
                });
            }
        }
    }

    Ok(Generation {
        rule,
        events,
        skipped,
    })
}

/// Place the anniversary in lunar `year`, returning its lunar and solar dates.
fn anniversary<C: LunarCalendar + ?Sized>(
    calendar: &C,
    rule: &LunarAnniversaryRule,
    year: i32,
) -> Result<(LunarDate, NaiveDate), SkipReason> {
    if year != rule.birth.year
        && rule.is_leap_month_birth
        && !calendar.is_leap_month(year, rule.lunar_month())
    {
        return Err(SkipReason::NotLeapMonth {
            month: rule.lunar_month(),
        });
    }

    let date = rule.birth.in_year(year);
    let solar = calendar
        .to_solar(&date)
        .map_err(SkipReason::InvalidLunarDate)?;
    Ok((date, solar))
}
