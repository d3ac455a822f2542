//! Birthday requests and the field parsers shared by both input modes.

use chrono::NaiveDate;

use crate::error::{BirthdayError, BirthdayResult};

/// Number of anniversaries generated when none is given.
pub const DEFAULT_YEARS: u32 = 100;

/// Alarm trigger used when reminding without an explicit offset: one day before.
pub const DEFAULT_REMIND_OFFSET: &str = "-P1D";

/// Format of solar birth dates in both input modes.
pub const BIRTH_DATE_FORMAT: &str = "%Y.%m.%d";

/// Whether the event blocks time in the calendar (TRANSP)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transparency {
    Opaque,
    #[default]
    Transparent,
}

impl Transparency {
    pub fn from_busy(busy: bool) -> Self {
        if busy {
            Transparency::Opaque
        } else {
            Transparency::Transparent
        }
    }

    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Transparency::Opaque => "OPAQUE",
            Transparency::Transparent => "TRANSPARENT",
        }
    }
}

/// A display alarm attached to every generated event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Signed duration relative to the event start, e.g. `-P1D`
    pub offset: String,
    pub description: String,
}

/// Values used for fields a record leaves blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    pub years: u32,
    pub remind_offset: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        RequestDefaults {
            years: DEFAULT_YEARS,
            remind_offset: DEFAULT_REMIND_OFFSET.to_string(),
        }
    }
}

/// One person whose lunar birthdays should be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Number of anniversaries to consider, counting the birth year. Always >= 1.
    pub years: u32,
    pub transparency: Transparency,
    /// Empty when no location was given.
    pub location: String,
    pub reminder: Option<Reminder>,
}

impl PersonRequest {
    /// A request with default options. Fails if `name` is blank.
    pub fn new(name: &str, birth_date: NaiveDate) -> BirthdayResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BirthdayError::MissingName);
        }
        Ok(PersonRequest {
            name: name.to_string(),
            birth_date,
            years: DEFAULT_YEARS,
            transparency: Transparency::default(),
            location: String::new(),
            reminder: None,
        })
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub fn with_busy(mut self, busy: bool) -> Self {
        self.transparency = Transparency::from_busy(busy);
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.trim().to_string();
        self
    }

    pub fn with_reminder(mut self, offset: &str, description: &str) -> Self {
        self.reminder = Some(Reminder {
            offset: offset.to_string(),
            description: description.trim().to_string(),
        });
        self
    }
}

/// Parse a solar date written as YYYY.MM.DD
pub fn parse_birth_date(input: &str) -> BirthdayResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT)
        .map_err(|_| BirthdayError::DateParse(input.to_string()))
}

/// Parse the number of years to generate; blank means `default`.
pub fn parse_years(input: &str, default: u32) -> BirthdayResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    let years: i64 = input
        .parse()
        .map_err(|_| BirthdayError::NumberFormat(input.to_string()))?;
    if years < 1 {
        return Err(BirthdayError::InvalidYears(years));
    }
    u32::try_from(years).map_err(|_| BirthdayError::NumberFormat(input.to_string()))
}

/// `y` (any case) means yes; anything else, including blank, means no.
pub fn parse_flag(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Validate an alarm trigger such as `-P1D`, `-PT6H` or `-P1DT6H`; blank means `default`.
pub fn parse_remind_offset(input: &str, default: &str) -> BirthdayResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default.to_string());
    }
    let unsigned = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);
    if !unsigned.starts_with('P') || iso8601::duration(unsigned).is_err() {
        return Err(BirthdayError::InvalidRemindOffset(input.to_string()));
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("1990.05.15").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
        );
        assert_eq!(
            parse_birth_date(" 1985.12.01 ").unwrap(),
            NaiveDate::from_ymd_opt(1985, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_birth_date_rejects_other_formats() {
        for input in ["1990-05-15", "1990.13.01", "1990.02.30", "", "tomorrow"] {
            assert!(
                matches!(parse_birth_date(input), Err(BirthdayError::DateParse(_))),
                "'{}' should not parse",
                input
            );
        }
    }

    #[test]
    fn test_parse_years() {
        assert_eq!(parse_years("", 100).unwrap(), 100);
        assert_eq!(parse_years("  ", 80).unwrap(), 80);
        assert_eq!(parse_years("50", 100).unwrap(), 50);
        assert!(matches!(parse_years("fifty", 100), Err(BirthdayError::NumberFormat(_))));
        assert!(matches!(parse_years("0", 100), Err(BirthdayError::InvalidYears(0))));
        assert!(matches!(parse_years("-3", 100), Err(BirthdayError::InvalidYears(-3))));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("y"));
        assert!(parse_flag(" Y "));
        assert!(!parse_flag(""));
        assert!(!parse_flag("n"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("1"));
    }

    #[test]
    fn test_parse_remind_offset() {
        assert_eq!(parse_remind_offset("", "-P1D").unwrap(), "-P1D");
        assert_eq!(parse_remind_offset("-P2D", "-P1D").unwrap(), "-P2D");
        assert_eq!(parse_remind_offset("-PT6H", "-P1D").unwrap(), "-PT6H");
        assert_eq!(parse_remind_offset("-P1DT6H", "-P1D").unwrap(), "-P1DT6H");
        assert!(matches!(
            parse_remind_offset("one day", "-P1D"),
            Err(BirthdayError::InvalidRemindOffset(_))
        ));
    }

    #[test]
    fn test_request_rejects_blank_name() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        assert!(matches!(PersonRequest::new("  ", date), Err(BirthdayError::MissingName)));
    }

    #[test]
    fn test_request_defaults() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let request = PersonRequest::new("张三", date).unwrap();
        assert_eq!(request.years, 100);
        assert_eq!(request.transparency, Transparency::Transparent);
        assert_eq!(request.location, "");
        assert_eq!(request.reminder, None);
        assert_eq!(request.with_busy(true).transparency, Transparency::Opaque);
    }
}
