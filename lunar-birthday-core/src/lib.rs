//! Lunar birthdays as calendar files.
//!
//! This crate turns a person's Gregorian birth date into yearly lunar
//! birthday events and renders them as an .ics file:
//! - `input` reads `PersonRequest`s from prompts or batch files
//! - `generate` places each anniversary using a `LunarCalendar`
//! - `ics` renders and writes the calendar, `export` ties the steps together

pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod ics;
pub mod input;
pub mod lunar;
pub mod request;

pub use error::{BirthdayError, BirthdayResult};
pub use export::{Exported, export_request};
pub use generate::{CalendarEvent, Generation, SkipReason, SkippedYear, generate};
pub use request::{PersonRequest, RequestDefaults, Transparency};
