//! Generate and write one person's calendar.

use std::path::{Path, PathBuf};

use crate::error::BirthdayResult;
use crate::generate::{Generation, generate};
use crate::ics::{IcsOptions, generate_ics, write_calendar};
use crate::lunar::LunarCalendar;
use crate::request::PersonRequest;

/// A calendar file written for one request.
#[derive(Debug)]
pub struct Exported {
    pub path: PathBuf,
    pub generation: Generation,
}

/// Generate every anniversary for `request`, then write them to `dir`.
///
/// Nothing is written when the birth date itself cannot be converted.
pub fn export_request<C: LunarCalendar + ?Sized>(
    calendar: &C,
    request: &PersonRequest,
    options: &IcsOptions,
    dir: &Path,
) -> BirthdayResult<Exported> {
    let generation = generate(calendar, request)?;
    let content = generate_ics(&generation.events, options);
    let path = write_calendar(dir, &request.name, &content)?;
    Ok(Exported { path, generation })
}
