//! ICS file generation.
//!
//! Calendars are rendered as RFC 5545 text with a fixed property order so the
//! output only depends on the events and the generation date.

mod generate;
mod write;

pub use generate::{IcsOptions, generate_ics, DEFAULT_UID_DOMAIN};
pub use write::{output_filename, write_calendar, OUTPUT_SUFFIX};
