//! Rendering of lunar birthday events as .ics text.

use chrono::NaiveDate;

use crate::generate::CalendarEvent;

/// Domain part of generated UIDs.
pub const DEFAULT_UID_DOMAIN: &str = "kamihara.com";

/// Longest content line in octets before folding (RFC 5545 §3.1).
const MAX_LINE_OCTETS: usize = 75;

/// Settings that are not part of the events themselves.
#[derive(Debug, Clone)]
pub struct IcsOptions {
    pub uid_domain: String,
    /// Day the file is generated, written as DTSTAMP.
    pub stamp: NaiveDate,
}

impl IcsOptions {
    pub fn new(stamp: NaiveDate) -> Self {
        IcsOptions {
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            stamp,
        }
    }

    pub fn with_uid_domain(mut self, domain: &str) -> Self {
        self.uid_domain = domain.to_string();
        self
    }
}

/// Generate a whole VCALENDAR holding one VEVENT per event.
pub fn generate_ics(events: &[CalendarEvent], options: &IcsOptions) -> String {
    let mut ics = IcsWriter::default();

    ics.line("BEGIN:VCALENDAR");
    ics.line("VERSION:2.0");
    ics.line("CALSCALE:GREGORIAN");
    for event in events {
        write_event(&mut ics, event, options);
    }
    ics.line("END:VCALENDAR");

    ics.finish()
}

fn write_event(ics: &mut IcsWriter, event: &CalendarEvent, options: &IcsOptions) {
    let date = event.solar_date.format("%Y%m%d").to_string();

    ics.line("BEGIN:VEVENT");
    ics.line(&format!("UID:{}T000000Z@{}", date, options.uid_domain));
    ics.line(&format!("DTSTAMP:{}T000000Z", options.stamp.format("%Y%m%d")));
    ics.line(&format!("DTSTART;VALUE=DATE:{}", date));
    ics.line(&format!("DTEND;VALUE=DATE:{}", date));
    ics.line(&format!("SUMMARY:{}", escape_text(&summary(event))));
    ics.line(&format!("DESCRIPTION:{}", escape_text(&description(event))));

    if !event.location.is_empty() {
        ics.line(&format!("LOCATION:{}", escape_text(&event.location)));
    }

    ics.line("PRIORITY:5");
    ics.line("CATEGORIES:生日,农历");
    ics.line("CLASS:PRIVATE");
    ics.line("STATUS:CONFIRMED");
    ics.line(&format!("TRANSP:{}", event.transparency.as_ics_str()));

    if let Some(reminder) = &event.reminder {
        ics.line("BEGIN:VALARM");
        ics.line(&format!("TRIGGER:{}", reminder.offset));
        ics.line("ACTION:DISPLAY");
        ics.line(&format!("DESCRIPTION:{}", escape_text(&reminder.description)));
        ics.line("END:VALARM");
    }

    ics.line("END:VEVENT");
}

pub(crate) fn summary(event: &CalendarEvent) -> String {
    format!("{}的农历生日", event.name)
}

pub(crate) fn description(event: &CalendarEvent) -> String {
    format!(
        "这是{}的{}岁农历生日。出生日农历是{}，公历是{}。今天农历是：{}，公历是{}。",
        event.name,
        event.age,
        event.birth_label,
        event.birth_solar_date.format("%Y-%m-%d"),
        event.label,
        event.solar_date.format("%Y-%m-%d"),
    )
}

/// Escape a TEXT value (RFC 5545 §3.3.11)
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Accumulates CRLF terminated, folded content lines.
#[derive(Default)]
struct IcsWriter {
    out: String,
}

impl IcsWriter {
    fn line(&mut self, line: &str) {
        let mut octets = 0;
        for c in line.chars() {
            let len = c.len_utf8();
            if octets + len > MAX_LINE_OCTETS {
                self.out.push_str("\r\n ");
                // the leading space counts towards the next line
                octets = 1;
            }
            self.out.push(c);
            octets += len;
        }
        self.out.push_str("\r\n");
    }

    fn finish(self) -> String {
        self.out
    }
}
