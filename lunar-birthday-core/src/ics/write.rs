//! Writing generated calendars to disk.

use std::path::{Path, PathBuf};

use crate::error::{BirthdayError, BirthdayResult};

/// Suffix appended to a person's name to form the output filename.
pub const OUTPUT_SUFFIX: &str = "的农历生日.ics";

/// Filename for a person's calendar, e.g. `张三的农历生日.ics`.
///
/// Characters that cannot appear in a filename are replaced with `_`.
pub fn output_filename(name: &str) -> String {
    let safe: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}{}", safe, OUTPUT_SUFFIX)
}

/// Write `content` as UTF-8 into `dir/<name>的农历生日.ics`, replacing any existing file.
pub fn write_calendar(dir: &Path, name: &str, content: &str) -> BirthdayResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| BirthdayError::file_io(dir, e))?;

    let path = dir.join(output_filename(name));
    std::fs::write(&path, content).map_err(|e| BirthdayError::file_io(&path, e))?;

    tracing::info!(path = %path.display(), "wrote calendar");
    Ok(path)
}
