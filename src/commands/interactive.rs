use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use lunar_birthday_core::input::Prompter;

use crate::render::Render;
use crate::settings::Settings;

/// Prompt for one person and write their calendar.
pub fn run<R: BufRead, W: Write>(settings: &Settings, prompter: &mut Prompter<R, W>) -> Result<()> {
    let request = prompter
        .ask_request(&settings.defaults)
        .context("Invalid input")?;

    let exported = settings.export(&request)?;
    prompter.say(&exported.render())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunar_birthday_core::config::Config;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_interactive_writes_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_config(Config::default(), Some(dir.path().to_path_buf()), None);
        let mut p = prompter("张三\n1990.05.15\n3\n\n\n\n\n");

        run(&settings, &mut p).unwrap();

        let path = dir.path().join("张三的农历生日.ics");
        let ics = std::fs::read_to_string(&path).unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("ICS文件生成成功"), "{}", output);
    }

    #[test]
    fn test_interactive_bad_date_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_config(Config::default(), Some(dir.path().to_path_buf()), None);
        let mut p = prompter("张三\n15/05/1990\n");

        assert!(run(&settings, &mut p).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
