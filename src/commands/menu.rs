use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use lunar_birthday_core::input::{BATCH_FORMAT_HELP, Mode, Prompter};

use crate::settings::Settings;

/// Ask for the input mode, then run it.
pub fn run<R: BufRead, W: Write>(settings: &Settings, prompter: &mut Prompter<R, W>) -> Result<()> {
    match prompter.ask_mode()? {
        Some(Mode::Interactive) => super::interactive::run(settings, prompter),
        Some(Mode::Batch) => match prompter.ask_batch_path()? {
            Some(path) => {
                super::batch::run(settings, Path::new(&path), prompter.output()).map(|_| ())
            }
            None => {
                prompter.say("未选择文件，程序退出。")?;
                prompter.say(BATCH_FORMAT_HELP)?;
                Ok(())
            }
        },
        None => {
            prompter.say("无效的选择，请选择 1 或 2")?;
            Ok(())
        }
    }
}
