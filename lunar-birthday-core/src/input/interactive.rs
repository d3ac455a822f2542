//! Console prompts over injected reader and writer.

use std::io::{BufRead, Write};

use crate::error::{BirthdayError, BirthdayResult};
use crate::request::{
    PersonRequest, RequestDefaults, parse_birth_date, parse_flag, parse_remind_offset, parse_years,
};

/// How requests are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch,
}

impl Mode {
    /// `1` or blank selects interactive entry, `2` batch entry.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "" | "1" => Some(Mode::Interactive),
            "2" => Some(Mode::Batch),
            _ => None,
        }
    }
}

/// Asks questions on `output` and reads answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt` and return the answer without its line ending.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, prompt: &str) -> BirthdayResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, message: &str) -> BirthdayResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn ask_mode(&mut self) -> BirthdayResult<Option<Mode>> {
        let answer = self.ask("请选择运行模式：1手动输入；2文件批量输入。默认手动输入：")?;
        Ok(Mode::parse(&answer))
    }

    /// Ask for every field of one request, in order.
    ///
    /// The remind offset is only asked for when a reminder was requested.
    pub fn ask_request(&mut self, defaults: &RequestDefaults) -> BirthdayResult<PersonRequest> {
        let name = self.ask("请输入姓名：")?;
        if name.trim().is_empty() {
            return Err(BirthdayError::MissingName);
        }

        let birth_date = parse_birth_date(&self.ask("请输入公历生日（格式：yyyy.MM.dd）：")?)?;

        let years = parse_years(
            &self.ask(&format!(
                "请输入生成未来多少年的农历生日（默认生成{}）：",
                defaults.years
            ))?,
            defaults.years,
        )?;

        let busy = parse_flag(&self.ask("请输入事件忙碌状态（输入 y 表示忙碌，直接回车表示空闲）：")?);
        let location = self.ask("请输入事件地址（可选，按回车跳过）：")?;
        let remind = parse_flag(&self.ask("是否提醒（y/n，默认n，按回车跳过）：")?);

        let remind_offset = if remind {
            parse_remind_offset(
                &self.ask("请输入提醒时间（默认提前1天）：")?,
                &defaults.remind_offset,
            )?
        } else {
            defaults.remind_offset.clone()
        };

        let remind_description = self.ask("请输入提醒描述（可选，默认空，按回车跳过）：")?;

        let mut request = PersonRequest::new(&name, birth_date)?
            .with_years(years)
            .with_busy(busy)
            .with_location(&location);
        if remind {
            request = request.with_reminder(&remind_offset, &remind_description);
        }
        Ok(request)
    }

    /// Ask for the batch file; `None` when the answer is blank.
    pub fn ask_batch_path(&mut self) -> BirthdayResult<Option<String>> {
        let answer = self.ask("请输入批量输入文件路径（直接回车查看文件格式说明）：")?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    /// Writer the prompts go to, for output that is not a question.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Transparency;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse(""), Some(Mode::Interactive));
        assert_eq!(Mode::parse(" 1 "), Some(Mode::Interactive));
        assert_eq!(Mode::parse("2"), Some(Mode::Batch));
        assert_eq!(Mode::parse("3"), None);
        assert_eq!(Mode::parse("batch"), None);
    }

    #[test]
    fn test_ask_request_with_defaults() {
        let mut p = prompter("张三\n1990.05.15\n\n\n\n\n\n");
        let request = p.ask_request(&RequestDefaults::default()).unwrap();

        assert_eq!(request.name, "张三");
        assert_eq!(request.birth_date, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(request.years, 100);
        assert_eq!(request.transparency, Transparency::Transparent);
        assert_eq!(request.location, "");
        assert_eq!(request.reminder, None);
    }

    #[test]
    fn test_ask_request_all_fields() {
        let mut p = prompter("张三\n1990.05.15\n50\ny\n北京市\ny\n-P2D\n请提前准备礼物\n");
        let request = p.ask_request(&RequestDefaults::default()).unwrap();

        assert_eq!(request.years, 50);
        assert_eq!(request.transparency, Transparency::Opaque);
        assert_eq!(request.location, "北京市");
        let reminder = request.reminder.unwrap();
        assert_eq!(reminder.offset, "-P2D");
        assert_eq!(reminder.description, "请提前准备礼物");
    }

    #[test]
    fn test_ask_request_blank_remind_offset_uses_default() {
        let mut p = prompter("张三\n1990.05.15\n3\n\n\ny\n\n\n");
        let request = p.ask_request(&RequestDefaults::default()).unwrap();

        assert_eq!(request.reminder.unwrap().offset, "-P1D");
    }

    #[test]
    fn test_ask_request_skips_offset_prompt_without_reminder() {
        // The line after "n" is the description, not an offset.
        let mut p = prompter("张三\n1990.05.15\n3\n\n\nn\n备注\n");
        let request = p.ask_request(&RequestDefaults::default()).unwrap();
        assert_eq!(request.reminder, None);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(!output.contains("请输入提醒时间"));
        assert!(output.contains("请输入提醒描述"));
    }

    #[test]
    fn test_ask_request_handles_crlf() {
        let mut p = prompter("张三\r\n1990.05.15\r\n5\r\n\r\n\r\n\r\n\r\n");
        let request = p.ask_request(&RequestDefaults::default()).unwrap();
        assert_eq!(request.years, 5);
    }

    #[test]
    fn test_ask_request_bad_date() {
        let mut p = prompter("张三\n1990-05-15\n");
        let err = p.ask_request(&RequestDefaults::default()).unwrap_err();
        assert!(matches!(err, BirthdayError::DateParse(_)), "got {:?}", err);
    }

    #[test]
    fn test_ask_request_bad_years() {
        let mut p = prompter("张三\n1990.05.15\nmany\n");
        let err = p.ask_request(&RequestDefaults::default()).unwrap_err();
        assert!(matches!(err, BirthdayError::NumberFormat(_)), "got {:?}", err);
    }

    #[test]
    fn test_ask_request_empty_input() {
        let mut p = prompter("");
        let err = p.ask_request(&RequestDefaults::default()).unwrap_err();
        assert!(matches!(err, BirthdayError::MissingName), "got {:?}", err);
    }

    #[test]
    fn test_prompts_are_written_in_order() {
        let mut p = prompter("张三\n1990.05.15\n\n\n\n\n\n");
        p.ask_request(&RequestDefaults::default()).unwrap();
        let output = String::from_utf8(p.into_output()).unwrap();

        let order = ["请输入姓名", "请输入公历生日", "请输入生成未来多少年", "请输入事件忙碌状态", "请输入事件地址", "是否提醒", "请输入提醒描述"];
        let positions: Vec<usize> = order.iter().map(|p| output.find(p).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", output);
    }

    #[test]
    fn test_ask_batch_path() {
        assert_eq!(prompter("people.txt\n").ask_batch_path().unwrap(), Some("people.txt".to_string()));
        assert_eq!(prompter("\n").ask_batch_path().unwrap(), None);
    }
}
