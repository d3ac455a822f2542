//! Batch files: one comma separated record per line.
//!
//! `name,birthDate,years,busy,location,remind,remindOffset,remindDescription`
//! where only the first two fields are required.

use std::path::Path;

use crate::error::{BirthdayError, BirthdayResult};
use crate::request::{
    PersonRequest, RequestDefaults, parse_birth_date, parse_flag, parse_remind_offset, parse_years,
};

/// Shown when no batch file is given.
pub const BATCH_FORMAT_HELP: &str = "\
请参考以下信息，手动创建满足条件的.txt文件（UTF-8 编码，每行一人，字段以英文逗号分隔）：

[姓名（任何文字）,公历生日（YYYY.MM.DD）,生成未来年数（纯整数，默认100）,事件忙碌状态（y忙碌否则空闲）,事件地址（任何文字，可选）,是否提醒（y提醒否则不提醒）,提醒时间（参照下文，默认-P1D）,提醒描述（任何文字，可选）]

示例：
张三,1990.05.15,50,y,北京市,y,-P1D,请提前一天准备礼物
李四,1985.12.01,100,,,n,,
王五,2000.01.10,30,y,上海市,n,,
赵六,1995.07.20,80,,深圳市,y,-P2D,提前两天通知准备

提醒时间：P 表示时间段（Period）；T 分隔日期和时间。D：天、H：小时、M：分钟、S：秒。
如 -P1D 提前1天；-PT6H 提前6小时；-P1DT6H 提前1天6小时。";

/// The outcome of parsing one non-blank line of a batch file.
#[derive(Debug)]
pub struct BatchRecord {
    /// 1-based line number.
    pub line: usize,
    pub result: BirthdayResult<PersonRequest>,
}

/// Parse one record. Blank lines yield `None`.
pub fn parse_line(line: &str, defaults: &RequestDefaults) -> Option<BirthdayResult<PersonRequest>> {
    if line.trim().is_empty() {
        return None;
    }
    Some(parse_fields(line, defaults))
}

fn parse_fields(line: &str, defaults: &RequestDefaults) -> BirthdayResult<PersonRequest> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 2 {
        return Err(BirthdayError::MalformedRecord(format!(
            "expected at least name and birth date, got '{}'",
            line.trim()
        )));
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    let birth_date = parse_birth_date(field(1))?;
    let years = parse_years(field(2), defaults.years)?;
    let busy = parse_flag(field(3));
    let remind = parse_flag(field(5));

    let mut request = PersonRequest::new(field(0), birth_date)?
        .with_years(years)
        .with_busy(busy)
        .with_location(field(4));
    if remind {
        let offset = parse_remind_offset(field(6), &defaults.remind_offset)?;
        request = request.with_reminder(&offset, field(7));
    }
    Ok(request)
}

/// Parse every non-blank line of `text`.
pub fn parse_batch(text: &str, defaults: &RequestDefaults) -> Vec<BatchRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            parse_line(line, defaults).map(|result| BatchRecord {
                line: i + 1,
                result,
            })
        })
        .collect()
}

/// Read and parse a UTF-8 batch file.
pub fn read_batch_file(path: &Path, defaults: &RequestDefaults) -> BirthdayResult<Vec<BatchRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| BirthdayError::file_io(path, e))?;
    Ok(parse_batch(&text, defaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Transparency;
    use chrono::NaiveDate;

    fn parse(line: &str) -> BirthdayResult<PersonRequest> {
        parse_line(line, &RequestDefaults::default()).expect("line is not blank")
    }

    #[test]
    fn test_parse_line_all_fields() {
        let request = parse("张三,1990.05.15,50,y,北京市,y,-P1D,请提前一天准备礼物").unwrap();

        assert_eq!(request.name, "张三");
        assert_eq!(request.birth_date, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(request.years, 50);
        assert_eq!(request.transparency, Transparency::Opaque);
        assert_eq!(request.location, "北京市");
        let reminder = request.reminder.unwrap();
        assert_eq!(reminder.offset, "-P1D");
        assert_eq!(reminder.description, "请提前一天准备礼物");
    }

    #[test]
    fn test_parse_line_empty_fields_take_defaults() {
        let request = parse("李四,1985.12.01,,,,").unwrap();

        assert_eq!(request.name, "李四");
        assert_eq!(request.years, 100);
        assert_eq!(request.transparency, Transparency::Transparent);
        assert_eq!(request.location, "");
        assert_eq!(request.reminder, None);
    }

    #[test]
    fn test_parse_line_missing_fields_take_defaults() {
        let request = parse("王五,2000.01.10").unwrap();
        assert_eq!(request.years, 100);
        assert_eq!(request.reminder, None);

        let request = parse("王五,2000.01.10,30,Y,上海市,Y").unwrap();
        assert_eq!(request.transparency, Transparency::Opaque);
        assert_eq!(request.reminder.unwrap().offset, "-P1D");
    }

    #[test]
    fn test_parse_line_uses_configured_defaults() {
        let defaults = RequestDefaults {
            years: 20,
            remind_offset: "-PT6H".to_string(),
        };
        let request = parse_line("王五,2000.01.10,,,,y", &defaults).unwrap().unwrap();
        assert_eq!(request.years, 20);
        assert_eq!(request.reminder.unwrap().offset, "-PT6H");
    }

    #[test]
    fn test_parse_line_single_field_is_malformed() {
        let err = parse("OnlyOneField").unwrap_err();
        assert!(matches!(err, BirthdayError::MalformedRecord(_)), "got {:?}", err);
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(matches!(parse("张三,1990/05/15"), Err(BirthdayError::DateParse(_))));
        assert!(matches!(parse("张三,1990.05.15,abc"), Err(BirthdayError::NumberFormat(_))));
        assert!(matches!(parse("张三,1990.05.15,0"), Err(BirthdayError::InvalidYears(0))));
        assert!(matches!(parse(",1990.05.15"), Err(BirthdayError::MissingName)));
        assert!(matches!(
            parse("张三,1990.05.15,,,,y,soon"),
            Err(BirthdayError::InvalidRemindOffset(_))
        ));
    }

    #[test]
    fn test_parse_line_blank() {
        assert!(parse_line("", &RequestDefaults::default()).is_none());
        assert!(parse_line("   ", &RequestDefaults::default()).is_none());
    }

    #[test]
    fn test_parse_batch_keeps_line_numbers() {
        let text = "\u{feff}张三,1990.05.15\n\nOnlyOneField\n李四,1985.12.01,,,,\n";
        let records = parse_batch(text, &RequestDefaults::default());

        let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(records[0].result.as_ref().unwrap().name, "张三");
        assert!(records[1].result.is_err());
        assert_eq!(records[2].result.as_ref().unwrap().name, "李四");
    }

    #[test]
    fn test_read_batch_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_batch_file(&dir.path().join("missing.txt"), &RequestDefaults::default())
            .unwrap_err();
        assert!(matches!(err, BirthdayError::FileIo { .. }), "got {:?}", err);
    }
}
