//! Colored console lines for generation results.

use lunar_birthday_core::{Exported, SkipReason, SkippedYear};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for SkippedYear {
    fn render(&self) -> String {
        let line = match &self.reason {
            SkipReason::BeyondCalendarRange { remaining } => format!(
                "  农历{}年（{}岁）起超出日历支持范围，{} 个年份未生成事件",
                self.lunar_year, self.age, remaining
            ),
            SkipReason::NotLeapMonth { month } => format!(
                "  农历{}年（{}岁）没有闰{}月，未生成事件",
                self.lunar_year, self.age, month
            ),
            SkipReason::InvalidLunarDate(e) => format!(
                "  跳过农历{}年（{}岁）的无效农历日期: {}",
                self.lunar_year, self.age, e
            ),
        };
        line.yellow().to_string()
    }
}

impl Render for Exported {
    fn render(&self) -> String {
        let written = format!(
            "ICS文件生成成功！文件名：{}（{} 个事件）",
            self.path.display(),
            self.generation.events.len()
        );
        let mut lines = vec![written.green().to_string()];

        let leap_skips = self
            .generation
            .skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::NotLeapMonth { .. }))
            .count();
        if leap_skips > 0 {
            let note = format!(
                "  闰{}月出生，{} 个年份没有该闰月，未生成事件",
                self.generation.rule.lunar_month(),
                leap_skips
            );
            lines.push(note.dimmed().to_string());
        }

        lines.extend(
            self.generation
                .skipped
                .iter()
                .filter(|s| !matches!(s.reason, SkipReason::NotLeapMonth { .. }))
                .map(Render::render),
        );

        lines.join("\n")
    }
}

/// A one-line error message in red.
pub fn error_line(message: &str) -> String {
    message.red().to_string()
}
