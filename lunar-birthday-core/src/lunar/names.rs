//! Traditional names for lunar years, months and days.

use std::fmt;

use super::LunarDate;

const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Rendered names of a lunar date, e.g. 庚午 / 闰五 / 初一.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarLabel {
    /// Stem-branch (sexagesimal) name of the lunar year.
    pub year: String,
    pub month: String,
    pub day: String,
}

impl LunarLabel {
    pub fn of(date: &LunarDate) -> Self {
        LunarLabel {
            year: year_in_gan_zhi(date.year),
            month: month_in_chinese(date.month, date.is_leap),
            day: day_in_chinese(date.day),
        }
    }
}

impl fmt::Display for LunarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月{}", self.year, self.month, self.day)
    }
}

/// 1984 was 甲子, the start of a sixty year cycle.
pub fn year_in_gan_zhi(year: i32) -> String {
    let offset = (year - 4).rem_euclid(60) as usize;
    format!(
        "{}{}",
        HEAVENLY_STEMS[offset % 10],
        EARTHLY_BRANCHES[offset % 12]
    )
}

pub fn month_in_chinese(month: u8, is_leap: bool) -> String {
    let name = MONTH_NAMES
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .unwrap_or("?");
    if is_leap {
        format!("闰{name}")
    } else {
        name.to_string()
    }
}

pub fn day_in_chinese(day: u8) -> String {
    DAY_NAMES
        .get(usize::from(day).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_in_gan_zhi() {
        assert_eq!(year_in_gan_zhi(1984), "甲子");
        assert_eq!(year_in_gan_zhi(1990), "庚午");
        assert_eq!(year_in_gan_zhi(2024), "甲辰");
        assert_eq!(year_in_gan_zhi(1900), "庚子");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_in_chinese(1, false), "正");
        assert_eq!(month_in_chinese(11, false), "冬");
        assert_eq!(month_in_chinese(12, false), "腊");
        assert_eq!(month_in_chinese(5, true), "闰五");
    }

    #[test]
    fn test_day_names() {
        assert_eq!(day_in_chinese(1), "初一");
        assert_eq!(day_in_chinese(10), "初十");
        assert_eq!(day_in_chinese(20), "二十");
        assert_eq!(day_in_chinese(21), "廿一");
        assert_eq!(day_in_chinese(30), "三十");
    }

    #[test]
    fn test_label_display() {
        let label = LunarLabel::of(&LunarDate::new(1990, 5, 1, true));
        assert_eq!(label.to_string(), "庚午年闰五月初一");
    }
}
