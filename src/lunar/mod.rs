//! Chinese lunisolar calendar
//!
//! Converts Gregorian dates to lunar dates for the years 2000 to 2199 from
//! compact per-year tables, names years by their stem, branch and zodiac, and
//! locates the 24 solar terms for 2000 to 2050.
//!
//!```rust
//!use epd_calendar::lunar::LunarDate;
//!
//!let spring_festival = LunarDate::from_solar(2024, 2, 10);
//!assert_eq!((spring_festival.month, spring_festival.day), (1, 1));
//!assert_eq!(spring_festival.month_name(), "正月");
//!assert_eq!(spring_festival.day_name(), "初一");
//!assert_eq!(spring_festival.zodiac_name(), "龙");
//!```

use bit_field::BitField;

mod solar_term;
mod tables;

pub use self::solar_term::{
    solar_term_countdown, solar_term_day, solar_term_on, SolarTerm, SolarTermCountdown,
    SOLAR_TERM_NAMES,
};

use self::tables::{BASE_YEAR, LUNAR_MONTH_DAYS, LUNAR_NEW_YEAR};

/// Names of the weekdays, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Lunar month names, index 0 is used for invalid dates
pub const MONTH_NAMES: [&str; 13] = [
    "未知", "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月",
    "腊月",
];

const LEAP_MONTH_NAMES: [&str; 13] = [
    "未知", "闰正月", "闰二月", "闰三月", "闰四月", "闰五月", "闰六月", "闰七月", "闰八月",
    "闰九月", "闰十月", "闰冬月", "闰腊月",
];

/// Lunar day names, index 0 is used for invalid dates
pub const DAY_NAMES: [&str; 31] = [
    "未知", "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
    "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三",
    "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Zodiac animals, indexed by `year % 12`
pub const ZODIAC_NAMES: [&str; 12] = [
    "猴", "鸡", "狗", "猪", "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊",
];

/// Heavenly stems, indexed by `year % 10`
pub const STEM_NAMES: [&str; 10] = ["庚", "辛", "壬", "癸", "甲", "乙", "丙", "丁", "戊", "己"];

/// Earthly branches, indexed by `year % 12`
pub const BRANCH_NAMES: [&str; 12] = [
    "申", "酉", "戌", "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未",
];

/// A date of the lunar calendar
///
/// `year == 0` marks a date outside of the tables, see [`is_valid`](LunarDate::is_valid).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    /// Gregorian year the lunar year starts in
    pub year: u16,
    /// 1 to 12
    pub month: u8,
    /// 1 to 30
    pub day: u8,
    /// The month is the leap month following `month`
    pub is_leap: bool,
}

impl LunarDate {
    /// Returned for dates the tables do not cover
    pub const INVALID: LunarDate = LunarDate {
        year: 0,
        month: 0,
        day: 0,
        is_leap: false,
    };

    /// Converts a Gregorian date.
    ///
    /// Returns [`LunarDate::INVALID`] for years outside of 2000 to 2199 and for
    /// months or days out of range.
    pub fn from_solar(year: u16, month: u8, day: u8) -> LunarDate {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return LunarDate::INVALID;
        }
        let first = BASE_YEAR + 3;
        let last = BASE_YEAR + (LUNAR_NEW_YEAR.len() - 2) as u16;
        if year < first || year > last {
            return LunarDate::INVALID;
        }

        let mut index = usize::from(year - BASE_YEAR);
        let packed = pack(year, month, day);
        if LUNAR_NEW_YEAR[index] > packed {
            // before the new year, still in the previous lunar year
            index -= 1;
        }
        let new_year = LUNAR_NEW_YEAR[index];
        let (ny_year, ny_month, ny_day) = (
            new_year.get_bits(9..21) as u16,
            new_year.get_bits(5..9) as u8,
            new_year.get_bits(0..5) as u8,
        );
        let mut offset = day_number(year, month, day) - day_number(ny_year, ny_month, ny_day) + 1;

        let month_days = LUNAR_MONTH_DAYS[index];
        let leap = month_days.get_bits(13..17) as u8;
        let mut lunar_month = 1u8;
        for i in 0..13 {
            let length = if month_days.get_bit(12 - i) { 30 } else { 29 };
            if offset > length {
                lunar_month += 1;
                offset -= length;
            } else {
                break;
            }
        }

        // months after the leap month are shifted by one
        let mut is_leap = false;
        if leap != 0 && lunar_month > leap {
            is_leap = lunar_month == leap + 1;
            lunar_month -= 1;
        }

        LunarDate {
            year: BASE_YEAR + index as u16,
            month: lunar_month,
            day: offset as u8,
            is_leap,
        }
    }

    /// false for [`LunarDate::INVALID`]
    pub fn is_valid(&self) -> bool {
        self.year != 0
    }

    /// Index into [`ZODIAC_NAMES`]
    pub fn zodiac(&self) -> usize {
        usize::from(self.year % 12)
    }

    /// Index into [`STEM_NAMES`]
    pub fn stem(&self) -> usize {
        usize::from(self.year % 10)
    }

    /// Index into [`BRANCH_NAMES`]
    pub fn branch(&self) -> usize {
        usize::from(self.year % 12)
    }

    /// Zodiac animal of the year
    pub fn zodiac_name(&self) -> &'static str {
        ZODIAC_NAMES[self.zodiac()]
    }

    /// Heavenly stem of the year
    pub fn stem_name(&self) -> &'static str {
        STEM_NAMES[self.stem()]
    }

    /// Earthly branch of the year
    pub fn branch_name(&self) -> &'static str {
        BRANCH_NAMES[self.branch()]
    }

    /// Month name, leap months carry the 闰 prefix
    pub fn month_name(&self) -> &'static str {
        let names = if self.is_leap {
            &LEAP_MONTH_NAMES
        } else {
            &MONTH_NAMES
        };
        names.get(usize::from(self.month)).copied().unwrap_or(names[0])
    }

    /// Day name, 初一 to 三十
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES
            .get(usize::from(self.day))
            .copied()
            .unwrap_or(DAY_NAMES[0])
    }
}

/// `year << 9 | month << 5 | day`, the layout of the new year table
fn pack(year: u16, month: u8, day: u8) -> u32 {
    (u32::from(year) << 9) | (u32::from(month) << 5) | u32::from(day)
}

/// Days since a fixed epoch, valid for Gregorian dates after 1582
fn day_number(year: u16, month: u8, day: u8) -> i32 {
    // count from March so the leap day is the last day of the year
    let m = (i32::from(month) + 9) % 12;
    let y = i32::from(year) - m / 10;
    365 * y + y / 4 - y / 100 + y / 400 + (m * 306 + 5) / 10 + (i32::from(day) - 1)
}
