//! The 24 solar terms (节气)

use bit_field::BitField;

use super::tables::{
    SOLAR_TERM_BASE_DAY, SOLAR_TERM_BITS, SOLAR_TERM_FIRST_YEAR, SOLAR_TERM_LAST_YEAR,
};
use crate::time::days_in_month;

/// Names of the solar terms, 小寒 first
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// One of the 24 solar terms, 0 is 小寒 in early January
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolarTerm(u8);

impl SolarTerm {
    /// `None` for indices past 23
    pub const fn new(index: u8) -> Option<SolarTerm> {
        if index < 24 {
            Some(SolarTerm(index))
        } else {
            None
        }
    }

    /// The term of the half month `day` falls into
    fn of_half_month(month: u8, day: u8) -> SolarTerm {
        SolarTerm((month - 1) * 2 + u8::from(day >= 15))
    }

    /// 0 to 23
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Chinese name
    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[usize::from(self.0)]
    }

    fn next(self) -> SolarTerm {
        SolarTerm((self.0 + 1) % 24)
    }
}

/// The next solar term and how far away it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermCountdown {
    /// Today's term if `days` is 0, the upcoming one otherwise
    pub term: SolarTerm,
    pub days: u8,
}

/// Day of the month of the solar term in the half month `day` falls into.
///
/// Days before the 15th ask for the first term of the month, the others for
/// the second. Returns `None` outside of 2000 to 2050 or for an invalid month
/// or day.
pub fn solar_term_day(year: u16, month: u8, day: u8) -> Option<u8> {
    if !(SOLAR_TERM_FIRST_YEAR..=SOLAR_TERM_LAST_YEAR).contains(&year)
        || !(1..=days_in_month(year, month)).contains(&day)
    {
        return None;
    }
    let term = SolarTerm::of_half_month(month, day).index();
    let byte = SOLAR_TERM_BITS[usize::from(year - SOLAR_TERM_FIRST_YEAR) * 3 + usize::from(term / 8)];
    let base = SOLAR_TERM_BASE_DAY[usize::from(term)];

    if !byte.get_bit(7 - usize::from(term % 8)) {
        return Some(base);
    }
    // a set bit means one day later for these terms until 2043, one day earlier otherwise
    if matches!(term, 1 | 11 | 18 | 21) && year < 2044 {
        Some(base + 1)
    } else {
        Some(base - 1)
    }
}

/// The solar term falling on the given date, if any
pub fn solar_term_on(year: u16, month: u8, day: u8) -> Option<SolarTerm> {
    let term_day = solar_term_day(year, month, day)?;
    (term_day == day).then(|| SolarTerm::of_half_month(month, day))
}

/// Today's solar term or the distance to the next one.
///
/// Returns `None` where [`solar_term_day`] does, including the last days of
/// 2050 whose next term lies past the table.
pub fn solar_term_countdown(year: u16, month: u8, day: u8) -> Option<SolarTermCountdown> {
    let term_day = solar_term_day(year, month, day)?;
    let term = SolarTerm::of_half_month(month, day);

    if day <= term_day {
        return Some(SolarTermCountdown {
            term,
            days: term_day - day,
        });
    }

    let term = term.next();
    let days = if day < 15 {
        // second term of this month
        solar_term_day(year, month, 15)? - day
    } else {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        days_in_month(year, month) - day + solar_term_day(next_year, next_month, 1)?
    };
    Some(SolarTermCountdown { term, days })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(term: u8, days: u8) -> Option<SolarTermCountdown> {
        Some(SolarTermCountdown {
            term: SolarTerm(term),
            days,
        })
    }

    #[test]
    fn term_days() {
        assert_eq!(solar_term_day(2007, 2, 8), Some(4));
        assert_eq!(solar_term_day(2007, 2, 19), Some(19));
        assert_eq!(solar_term_day(2024, 1, 1), Some(6));
        assert_eq!(solar_term_day(2024, 12, 20), Some(21));
        assert_eq!(solar_term_day(1999, 2, 8), None);
        assert_eq!(solar_term_day(2051, 2, 8), None);
        assert_eq!(solar_term_day(2024, 0, 8), None);
    }

    #[test]
    fn term_on_day() {
        assert_eq!(solar_term_on(2024, 2, 4).map(SolarTerm::name), Some("立春"));
        assert_eq!(solar_term_on(2024, 2, 5), None);
        assert_eq!(solar_term_on(2024, 1, 6).map(SolarTerm::name), Some("小寒"));
    }

    #[test]
    fn countdowns() {
        // the reference case: 离雨水还有11天
        assert_eq!(solar_term_countdown(2007, 2, 8), countdown(3, 11));
        assert_eq!(SolarTerm(3).name(), "雨水");
        assert_eq!(solar_term_countdown(2007, 2, 4), countdown(2, 0));
        assert_eq!(solar_term_countdown(2007, 2, 19), countdown(3, 0));
        assert_eq!(solar_term_countdown(2007, 2, 20), countdown(4, 14));
        assert_eq!(solar_term_countdown(2024, 2, 10), countdown(3, 9));
        assert_eq!(solar_term_countdown(2026, 10, 16), countdown(19, 7));
        // leap day
        assert_eq!(solar_term_countdown(2000, 2, 29), countdown(4, 5));
    }

    #[test]
    fn countdown_wraps_into_next_year() {
        assert_eq!(solar_term_countdown(2024, 12, 25), countdown(0, 11));
        assert_eq!(solar_term_countdown(2050, 12, 30), None);
    }

    #[test]
    fn invalid_days() {
        assert_eq!(solar_term_day(2024, 2, 30), None);
        assert_eq!(solar_term_day(2024, 4, 0), None);
        assert_eq!(solar_term_countdown(2024, 2, 31), None);
        assert_eq!(solar_term_countdown(2023, 2, 29), None);
        assert_eq!(solar_term_on(2024, 6, 31), None);
        // the last day of a month counts into the next one
        assert!(solar_term_countdown(2024, 1, 31).is_some());
        assert!(solar_term_countdown(2024, 2, 29).is_some());
    }

    #[test]
    fn term_indices() {
        assert_eq!(SolarTerm::new(23).map(SolarTerm::name), Some("冬至"));
        assert_eq!(SolarTerm::new(24), None);
        assert_eq!(SolarTerm(23).next(), SolarTerm(0));
    }
}
