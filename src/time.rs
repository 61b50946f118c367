//! Gregorian date arithmetic on Unix timestamps
//!
//! Timestamps are unsigned 32 bit seconds, so the supported range is
//! 1970-01-01 up to 2106-02-07.

const SECS_PER_DAY: u32 = 86_400;
const SECS_PER_HOUR: u32 = 3_600;
const EPOCH_YEAR: u16 = 1970;

/// Hour offset the device applies when a remote sets the time without one (UTC+8)
pub const DEFAULT_TZ_OFFSET_HOURS: i8 = 8;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of `month` (1-12), 0 for an invalid month
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month < 1 || month > 12 {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month as usize - 1]
    }
}

const fn days_in_year(year: u16) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Day of the week, 0 is Sunday
pub fn day_of_week(year: u16, month: u8, day: u8) -> u8 {
    const T: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = month.clamp(1, 12);
    let y = u32::from(year) - u32::from(month < 3 && year > 0);
    ((y + y / 4 - y / 100 + y / 400 + T[usize::from(month - 1)] + u32::from(day)) % 7) as u8
}

/// Weekday of the first of `month`, the column the calendar grid starts in
pub fn first_weekday_of_month(year: u16, month: u8) -> u8 {
    day_of_week(year, month, 1)
}

/// Shifts a UTC timestamp by a signed number of hours
pub fn local_timestamp(utc: u32, tz_hours: i8) -> u32 {
    utc.wrapping_add_signed(i32::from(tz_hours) * SECS_PER_HOUR as i32)
}

/// A broken down timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 0 is Sunday
    pub weekday: u8,
}

impl DateTime {
    /// Breaks down seconds since 1970-01-01 00:00:00
    pub fn from_epoch(timestamp: u32) -> DateTime {
        let mut days = timestamp / SECS_PER_DAY;
        let secs = timestamp % SECS_PER_DAY;

        let mut year = EPOCH_YEAR;
        while days >= days_in_year(year) {
            days -= days_in_year(year);
            year += 1;
        }

        let mut month = 1;
        while days >= u32::from(days_in_month(year, month)) {
            days -= u32::from(days_in_month(year, month));
            month += 1;
        }

        let day = days as u8 + 1;
        DateTime {
            year,
            month,
            day,
            hour: (secs / SECS_PER_HOUR) as u8,
            minute: (secs % SECS_PER_HOUR / 60) as u8,
            second: (secs % 60) as u8,
            weekday: day_of_week(year, month, day),
        }
    }

    /// Checked constructor, fills in the weekday
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<DateTime> {
        let valid = year >= EPOCH_YEAR
            && (1..=days_in_month(year, month)).contains(&day)
            && hour < 24
            && minute < 60
            && second < 60;
        valid.then(|| DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: day_of_week(year, month, day),
        })
    }

    /// Seconds since 1970-01-01 00:00:00, saturating past 2106
    pub fn to_epoch(&self) -> u32 {
        let mut days: u64 = (EPOCH_YEAR..self.year)
            .map(|y| u64::from(days_in_year(y)))
            .sum();
        days += (1..self.month)
            .map(|m| u64::from(days_in_month(self.year, m)))
            .sum::<u64>();
        days += u64::from(self.day.saturating_sub(1));

        let secs = days * u64::from(SECS_PER_DAY)
            + u64::from(self.hour) * u64::from(SECS_PER_HOUR)
            + u64::from(self.minute) * 60
            + u64::from(self.second);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}
