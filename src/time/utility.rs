use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Longest length `month` (1-based) can have in any year.
pub const fn max_days_of_month (month: u32) -> u32 {
    days_of_month(2000, month)
}

pub fn check_year(year: i32) -> Result<i32, CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::YearOutOfRange(year))
    }
}

pub fn check_month0(month0: u32) -> Result<u32, CalendarError> {
    if month0 < 12 {
        Ok(month0)
    } else {
        Err(CalendarError::MonthOutOfRange(month0))
    }
}

pub fn check_day_month(day: u32, month: u32) -> Result<(u32, u32), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    if day == 0 || day > max_days_of_month(month) {
        return Err(CalendarError::DayOutOfRange { day, month });
    }
    Ok((day, month))
}

/// Weekday of the first day of `month0` (0-based), counted from Sunday = 0.
pub fn first_weekday(year: i32, month0: u32) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month0)?;
    Ok(first.weekday().num_days_from_sunday())
}

pub fn first_of_month(year: i32, month0: u32) -> Result<NaiveDate, CalendarError> {
    let year = check_year(year)?;
    let month0 = check_month0(month0)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(CalendarError::YearOutOfRange(year))
}

/// Sunday-first weekday for a column index of a week row.
pub fn weekday_from_sunday(index: usize) -> Weekday {
    // chrono counts from Monday = 0
    Weekday::try_from(((index + 6) % 7) as u8).unwrap_or(Weekday::Sun)
}
