use chrono::{NaiveDate, TimeDelta};

use crate::error::CalendarError;
use crate::time::holiday::holidaykind::HolidayKind;
use crate::time::utility::check_year;

use super::recurringholiday::RecurringHoliday;

/// Western Easter Sunday of `year` (anonymous Gregorian algorithm).
///
/// # Panics
/// When `year` is outside the supported range; see [`try_easter_sunday`].
pub fn easter_sunday(year: i32) -> NaiveDate {
    match try_easter_sunday(year) {
        Ok(easter) => easter,
        Err(error) => panic!("easter_sunday: {}", error)
    }
}

pub fn try_easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let year = check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::YearOutOfRange(year))
}

/// Holiday a fixed number of days away from Easter Sunday.
#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    shift_days: i64,
    name: &'static str,
    kind: HolidayKind
}

impl EasterRelatedHoliday {
    pub const fn new(shift_days: i64, name: &'static str, kind: HolidayKind) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days, name, kind }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> HolidayKind {
        self.kind
    }

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        try_easter_sunday(year)
            .ok()
            .and_then(|easter| easter.checked_add_signed(TimeDelta::days(self.shift_days)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn reference_easter_dates() {
        assert_eq!(easter_sunday(2023), ymd(2023, 4, 9));
        assert_eq!(easter_sunday(2024), ymd(2024, 3, 31));
        assert_eq!(easter_sunday(2025), ymd(2025, 4, 20));
        // earliest and latest possible dates
        assert_eq!(easter_sunday(1818), ymd(1818, 3, 22));
        assert_eq!(easter_sunday(2285), ymd(2285, 3, 22));
        assert_eq!(easter_sunday(1943), ymd(1943, 4, 25));
        assert_eq!(easter_sunday(2038), ymd(2038, 4, 25));
    }

    #[test]
    fn easter_is_a_sunday() {
        for year in 1583..=2500 {
            assert_eq!(easter_sunday(year).weekday(), Weekday::Sun, "year {}", year);
        }
    }

    #[test]
    fn shifts_cross_month_boundaries() {
        // Easter 2024 is 31 March; Good Friday falls on 29 March, Corpus Christi on 30 May
        let good_friday = EasterRelatedHoliday::new(-2, "Sexta-feira Santa", HolidayKind::National);
        assert_eq!(good_friday.get_holiday_date(2024), Some(ymd(2024, 3, 29)));
        let carnival = EasterRelatedHoliday::new(-47, "Carnaval", HolidayKind::Optional);
        assert_eq!(carnival.get_holiday_date(2024), Some(ymd(2024, 2, 13)));
        let corpus_christi = EasterRelatedHoliday::new(60, "Corpus Christi", HolidayKind::Optional);
        let holiday = corpus_christi.get_holiday(2024).unwrap();
        assert!(holiday.falls_on(30, 5));
    }

    #[test]
    fn unsupported_years_have_no_easter() {
        assert_eq!(try_easter_sunday(0), Err(CalendarError::YearOutOfRange(0)));
        let easter = EasterRelatedHoliday::new(0, "Páscoa", HolidayKind::National);
        assert_eq!(easter.get_holiday_date(10_000), None);
    }
}
