use serde::Serialize;

use crate::error::CalendarError;
use crate::time::utility::check_day_month;

use super::brazilianholidays::try_all_holidays;
use super::holiday::Holiday;
use super::holidaykind::{HolidayKind, HolidayKinds};

/// One year's holidays for a kind filter, queried by day and month.
///
/// Lookups are linear scans; a year holds fewer than twenty entries.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct HolidaySet {
    year: i32,
    kinds: HolidayKinds,
    holidays: Vec<Holiday>
}

impl HolidaySet {
    /// # Panics
    /// When `year` is outside the supported range; see [`HolidaySet::try_new`].
    pub fn new(year: i32, kinds: HolidayKinds) -> HolidaySet {
        match HolidaySet::try_new(year, kinds) {
            Ok(set) => set,
            Err(error) => panic!("HolidaySet::new: {}", error)
        }
    }

    pub fn try_new(year: i32, kinds: HolidayKinds) -> Result<HolidaySet, CalendarError> {
        let holidays = try_all_holidays(year, kinds)?;
        Ok(HolidaySet { year, kinds, holidays })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn kinds(&self) -> HolidayKinds {
        self.kinds
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    pub fn as_slice(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Every entry on `day`/`month`, in list order.
    ///
    /// # Panics
    /// When `day`/`month` cannot name a date; the `try_` queries return the error instead.
    pub fn holidays_on(&self, day: u32, month: u32) -> impl Iterator<Item = &Holiday> {
        expect_valid(self.try_holidays_on(day, month))
    }

    pub fn try_holidays_on(&self, day: u32, month: u32) -> Result<impl Iterator<Item = &Holiday>, CalendarError> {
        let (day, month) = check_day_month(day, month)?;
        Ok(self.holidays.iter().filter(move |h| h.falls_on(day, month)))
    }

    pub fn is_holiday(&self, day: u32, month: u32) -> bool {
        self.holidays_on(day, month).next().is_some()
    }

    pub fn try_is_holiday(&self, day: u32, month: u32) -> Result<bool, CalendarError> {
        Ok(self.try_holidays_on(day, month)?.next().is_some())
    }

    /// Name of the first entry on `day`/`month`.
    pub fn holiday_name(&self, day: u32, month: u32) -> Option<&'static str> {
        self.holidays_on(day, month).next().map(Holiday::name)
    }

    pub fn try_holiday_name(&self, day: u32, month: u32) -> Result<Option<&'static str>, CalendarError> {
        Ok(self.try_holidays_on(day, month)?.next().map(Holiday::name))
    }

    pub fn is_kind(&self, day: u32, month: u32, kind: HolidayKind) -> bool {
        self.holidays_on(day, month).any(|h| h.kind() == kind)
    }

    pub fn try_is_kind(&self, day: u32, month: u32, kind: HolidayKind) -> Result<bool, CalendarError> {
        Ok(self.try_holidays_on(day, month)?.any(|h| h.kind() == kind))
    }

    /// Entries of `month` (1-based), in list order.
    pub fn holidays_in_month(&self, month: u32) -> Result<Vec<&Holiday>, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        Ok(self.holidays.iter().filter(|h| h.month() == month).collect())
    }
}

fn expect_valid<T>(result: Result<T, CalendarError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("holiday query: {}", error)
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}
