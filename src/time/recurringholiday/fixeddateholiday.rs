use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::time::holiday::holidaykind::HolidayKind;
use crate::time::utility::{check_day_month, max_days_of_month};

use super::recurringholiday::RecurringHoliday;

/// Holiday on the same day and month every year.
#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    name: &'static str,
    kind: HolidayKind
}

impl FixedDateHoliday {
    /// Rejects dates no year has, such as 30 February.
    pub fn new(day: u32, month: u32, name: &'static str, kind: HolidayKind) -> Result<FixedDateHoliday, CalendarError> {
        check_day_month(day, month).map_err(|_| CalendarError::InvalidFixedDate { day, month })?;
        Ok(FixedDateHoliday { month, day, name, kind })
    }

    /// Constructor for static tables; an impossible date fails the build.
    pub const fn from_table(day: u32, month: u32, name: &'static str, kind: HolidayKind) -> FixedDateHoliday {
        if month < 1 || month > 12 || day < 1 || day > max_days_of_month(month) {
            panic!("fixed holiday table holds an impossible date");
        }
        FixedDateHoliday { month, day, name, kind }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> HolidayKind {
        self.kind
    }

    /// `None` for 29 February outside leap years.
    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
