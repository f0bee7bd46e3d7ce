use chrono::{Datelike, NaiveDate};

use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::holidaykind::HolidayKind;


pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &'static str;

    fn kind(&self) -> HolidayKind;

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate>;

    fn get_holiday(&self, year: i32) -> Option<Holiday> {
        self.get_holiday_date(year)
            .map(|d| Holiday::on(d, self.name(), self.kind()))
    }

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday_date(d.year()).is_some_and(|h| h == *d)
    }
}
