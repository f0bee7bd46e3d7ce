use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::locale::month_name;
use crate::time::utility::{check_month0, check_year};

use super::monthgrid::{try_build_grid, CalendarGrid};

/// The displayed month: 0-based month and year.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
pub struct MonthCursor {
    month0: u32,
    year: i32
}

impl MonthCursor {
    pub fn new(month0: u32, year: i32) -> Result<MonthCursor, CalendarError> {
        Ok(MonthCursor { month0: check_month0(month0)?, year: check_year(year)? })
    }

    /// Month that contains `today`.
    pub fn containing(today: NaiveDate) -> Result<MonthCursor, CalendarError> {
        MonthCursor::new(today.month0(), today.year())
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month0).unwrap_or_default()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d.month0() == self.month0 && d.year() == self.year
    }

    fn shift_months(&self, number: i32) -> Result<MonthCursor, CalendarError> {
        let total = self.month0 as i32 + number;
        MonthCursor::new(total.rem_euclid(12) as u32, self.year + total.div_euclid(12))
    }

    /// January follows December of the previous year.
    pub fn next_month(&self) -> Result<MonthCursor, CalendarError> {
        self.shift_months(1)
    }

    pub fn previous_month(&self) -> Result<MonthCursor, CalendarError> {
        self.shift_months(-1)
    }

    pub fn next_year(&self) -> Result<MonthCursor, CalendarError> {
        self.shift_months(12)
    }

    pub fn previous_year(&self) -> Result<MonthCursor, CalendarError> {
        self.shift_months(-12)
    }

    pub fn grid(&self) -> CalendarGrid {
        // month0 and year were checked on construction
        match try_build_grid(self.month0, self.year) {
            Ok(grid) => grid,
            Err(error) => unreachable!("validated cursor rejected: {}", error)
        }
    }
}
