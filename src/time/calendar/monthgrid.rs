use serde::Serialize;

use crate::error::CalendarError;
use crate::time::utility::{
    check_month0,
    check_year,
    days_of_month,
    first_weekday
};

pub const DAYS_IN_WEEK: usize = 7;
pub const MAX_WEEKS: usize = 6;

/// One slot of a week row: a day of the month, or padding outside it.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(untagged)]
pub enum CalendarCell {
    Day(u32),
    Empty
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Day(day) => Some(*day),
            CalendarCell::Empty => None
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == CalendarCell::Empty
    }
}

pub type Week = [CalendarCell; DAYS_IN_WEEK];

/// Sunday-first week rows of one month.
///
/// Always holds between 4 and 6 rows; the filled cells read row by row are
/// exactly `1..=days_in_month`.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct CalendarGrid {
    month0: u32,
    year: i32,
    weeks: Vec<Week>
}

impl CalendarGrid {
    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn days_in_month(&self) -> u32 {
        days_of_month(self.year, self.month0 + 1)
    }

    /// Filled cells in reading order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().filter_map(CalendarCell::day)
    }

    /// `(week, column)` position of `day`, if the month has it.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(w, week)| {
            week.iter()
                .position(|cell| *cell == CalendarCell::Day(day))
                .map(|c| (w, c))
        })
    }
}

/// Builds the grid of `month0` (0 = January) in `year`.
///
/// # Panics
/// When `month0` or `year` is out of range; see [`try_build_grid`].
pub fn build_grid(month0: u32, year: i32) -> CalendarGrid {
    match try_build_grid(month0, year) {
        Ok(grid) => grid,
        Err(error) => panic!("build_grid: {}", error)
    }
}

pub fn try_build_grid(month0: u32, year: i32) -> Result<CalendarGrid, CalendarError> {
    let month0 = check_month0(month0)?;
    let year = check_year(year)?;
    let first = first_weekday(year, month0)? as usize;
    let days_in_month = days_of_month(year, month0 + 1);

    let mut weeks: Vec<Week> = Vec::with_capacity(MAX_WEEKS);
    let mut next_day = 1u32;
    while weeks.len() < MAX_WEEKS && next_day <= days_in_month {
        let mut week: Week = [CalendarCell::Empty; DAYS_IN_WEEK];
        let start = if weeks.is_empty() { first } else { 0 };
        for cell in week.iter_mut().skip(start) {
            if next_day > days_in_month {
                break;
            }
            *cell = CalendarCell::Day(next_day);
            next_day += 1;
        }
        weeks.push(week);
    }

    while weeks.last().is_some_and(|week| week.iter().all(CalendarCell::is_empty)) {
        weeks.pop();
    }

    log::debug!("built grid for {}/{}: {} weeks, {} days", month0 + 1, year, weeks.len(), days_in_month);
    Ok(CalendarGrid { month0, year, weeks })
}
