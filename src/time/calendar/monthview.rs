use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::error::CalendarError;
use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::holidaykind::{HolidayKind, HolidayKinds};
use crate::time::holiday::holidayset::HolidaySet;
use crate::time::utility::weekday_from_sunday;

use super::monthcursor::MonthCursor;
use super::monthgrid::{CalendarCell, DAYS_IN_WEEK};

#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct DayCell {
    day: u32,
    weekday: Weekday,
    is_today: bool,
    holidays: Vec<Holiday>
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday == Weekday::Sun
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn is_holiday(&self) -> bool {
        !self.holidays.is_empty()
    }

    pub fn holiday_name(&self) -> Option<&'static str> {
        self.holidays.first().map(Holiday::name)
    }

    pub fn is_kind(&self, kind: HolidayKind) -> bool {
        self.holidays.iter().any(|h| h.kind() == kind)
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum DayView {
    Day(DayCell),
    Empty
}

impl DayView {
    pub fn cell(&self) -> Option<&DayCell> {
        match self {
            DayView::Day(cell) => Some(cell),
            DayView::Empty => None
        }
    }
}

/// A month grid annotated with holidays and the caller's current date.
///
/// `today` is supplied by the caller; nothing here reads the clock.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct MonthView {
    cursor: MonthCursor,
    month_name: &'static str,
    weeks: Vec<Vec<DayView>>
}

impl MonthView {
    pub fn new(cursor: MonthCursor, today: NaiveDate, kinds: HolidayKinds) -> Result<MonthView, CalendarError> {
        let grid = cursor.grid();
        let holidays = HolidaySet::try_new(cursor.year(), kinds)?;
        let month = cursor.month0() + 1;
        let today_in_view = cursor.contains(today);

        let weeks: Vec<Vec<DayView>> = grid.weeks()
            .iter()
            .map(|week| {
                week.iter()
                    .enumerate()
                    .map(|(column, cell)| match cell {
                        CalendarCell::Empty => DayView::Empty,
                        CalendarCell::Day(day) => DayView::Day(DayCell {
                            day: *day,
                            weekday: weekday_from_sunday(column),
                            is_today: today_in_view && NaiveDate::from_ymd_opt(cursor.year(), month, *day) == Some(today),
                            holidays: holidays.iter().filter(|h| h.falls_on(*day, month)).cloned().collect()
                        })
                    })
                    .collect()
            })
            .collect();

        log::debug!("month view {}/{}: {} holidays in view", month, cursor.year(),
                    weeks.iter().flatten().filter_map(DayView::cell).filter(|c| c.is_holiday()).count());
        Ok(MonthView { cursor, month_name: cursor.month_name(), weeks })
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    pub fn weeks(&self) -> &[Vec<DayView>] {
        &self.weeks
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.weeks.iter().flatten().filter_map(DayView::cell).find(|c| c.day == day)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.weeks.iter().flatten().filter_map(DayView::cell).find(|c| c.is_today)
    }

    pub fn columns(&self) -> usize {
        DAYS_IN_WEEK
    }
}
