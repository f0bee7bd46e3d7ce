use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::holidaykind::HolidayKind;

/// A holiday occurrence in some year, keyed by day and month.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct Holiday {
    day: u32,
    month: u32,
    name: &'static str,
    kind: HolidayKind
}

impl Holiday {
    pub(crate) fn new(day: u32, month: u32, name: &'static str, kind: HolidayKind) -> Holiday {
        Holiday { day, month, name, kind }
    }

    pub(crate) fn on(date: NaiveDate, name: &'static str, kind: HolidayKind) -> Holiday {
        Holiday::new(date.day(), date.month(), name, kind)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    #[inline]
    pub fn falls_on(&self, day: u32, month: u32) -> bool {
        self.day == day && self.month == month
    }

    pub fn date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
