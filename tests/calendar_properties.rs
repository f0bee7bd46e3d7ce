//! Properties of the grid builder and the holiday engine over many months and years.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use proptest::prelude::*;

use calendario::time::utility::{days_of_month, is_leap};
use calendario::{
    all_holidays, build_grid, easter_sunday, CalendarCell, HolidayKind, HolidayKinds, HolidaySet,
};

fn national() -> HolidayKinds {
    HolidayKinds::only(HolidayKind::National)
}

fn kinds_from_bits(bits: u8) -> HolidayKinds {
    HolidayKind::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, kind)| kind)
        .collect()
}

proptest! {
    #[test]
    fn grid_rows_hold_the_month_in_order(month0 in 0u32..12, year in 1i32..=9999) {
        let grid = build_grid(month0, year);
        prop_assert!((4..=6).contains(&grid.week_count()));
        prop_assert!(grid.weeks().iter().all(|week| week.len() == 7));
        let days: Vec<u32> = grid.days().collect();
        let expected: Vec<u32> = (1..=days_of_month(year, month0 + 1)).collect();
        prop_assert_eq!(days, expected);
        let last = grid.weeks().last().unwrap();
        prop_assert!(last.iter().any(|cell| !cell.is_empty()));
    }

    #[test]
    fn grid_columns_match_weekdays(month0 in 0u32..12, year in 1583i32..=9999) {
        let grid = build_grid(month0, year);
        for (week, column) in [(0usize, 0usize), (1, 3), (2, 6)] {
            if let CalendarCell::Day(day) = grid.weeks()[week][column] {
                let date = NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap();
                prop_assert_eq!(date.weekday().num_days_from_sunday() as usize, column);
            }
        }
    }

    #[test]
    fn february_has_29_days_only_in_leap_years(year in 1i32..=9999) {
        let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        prop_assert_eq!(is_leap(year), leap);
        prop_assert_eq!(days_of_month(year, 2) == 29, leap);
        prop_assert_eq!(build_grid(1, year).days().count() == 29, leap);
    }

    #[test]
    fn good_friday_and_corpus_christi_weekdays(year in 1583i32..=4099) {
        let easter = easter_sunday(year);
        let good_friday = easter - TimeDelta::days(2);
        let corpus_christi = easter + TimeDelta::days(60);
        prop_assert_eq!(good_friday.weekday(), Weekday::Fri);
        prop_assert_eq!(corpus_christi.weekday(), Weekday::Thu);

        let set = HolidaySet::new(year, HolidayKinds::all());
        prop_assert!(set.holidays_on(good_friday.day(), good_friday.month()).any(|h| h.name() == "Sexta-feira Santa"));
        prop_assert!(set.holidays_on(corpus_christi.day(), corpus_christi.month()).any(|h| h.name() == "Corpus Christi"));
    }

    #[test]
    fn eleven_national_holidays_every_year(year in 1i32..=9999) {
        let holidays = all_holidays(year, national());
        prop_assert_eq!(holidays.len(), 11);
        prop_assert!(holidays.iter().all(|h| h.kind() == HolidayKind::National));
        prop_assert!(holidays.iter().all(|h| h.date(year).is_some()));
    }

    #[test]
    fn christmas_with_national_kinds(year in 1i32..=9999, bits in 0u8..16) {
        let kinds = kinds_from_bits(bits).with(HolidayKind::National);
        prop_assert!(HolidaySet::new(year, kinds).is_holiday(25, 12));
    }

    #[test]
    fn empty_filter_is_empty(year in 1i32..=9999) {
        prop_assert!(all_holidays(year, HolidayKinds::empty()).is_empty());
    }

    #[test]
    fn filters_only_return_selected_kinds(year in 1i32..=9999, bits in 0u8..16) {
        let kinds = kinds_from_bits(bits);
        prop_assert!(all_holidays(year, kinds).iter().all(|h| kinds.contains(h.kind())));
    }

    #[test]
    fn repeated_calls_are_value_equal(month0 in 0u32..12, year in 1i32..=9999, bits in 0u8..16) {
        prop_assert_eq!(build_grid(month0, year), build_grid(month0, year));
        let kinds = kinds_from_bits(bits);
        prop_assert_eq!(all_holidays(year, kinds), all_holidays(year, kinds));
    }
}

#[test]
fn reference_easter_sundays() {
    let cases = [(2023, 4, 9), (2024, 3, 31), (2025, 4, 20)];
    for (year, month, day) in cases {
        let easter = easter_sunday(year);
        assert_eq!((easter.month(), easter.day()), (month, day), "Easter {}", year);
    }
}

#[test]
fn holiday_sets_serialize_for_the_view_layer() {
    let set = HolidaySet::new(2024, national());
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["kinds"], serde_json::json!(["national"]));
    assert_eq!(json["holidays"][0]["name"], "Confraternização Universal");
    assert_eq!(json["holidays"][0]["kind"], "national");
    assert_eq!(json["holidays"][10]["day"], 31);
    assert_eq!(json["holidays"][10]["month"], 3);
}
