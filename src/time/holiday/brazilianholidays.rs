use crate::error::CalendarError;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::utility::check_year;

use super::holiday::Holiday;
use super::holidaykind::{HolidayKind, HolidayKinds};

use HolidayKind::{National, Optional};

pub static BRAZILIAN_FIXED_HOLIDAYS: [FixedDateHoliday; 12] = [
    FixedDateHoliday::from_table(1, 1, "Confraternização Universal", National),
    FixedDateHoliday::from_table(21, 4, "Tiradentes", National),
    FixedDateHoliday::from_table(1, 5, "Dia do Trabalho", National),
    FixedDateHoliday::from_table(7, 9, "Independência do Brasil", National),
    FixedDateHoliday::from_table(12, 10, "Nossa Senhora Aparecida", National),
    FixedDateHoliday::from_table(2, 11, "Finados", National),
    FixedDateHoliday::from_table(15, 11, "Proclamação da República", National),
    FixedDateHoliday::from_table(20, 11, "Dia Nacional de Zumbi e da Consciência Negra", National),
    FixedDateHoliday::from_table(25, 12, "Natal", National),
    // pontos facultativos
    FixedDateHoliday::from_table(8, 3, "Dia Internacional da Mulher", Optional),
    FixedDateHoliday::from_table(12, 6, "Dia dos Namorados", Optional),
    FixedDateHoliday::from_table(9, 8, "Dia dos Pais", Optional),
];

// Offsets in days from Easter Sunday. Kinds are the observed policy, not derived.
pub static BRAZILIAN_MOVABLE_HOLIDAYS: [EasterRelatedHoliday; 5] = [
    EasterRelatedHoliday::new(-47, "Terça-feira de Carnaval", Optional),
    EasterRelatedHoliday::new(-48, "Segunda-feira de Carnaval", Optional),
    EasterRelatedHoliday::new(-2, "Sexta-feira Santa", National),
    EasterRelatedHoliday::new(0, "Páscoa", National),
    EasterRelatedHoliday::new(60, "Corpus Christi", Optional),
];

fn recurring_holidays() -> impl Iterator<Item = &'static dyn RecurringHoliday> {
    let fixed = BRAZILIAN_FIXED_HOLIDAYS.iter().map(|h| h as &dyn RecurringHoliday);
    let movable = BRAZILIAN_MOVABLE_HOLIDAYS.iter().map(|h| h as &dyn RecurringHoliday);
    fixed.chain(movable)
}

/// Holidays of `year` whose kind is in `kinds`: fixed entries in table order,
/// then Easter-related entries. Nothing is deduplicated.
///
/// # Panics
/// When `year` is outside the supported range; see [`try_all_holidays`].
pub fn all_holidays(year: i32, kinds: HolidayKinds) -> Vec<Holiday> {
    match try_all_holidays(year, kinds) {
        Ok(holidays) => holidays,
        Err(error) => panic!("all_holidays: {}", error)
    }
}

pub fn try_all_holidays(year: i32, kinds: HolidayKinds) -> Result<Vec<Holiday>, CalendarError> {
    let year = check_year(year)?;
    let holidays: Vec<Holiday> = recurring_holidays()
        .filter(|rule| kinds.contains(rule.kind()))
        .filter_map(|rule| rule.get_holiday(year))
        .collect();
    log::debug!("computed {} holidays for {} with kinds {:?}", holidays.len(), year, kinds);
    Ok(holidays)
}
