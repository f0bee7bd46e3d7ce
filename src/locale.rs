//! Fixed pt-BR names used by the month view.

use chrono::Weekday;

/// Sunday first, matching the grid columns.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado"
];

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro"
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// First three characters of the weekday name, e.g. "Sáb".
pub fn weekday_abbreviation(weekday: Weekday) -> String {
    weekday_name(weekday).chars().take(3).collect()
}

/// `None` when `month0` is not in `0..12`.
pub fn month_name(month0: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month0 as usize).copied()
}
