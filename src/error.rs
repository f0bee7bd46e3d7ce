use thiserror::Error;

/// Precondition violations of the grid builder and the holiday engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("month {0} out of range")]
    MonthOutOfRange(u32),
    #[error("year {0} out of range")]
    YearOutOfRange(i32),
    #[error("day {day} out of range for month {month}")]
    DayOutOfRange { day: u32, month: u32 },
    #[error("{day}/{month} is not a valid calendar date")]
    InvalidFixedDate { day: u32, month: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ConfigurationError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::InvalidField { field, reason: reason.into() }
    }
}
