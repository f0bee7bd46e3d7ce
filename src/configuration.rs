use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::time::holiday::holidaykind::{HolidayKind, HolidayKinds};

pub const DEFAULT_CITY: &str = "Salvador";
pub const CITY_LENGTH: std::ops::RangeInclusive<usize> = 3..=50;
pub const TICKETS_PER_DAY: std::ops::RangeInclusive<u32> = 2..=10;

/// Transport data the calendar is set up with. Loaded, never written back.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    city: String,
    ticket_value: Decimal,
    tickets_per_day: u32,
    holiday_kinds: HolidayKinds
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            city: DEFAULT_CITY.to_owned(),
            ticket_value: Decimal::new(520, 2),
            tickets_per_day: 2,
            holiday_kinds: HolidayKinds::only(HolidayKind::National).with(HolidayKind::Optional)
        }
    }
}

impl Configuration {
    pub fn new(city: String, ticket_value: Decimal, tickets_per_day: u32, holiday_kinds: HolidayKinds) -> Result<Configuration, ConfigurationError> {
        let config = Configuration { city, ticket_value, tickets_per_day, holiday_kinds };
        config.validate()?;
        Ok(config)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn ticket_value(&self) -> Decimal {
        self.ticket_value
    }

    pub fn tickets_per_day(&self) -> u32 {
        self.tickets_per_day
    }

    pub fn holiday_kinds(&self) -> HolidayKinds {
        self.holiday_kinds
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let city_length = self.city.trim().chars().count();
        if !CITY_LENGTH.contains(&city_length) {
            return Err(reject("city", format!("length {} not in {:?}", city_length, CITY_LENGTH)));
        }
        if self.ticket_value.is_sign_negative() && !self.ticket_value.is_zero() {
            return Err(reject("ticket_value", format!("{} is negative", self.ticket_value)));
        }
        if !TICKETS_PER_DAY.contains(&self.tickets_per_day) {
            return Err(reject("tickets_per_day", format!("{} not in {:?}", self.tickets_per_day, TICKETS_PER_DAY)));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("configuration loaded for {}", config.city);
        Ok(config)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validate()?;
        log::debug!("configuration loaded for {}", config.city);
        Ok(config)
    }
}

fn reject(field: &'static str, reason: String) -> ConfigurationError {
    log::warn!("rejected configuration field '{}': {}", field, reason);
    ConfigurationError::invalid_field(field, reason)
}
