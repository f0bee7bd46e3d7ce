pub mod configuration;
pub mod error;
pub mod locale;

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod holiday {
        pub mod holidaykind;
        pub mod holiday;
        pub mod brazilianholidays;
        pub mod holidayset;
    }

    pub mod calendar {
        pub mod monthgrid;
        pub mod monthcursor;
        pub mod monthview;
    }
}

pub use error::{CalendarError, ConfigurationError};
pub use time::calendar::monthgrid::{build_grid, try_build_grid, CalendarCell, CalendarGrid};
pub use time::holiday::brazilianholidays::{all_holidays, try_all_holidays};
pub use time::holiday::holiday::Holiday;
pub use time::holiday::holidaykind::{HolidayKind, HolidayKinds};
pub use time::holiday::holidayset::HolidaySet;
pub use time::recurringholiday::easterrelatedholiday::{easter_sunday, try_easter_sunday};
