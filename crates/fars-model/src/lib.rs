//! FARS accident data model.
//!
//! This crate holds the static vocabulary used when describing the
//! Fatality Analysis Reporting System (FARS) accident file:
//!
//! - **Columns**: the accident-level fields the analysis reads
//! - **Code tables**: hand-authored code to label lookups (weather, light,
//!   state, road class, ...)
//! - **Code sets**: curated groupings such as "bad weather" and the
//!   "reported" thresholds used for percentage denominators

mod codes;
mod columns;
mod conditions;

pub use codes::{CodeTable, CodeTableKind, day_name, month_name};
pub use columns::FarsColumn;
pub use conditions::{
    BAD_WEATHER_CODES, CLEAR_WEATHER_CODE, DARK_LIGHT_CODES, DAY_NAMES, DAYLIGHT_CODE,
    LIGHT_REPORTED_LIMIT, MAIN_WEATHER_LABELS, MAX_WEATHER_SERIES, MONTH_NAMES,
    RECOMMENDATIONS, RURAL_CODE, SINGLE_VEHICLE_COUNT, VALID_HOUR_LIMIT, WEATHER_REPORTED_LIMIT,
    is_bad_weather, is_dark_light,
};
