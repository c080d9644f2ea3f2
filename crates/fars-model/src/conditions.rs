//! Curated code sets and thresholds.
//!
//! These groupings are editorial choices, not derived from the coding
//! manual. Percentages over "reported" records use threshold comparisons
//! (`code < limit`) so every sentinel at or above the limit is excluded.

/// `WEATHER` code for clear conditions.
pub const CLEAR_WEATHER_CODE: i64 = 1;

/// `WEATHER` codes counted as bad weather: rain, sleet/hail, snow,
/// fog/smog/smoke and blowing snow.
pub const BAD_WEATHER_CODES: [i64; 5] = [2, 3, 4, 5, 11];

/// `WEATHER` codes below this value count as reported.
pub const WEATHER_REPORTED_LIMIT: i64 = 90;

/// `LGT_COND` code for daylight.
pub const DAYLIGHT_CODE: i64 = 1;

/// `LGT_COND` codes counted as dark: street lights, no street lights and
/// unknown lighting.
pub const DARK_LIGHT_CODES: [i64; 3] = [2, 3, 6];

/// `LGT_COND` codes below this value count as reported.
pub const LIGHT_REPORTED_LIMIT: i64 = 8;

/// `HOUR` values at or above this are unknown-time sentinels.
pub const VALID_HOUR_LIMIT: i64 = 24;

/// `RUR_URB` code for rural locations.
pub const RURAL_CODE: i64 = 1;

/// `VE_TOTAL` value for single-vehicle accidents.
pub const SINGLE_VEHICLE_COUNT: i64 = 1;

/// Weather labels eligible for the weather-by-hour series, in plot order.
pub const MAIN_WEATHER_LABELS: [&str; 5] = ["Clear", "Rain", "Snow", "Fog/Smog/Smoke", "Cloudy"];

/// Maximum number of weather series drawn against the hour of day.
pub const MAX_WEATHER_SERIES: usize = 4;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Canned safety recommendations printed after the key insights.
pub const RECOMMENDATIONS: [&str; 6] = [
    "Increase enforcement during evening hours (6-9 PM)",
    "Focus weekend safety campaigns",
    "Weather-specific alerts during rain/snow/fog conditions",
    "Improve lighting on dark roads without street lights",
    "Enhanced rural road safety measures",
    "State-specific targeted interventions",
];

pub fn is_bad_weather(code: i64) -> bool {
    BAD_WEATHER_CODES.contains(&code)
}

pub fn is_dark_light(code: i64) -> bool {
    DARK_LIGHT_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_sets_are_disjoint_from_their_baselines() {
        assert!(!is_bad_weather(CLEAR_WEATHER_CODE));
        assert!(!is_dark_light(DAYLIGHT_CODE));
    }

    #[test]
    fn test_bad_weather_membership() {
        for code in [2, 3, 4, 5, 11] {
            assert!(is_bad_weather(code));
        }
        for code in [1, 6, 7, 8, 10, 98, 99] {
            assert!(!is_bad_weather(code));
        }
    }

    #[test]
    fn test_dark_membership() {
        assert!(is_dark_light(2));
        assert!(is_dark_light(3));
        assert!(is_dark_light(6));
        assert!(!is_dark_light(4));
        assert!(!is_dark_light(5));
    }
}
