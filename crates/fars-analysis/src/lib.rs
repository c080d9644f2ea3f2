//! Descriptive analysis of FARS accident data.
//!
//! Every pass is a group-and-count over one or two columns of a
//! [`fars_ingest::Dataset`]:
//!
//! - **Temporal**: accidents by hour, day of week and month, with peaks
//! - **Conditions**: weather, light and atmospheric distributions, the
//!   clear/bad-weather and daylight/dark shares, weather by hour
//! - **Roads**: rural/urban, work zone and functional system
//! - **Severity**: persons and vehicles involved
//! - **Geography**: top states and a coordinate availability sample
//! - **Insights**: the headline figures printed at the end of a run

mod conditions;
mod distribution;
mod geography;
mod insights;
mod report;
mod roads;
mod severity;
mod temporal;

pub use conditions::{
    ATMOSPHERIC_TOP_N, ConditionShare, Conditions, LIGHT_TOP_N, LightSummary, WEATHER_TOP_N,
    WeatherByHour, WeatherSeries, WeatherSummary, labeled_by_count, light_share, percent, weather_share,
};
pub use distribution::{Bucket, CrossTab, Distribution};
pub use geography::{DEFAULT_HOTSPOT_SAMPLE, HotspotSample, STATES_TOP_N, top_states};
pub use insights::{KeyInsights, mean, share_of_all, share_of_present};
pub use report::{AnalysisOptions, AnalysisReport, analyze};
pub use roads::RoadConditions;
pub use severity::{PERSONS_TOP_N, Severity, VEHICLES_TOP_N, top_by_value};
pub use temporal::{Peak, TemporalPatterns, hourly_distribution};
