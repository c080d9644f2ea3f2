//! Chart output for FARS analysis reports.
//!
//! Charts are written as standalone SVG documents, one file per section of
//! the [`fars_analysis::AnalysisReport`] that has data:
//!
//! - **Bar**: hour, day of week, month, weather, persons, vehicles
//! - **Pie**: light, rural/urban, work zone
//! - **Horizontal bar**: atmospheric conditions, top states, road type
//! - **Line**: weather by hour of day

mod charts;
mod render;
mod svg;

pub use charts::{BarChart, Chart, HorizontalBarChart, LineChart, LineSeries, PieChart};
pub use render::{build_charts, render_charts};
