//! Chart rendering.

pub mod chart;

pub use chart::{CHART_FILE_NAME, TrendPoint, chart_points, render_trend_chart};
