//! Positivity computation and date selection.

pub mod daily_diff;
pub mod dates;

pub use daily_diff::{DailyDiffCalculator, feed_key};
pub use dates::{build_trend, cutoff_passed, latest_date, trend_dates};
