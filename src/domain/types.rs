//! Shared domain types.
//!
//! These types are intentionally small and immutable:
//!
//! - `Contagion` is built once per date from two feed rows
//! - `ReportData` bundles what the renderers and the chart consume
//! - `ReportConfig` holds every knob of a run as an explicit value

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{AppError, EXIT_DATA};

/// Raw CSV of the national trend ("andamento nazionale") published by the
/// Italian Civil Protection department.
pub const DEFAULT_FEED_URL: &str = "https://raw.githubusercontent.com/pcm-dpc/COVID-19/master/dati-andamento-nazionale/dpc-covid19-ita-andamento-nazionale.csv";

/// The feed publishes its daily figures some time in the late afternoon.
pub const DEFAULT_CUTOFF_HOUR: u32 = 18;

pub const DEFAULT_TREND_DAYS: u32 = 6;

pub const DEFAULT_OUTPUT_DIR: &str = "build";

pub const DEFAULT_TEMPLATES: [&str; 2] = ["index.html", "rss.xml"];

/// Directory searched for template files before falling back to the
/// built-in pages.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// New positive cases and new tests for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contagion {
    pub contagions: i64,
    pub tests: i64,
    pub report_date: NaiveDate,
}

impl Contagion {
    /// Share of the day's new tests that came back positive, in percent.
    ///
    /// A day with no new tests has no defined percentage; that is an error,
    /// not a zero.
    pub fn percents(&self) -> Result<f64, AppError> {
        if self.tests == 0 {
            return Err(AppError::new(
                EXIT_DATA,
                format!(
                    "Positivity undefined for {}: zero new tests reported.",
                    self.report_date
                ),
            ));
        }
        Ok(100.0 * self.contagions as f64 / self.tests as f64)
    }
}

/// Everything the renderers need for one run.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub latest: Contagion,
    /// Newest first: `latest - 1`, `latest - 2`, ...
    pub previous: Vec<Option<Contagion>>,
    /// Oldest first, optionally ending with `latest`.
    pub trend: Vec<Option<Contagion>>,
}

/// Resolved settings for a report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub feed_url: String,
    /// Hour of the day from which today's figures are assumed published.
    pub cutoff_hour: u32,
    pub trend_days: u32,
    /// Append the latest figure to `trend` once the cutoff has passed.
    pub latest_in_trend: bool,
    pub output_dir: PathBuf,
    pub templates: Vec<String>,
    pub template_dir: PathBuf,
    pub render_image: bool,
    /// Explicit reference date; bypasses the cutoff rule.
    pub as_of: Option<NaiveDate>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
            trend_days: DEFAULT_TREND_DAYS,
            latest_in_trend: true,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            templates: DEFAULT_TEMPLATES.iter().map(|s| s.to_string()).collect(),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            render_image: true,
            as_of: None,
        }
    }
}
