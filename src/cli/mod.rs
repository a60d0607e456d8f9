//! Command-line parsing for the daily report generator.
//!
//! Parsing stays here; `app` turns the arguments into a `ReportConfig`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::domain::{
    DEFAULT_CUTOFF_HOUR, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_DIR, DEFAULT_TEMPLATES,
    DEFAULT_TREND_DAYS,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "covid-report",
    version,
    about = "Daily COVID-19 test positivity report for Italy (HTML, RSS, chart)"
)]
pub struct Cli {
    /// Directory receiving the rendered pages and the chart.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Page to render (repeatable). Looked up in the template directory,
    /// then among the built-in pages (index.html, rss.xml).
    #[arg(short = 't', long = "template", value_name = "NAME", default_values = DEFAULT_TEMPLATES)]
    pub templates: Vec<String>,

    /// Directory holding template files.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub template_dir: PathBuf,

    /// Skip the PNG trend chart.
    #[arg(long)]
    pub no_image: bool,

    /// Hour (local time) from which today's figures are assumed published.
    #[arg(long, default_value_t = DEFAULT_CUTOFF_HOUR, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub cutoff_hour: u32,

    /// Number of days before the latest one shown in the trend.
    #[arg(long, default_value_t = DEFAULT_TREND_DAYS, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub trend_days: u32,

    /// Do not close the trend with the latest figure once the cutoff has passed.
    #[arg(long)]
    pub no_latest_in_trend: bool,

    /// Report on this date (YYYY-MM-DD) instead of the latest published one.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Feed URL (overrides COVID_FEED_URL).
    #[arg(long, value_name = "URL")]
    pub feed_url: Option<String>,

    /// Read the feed from a local CSV file instead of downloading it.
    #[arg(long, value_name = "CSV", conflicts_with = "feed_url")]
    pub feed_file: Option<PathBuf>,
}
