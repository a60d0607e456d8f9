//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - downloads the feed once
//! - computes the latest figure and the trend window
//! - renders the pages and the chart into the output directory

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::data::{FeedClient, FeedSource, StaticFeed, feed_url_from_env};
use crate::domain::{ReportConfig, ReportData};
use crate::error::{AppError, EXIT_CONFIG};

pub mod pipeline;

/// Entry point for the `covid-report` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let config = report_config_from_args(&cli);
    let source = feed_source(&cli, &config)?;

    let now = Local::now().naive_local();
    let data = generate(&config, source.as_ref(), now)?;

    tracing::info!(
        date = %data.latest.report_date,
        output_dir = %config.output_dir.display(),
        "report generated"
    );
    Ok(())
}

/// Produce every configured output for the report as of `now`.
///
/// Nothing is written unless a figure exists for the latest date.
pub fn generate(
    config: &ReportConfig,
    source: &dyn FeedSource,
    now: NaiveDateTime,
) -> Result<ReportData, AppError> {
    let pages = crate::report::resolve_templates(&config.templates, &config.template_dir)?;

    let table = pipeline::load_feed(source)?;
    let data = pipeline::gather_report_data(config, &table, now)?;

    let chart_points = if config.render_image {
        Some(crate::plot::chart_points(&data.previous)?)
    } else {
        None
    };

    crate::io::ensure_output_dir(&config.output_dir)?;
    crate::report::write_pages(&pages, &data, &config.output_dir)?;

    if let Some(points) = chart_points {
        crate::plot::render_trend_chart(&config.output_dir, &points, &data.latest)?;
    }

    Ok(data)
}

pub fn report_config_from_args(cli: &Cli) -> ReportConfig {
    ReportConfig {
        feed_url: cli.feed_url.clone().unwrap_or_else(feed_url_from_env),
        cutoff_hour: cli.cutoff_hour,
        trend_days: cli.trend_days,
        latest_in_trend: !cli.no_latest_in_trend,
        output_dir: cli.output_dir.clone(),
        templates: cli.templates.clone(),
        template_dir: cli.template_dir.clone(),
        render_image: !cli.no_image,
        as_of: cli.as_of,
    }
}

fn feed_source(cli: &Cli, config: &ReportConfig) -> Result<Box<dyn FeedSource>, AppError> {
    if let Some(path) = &cli.feed_file {
        return Ok(Box::new(read_feed_file(path)?));
    }
    Ok(Box::new(FeedClient::new(config.feed_url.clone())))
}

fn read_feed_file(path: &Path) -> Result<StaticFeed, AppError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AppError::new(
            EXIT_CONFIG,
            format!("Failed to read feed file '{}': {e}", path.display()),
        )
    })?;
    Ok(StaticFeed(text))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
