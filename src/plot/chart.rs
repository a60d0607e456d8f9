//! PNG trend chart.
//!
//! The chart shows the positivity of the trend window, oldest on the left,
//! with the latest figure written in the top-left corner.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::Contagion;
use crate::error::{AppError, EXIT_CHART};
use crate::report::format::{CHART_DATE_PATTERN, format_date, format_percent};

pub const CHART_FILE_NAME: &str = "chart.png";

const CHART_SIZE: (u32, u32) = (1024, 768);

/// One x position on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub percent: f64,
}

/// Chart points from a newest-first window; days without figures are skipped.
pub fn chart_points(previous: &[Option<Contagion>]) -> Result<Vec<TrendPoint>, AppError> {
    let mut points = Vec::with_capacity(previous.len());
    for entry in previous.iter().rev() {
        match entry {
            Some(c) => points.push(TrendPoint {
                label: format_date(c.report_date, CHART_DATE_PATTERN),
                percent: c.percents()?,
            }),
            None => tracing::warn!("trend day without figures left out of the chart"),
        }
    }
    Ok(points)
}

/// Y range covering every point, padded so a flat series still has height.
pub fn y_bounds(points: &[TrendPoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.percent).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.percent).fold(f64::NEG_INFINITY, f64::max);

    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.1).max(0.5);
    ((min - pad).max(0.0), max + pad)
}

/// Draw the chart into `<output_dir>/chart.png`.
pub fn render_trend_chart(
    output_dir: &Path,
    points: &[TrendPoint],
    latest: &Contagion,
) -> Result<(), AppError> {
    let path = output_dir.join(CHART_FILE_NAME);
    let headline = format!(
        "{} : {} %",
        latest.report_date,
        format_percent(latest.percents()?)
    );

    draw(&path, points, &headline).map_err(|e| {
        AppError::new(
            EXIT_CHART,
            format!("Failed to render chart '{}': {e}", path.display()),
        )
    })?;

    tracing::info!(path = %path.display(), points = points.len(), "wrote chart");
    Ok(())
}

fn draw(path: &Path, points: &[TrendPoint], headline: &str) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let last_x = points.len().saturating_sub(1).max(1);
    let (y0, y1) = y_bounds(points);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last_x, y0..y1)?;

    let label_for = |i: &usize| points.get(*i).map(|p| p.label.clone()).unwrap_or_default();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len().max(2))
        .x_label_formatter(&label_for)
        .y_label_formatter(&|v| format_percent(*v))
        .label_style(("sans-serif", 18).into_font())
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().enumerate().map(|(i, p)| (i, p.percent)),
        BLUE.stroke_width(3),
    ))?;

    let (w, h) = CHART_SIZE;
    root.draw(&Text::new(
        headline.to_string(),
        ((w as f64 * 0.15) as i32, (h as f64 * 0.2) as i32),
        ("sans-serif", 24).into_font(),
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contagion(day: u32, contagions: i64, tests: i64) -> Contagion {
        Contagion {
            contagions,
            tests,
            report_date: NaiveDate::from_ymd_opt(2021, 1, day).unwrap(),
        }
    }

    #[test]
    fn points_run_oldest_to_newest() {
        let previous = vec![
            Some(contagion(9, 10, 100)),
            Some(contagion(8, 20, 100)),
            Some(contagion(7, 30, 100)),
        ];
        let points = chart_points(&previous).unwrap();
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["07-01", "08-01", "09-01"]);
        assert!((points[0].percent - 30.0).abs() < 1e-12);
    }

    #[test]
    fn missing_days_are_skipped() {
        let previous = vec![Some(contagion(9, 10, 100)), None, Some(contagion(7, 30, 100))];
        assert_eq!(chart_points(&previous).unwrap().len(), 2);
    }

    #[test]
    fn undefined_percentage_is_an_error() {
        let previous = vec![Some(contagion(9, 10, 0))];
        assert!(chart_points(&previous).is_err());
    }

    #[test]
    fn flat_series_gets_padding() {
        let points = vec![
            TrendPoint { label: "a".into(), percent: 5.0 },
            TrendPoint { label: "b".into(), percent: 5.0 },
        ];
        let (lo, hi) = y_bounds(&points);
        assert!(lo < 5.0 && hi > 5.0);
    }

    #[test]
    fn empty_series_has_unit_range() {
        assert_eq!(y_bounds(&[]), (0.0, 1.0));
    }
}
