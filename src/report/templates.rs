//! Page templates.
//!
//! Every output file is a Jinja-style template addressed by name. A file
//! called `<name>` in the template directory wins; otherwise the built-in
//! `index.html` and `rss.xml` are used. Templates see `latest_data`,
//! `previous_data` and `trend`, plus four filters:
//!
//! - `datetimeformat(pattern = "%d-%m-%Y")`
//! - `currencyformat`
//! - `percentformat`
//! - `rfcformat`

use std::path::Path;

use chrono::NaiveDate;
use minijinja::{Environment, Error, ErrorKind, context};
use serde::Serialize;

use crate::domain::{Contagion, ReportData};
use crate::error::{AppError, EXIT_CONFIG, EXIT_DATA};
use crate::report::format::{
    DATE_PATTERN, format_currency, format_date, format_percent, format_rfc2822,
};

pub const BUILTIN_TEMPLATES: [(&str, &str); 2] = [
    ("index.html", include_str!("../../templates/index.html")),
    ("rss.xml", include_str!("../../templates/rss.xml")),
];

/// Compiled templates for one run, in the order they were requested.
pub struct PageSet {
    env: Environment<'static>,
    names: Vec<String>,
}

impl PageSet {
    /// Load and compile every requested template.
    ///
    /// Unknown names, unreadable files and syntax errors are configuration
    /// errors, raised before the feed is touched.
    pub fn load(names: &[String], template_dir: &Path) -> Result<Self, AppError> {
        let mut env = page_environment();

        for name in names {
            let source = template_source(name, template_dir)?;
            env.add_template_owned(name.clone(), source).map_err(|e| {
                AppError::new(EXIT_CONFIG, format!("Invalid template '{name}': {e}"))
            })?;
        }

        Ok(Self {
            env,
            names: names.to_vec(),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn render(&self, name: &str, data: &ReportData) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| {
            AppError::new(EXIT_CONFIG, format!("Template '{name}' not loaded: {e}"))
        })?;

        let previous: Vec<Option<ContagionView>> =
            data.previous.iter().map(|c| c.as_ref().map(ContagionView::from)).collect();
        let trend: Vec<Option<ContagionView>> =
            data.trend.iter().map(|c| c.as_ref().map(ContagionView::from)).collect();

        template
            .render(context! {
                latest_data => ContagionView::from(&data.latest),
                previous_data => previous,
                trend => trend,
            })
            .map_err(|e| AppError::new(EXIT_DATA, format!("Failed to render '{name}': {e}")))
    }
}

fn template_source(name: &str, template_dir: &Path) -> Result<String, AppError> {
    let path = template_dir.join(name);
    if path.is_file() {
        tracing::debug!(path = %path.display(), "using template from disk");
        return std::fs::read_to_string(&path).map_err(|e| {
            AppError::new(
                EXIT_CONFIG,
                format!("Failed to read template '{}': {e}", path.display()),
            )
        });
    }

    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| source.to_string())
        .ok_or_else(|| {
            let known: Vec<&str> = BUILTIN_TEMPLATES.iter().map(|(n, _)| *n).collect();
            AppError::new(
                EXIT_CONFIG,
                format!(
                    "Unknown template '{name}': no such file in '{}' and not built in ({}).",
                    template_dir.display(),
                    known.join(", ")
                ),
            )
        })
}

/// What a template sees for one day.
#[derive(Debug, Serialize)]
struct ContagionView {
    contagions: i64,
    tests: i64,
    report_date: NaiveDate,
    /// `none` for a day without new tests; `percentformat` rejects it.
    percents: Option<f64>,
}

impl From<&Contagion> for ContagionView {
    fn from(c: &Contagion) -> Self {
        Self {
            contagions: c.contagions,
            tests: c.tests,
            report_date: c.report_date,
            percents: c.percents().ok(),
        }
    }
}

// `.html` and `.xml` names are auto-escaped by minijinja's default callback.
fn page_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("datetimeformat", datetime_filter);
    env.add_filter("currencyformat", currency_filter);
    env.add_filter("percentformat", percent_filter);
    env.add_filter("rfcformat", rfc_filter);
    env
}

fn parse_day(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("'{value}' is not a date: {e}"),
        )
    })
}

fn datetime_filter(value: &str, pattern: Option<&str>) -> Result<String, Error> {
    Ok(format_date(parse_day(value)?, pattern.unwrap_or(DATE_PATTERN)))
}

fn currency_filter(value: f64) -> String {
    format_currency(value)
}

fn percent_filter(value: Option<f64>) -> Result<String, Error> {
    value.map(format_percent).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            "positivity undefined: zero new tests reported",
        )
    })
}

fn rfc_filter(value: &str) -> Result<String, Error> {
    Ok(format_rfc2822(parse_day(value)?))
}
