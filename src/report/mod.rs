//! Report rendering: formatting helpers and the page templates.

pub mod format;
pub mod templates;

use std::path::{Path, PathBuf};

use crate::domain::ReportData;
use crate::error::AppError;
use crate::io::export::write_report_file;

pub use format::{format_currency, format_date, format_percent, format_rfc2822};
pub use templates::PageSet;

/// Load every template up front so a typo fails before any write.
pub fn resolve_templates(names: &[String], template_dir: &Path) -> Result<PageSet, AppError> {
    PageSet::load(names, template_dir)
}

/// Render each template into `<output_dir>/<name>`.
///
/// All pages are rendered before the first write.
pub fn write_pages(
    pages: &PageSet,
    data: &ReportData,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    let mut rendered = Vec::with_capacity(pages.names().len());
    for name in pages.names() {
        rendered.push((name.as_str(), pages.render(name, data)?));
    }

    let mut written = Vec::with_capacity(rendered.len());
    for (name, body) in rendered {
        let path = write_report_file(output_dir, name, &body)?;
        tracing::info!(path = %path.display(), "wrote page");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contagion;
    use chrono::NaiveDate;

    fn builtin_dir() -> &'static Path {
        Path::new("no-such-template-dir")
    }

    #[test]
    fn resolve_templates_stops_at_the_first_unknown_name() {
        let names = vec!["rss.xml".to_string(), "nope.txt".to_string()];
        assert!(resolve_templates(&names, builtin_dir()).is_err());

        let names = vec!["rss.xml".to_string(), "index.html".to_string()];
        let pages = resolve_templates(&names, builtin_dir()).unwrap();
        assert_eq!(pages.names(), ["rss.xml", "index.html"]);
    }

    #[test]
    fn write_pages_names_files_after_templates() {
        let dir = std::env::temp_dir().join(format!("covid-report-pages-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        crate::io::ensure_output_dir(&dir).unwrap();

        let latest = Contagion {
            contagions: 5,
            tests: 50,
            report_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        };
        let data = ReportData {
            latest,
            previous: vec![],
            trend: vec![Some(latest)],
        };

        let names = vec!["index.html".to_string(), "rss.xml".to_string()];
        let pages = resolve_templates(&names, builtin_dir()).unwrap();
        let written = write_pages(&pages, &data, &dir).unwrap();
        assert_eq!(written, vec![dir.join("index.html"), dir.join("rss.xml")]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
