//! Day-over-day positivity from two consecutive feed rows.

use chrono::{Duration, NaiveDate};
use csv::StringRecord;

use crate::domain::Contagion;
use crate::error::{AppError, EXIT_DATA};
use crate::io::FeedTable;

/// The feed stamps every daily row at 17:00.
pub const FEED_TIMESTAMP_PATTERN: &str = "%Y-%m-%dT17:00:00";

/// `nuovi_positivi` (new positive cases) in the feed schema.
pub const COL_NEW_POSITIVE: usize = 8;
/// `tamponi` (cumulative tests performed) in the feed schema.
pub const COL_TESTS: usize = 14;

/// Key used by the feed for `date`.
pub fn feed_key(date: NaiveDate) -> String {
    date.format(FEED_TIMESTAMP_PATTERN).to_string()
}

/// Computes `Contagion` values against one parsed feed.
pub struct DailyDiffCalculator<'a> {
    table: &'a FeedTable,
}

impl<'a> DailyDiffCalculator<'a> {
    pub fn new(table: &'a FeedTable) -> Self {
        Self { table }
    }

    /// Figure for `reference_date`, diffing it against the day before.
    ///
    /// `Ok(None)` when the feed does not hold exactly one row for each of
    /// the two days. A matched row whose counters do not parse is an error.
    pub fn compute(&self, reference_date: NaiveDate) -> Result<Option<Contagion>, AppError> {
        let before_date = reference_date - Duration::days(1);
        let ref_key = feed_key(reference_date);
        let before_key = feed_key(before_date);

        let rows = self.table.rows_with_key(&[ref_key.as_str(), before_key.as_str()]);

        if rows.len() != 2 {
            let dump: Vec<Vec<&str>> = rows.iter().map(|r| r.iter().collect()).collect();
            tracing::warn!(
                %reference_date,
                matched = rows.len(),
                rows = ?dump,
                "expected exactly two feed rows"
            );
            return Ok(None);
        }

        let (earlier, later) = (rows[0], rows[1]);
        let contagions = parse_count(later, COL_NEW_POSITIVE)?;
        let tests = parse_count(later, COL_TESTS)? - parse_count(earlier, COL_TESTS)?;

        Ok(Some(Contagion {
            contagions,
            tests,
            report_date: reference_date,
        }))
    }
}

fn parse_count(row: &StringRecord, col: usize) -> Result<i64, AppError> {
    let key = row.get(0).unwrap_or("");
    let raw = row.get(col).ok_or_else(|| {
        AppError::new(
            EXIT_DATA,
            format!("Feed row '{key}' has no column {col} ({} columns).", row.len()),
        )
    })?;
    raw.trim().parse::<i64>().map_err(|e| {
        AppError::new(
            EXIT_DATA,
            format!("Feed row '{key}' column {col}: '{raw}' is not an integer ({e})."),
        )
    })
}
