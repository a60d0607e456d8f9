//! CSV ingest for the national trend feed.
//!
//! The feed is read positionally: the header row is kept as an ordinary
//! record (it never matches a timestamp, so lookups skip it naturally) and
//! rows may have any length. Column meaning is applied later, by the
//! calculator, through fixed indices.

use csv::StringRecord;

use crate::error::{AppError, EXIT_DATA};

/// The whole feed, parsed once per run.
#[derive(Debug, Clone, Default)]
pub struct FeedTable {
    rows: Vec<StringRecord>,
}

impl FeedTable {
    /// A table with no rows; every lookup against it comes back empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::new(EXIT_DATA, format!("Feed CSV parse error on line {}: {e}", idx + 1))
            })?;
            rows.push(record);
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose first field equals one of `keys`, in feed order.
    pub fn rows_with_key(&self, keys: &[&str]) -> Vec<&StringRecord> {
        self.rows
            .iter()
            .filter(|row| row.get(0).is_some_and(|k| keys.contains(&k)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "\
data,stato,ricoverati_con_sintomi
2021-01-09T17:00:00,ITA,100
2021-01-10T17:00:00,ITA,120
2021-01-11T17:00:00,ITA
";

    #[test]
    fn parse_keeps_every_row_including_header() {
        let table = FeedTable::parse(FEED).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn rows_with_key_preserves_feed_order() {
        let table = FeedTable::parse(FEED).unwrap();
        let rows = table.rows_with_key(&["2021-01-10T17:00:00", "2021-01-09T17:00:00"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "2021-01-09T17:00:00");
        assert_eq!(&rows[1][0], "2021-01-10T17:00:00");
    }

    #[test]
    fn short_rows_are_accepted() {
        let table = FeedTable::parse(FEED).unwrap();
        let rows = table.rows_with_key(&["2021-01-11T17:00:00"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = FeedTable::empty();
        assert!(table.is_empty());
        assert!(table.rows_with_key(&["2021-01-10T17:00:00"]).is_empty());
    }
}
