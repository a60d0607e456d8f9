//! Data side of a report run: one feed download, then per-day lookups.
//!
//! feed fetch -> parse -> latest figure -> trend window -> `ReportData`

use chrono::NaiveDateTime;

use crate::calc::{DailyDiffCalculator, build_trend, cutoff_passed, latest_date, trend_dates};
use crate::data::FeedSource;
use crate::domain::{ReportConfig, ReportData};
use crate::error::{AppError, EXIT_NO_DATA};
use crate::io::FeedTable;

/// Download and parse the feed once.
///
/// A failed download is not fatal here: it leaves an empty table, so every
/// date comes back without figures.
pub fn load_feed(source: &dyn FeedSource) -> Result<FeedTable, AppError> {
    match source.fetch_csv() {
        Ok(text) => {
            let table = FeedTable::parse(&text)?;
            tracing::debug!(rows = table.len(), "feed parsed");
            Ok(table)
        }
        Err(err) => {
            tracing::warn!(error = %err, "feed unavailable");
            Ok(FeedTable::empty())
        }
    }
}

/// Compute the latest figure and its trend window as of `now`.
pub fn gather_report_data(
    config: &ReportConfig,
    table: &FeedTable,
    now: NaiveDateTime,
) -> Result<ReportData, AppError> {
    let (latest_day, published_today) = match config.as_of {
        Some(day) => (day, day == now.date()),
        None => (
            latest_date(now, config.cutoff_hour),
            cutoff_passed(now, config.cutoff_hour),
        ),
    };

    let calculator = DailyDiffCalculator::new(table);

    let latest = calculator.compute(latest_day)?.ok_or_else(|| {
        AppError::new(
            EXIT_NO_DATA,
            format!("No figures available for {latest_day}."),
        )
    })?;
    tracing::info!(
        date = %latest.report_date,
        contagions = latest.contagions,
        tests = latest.tests,
        "latest figures"
    );

    let previous = trend_dates(latest_day, config.trend_days)
        .into_iter()
        .map(|day| calculator.compute(day))
        .collect::<Result<Vec<_>, _>>()?;

    let trend = build_trend(
        &previous,
        latest,
        config.latest_in_trend && published_today,
    );

    Ok(ReportData {
        latest,
        previous,
        trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticFeed;
    use chrono::NaiveDate;

    /// Feed with one row per day, 2021-01-01 ..= 2021-01-`last_day`.
    /// Day `d` has `10 * d` positives and `100 * d * d` cumulative tests.
    fn feed_text(last_day: u32) -> String {
        let mut text = String::from("data,stato,a,b,c,d,e,f,nuovi_positivi,g,h,i,j,k,tamponi\n");
        for d in 1..=last_day {
            text.push_str(&format!(
                "2021-01-{d:02}T17:00:00,ITA,0,0,0,0,0,0,{},0,0,0,0,0,{}\n",
                10 * d,
                100 * d * d
            ));
        }
        text
    }

    fn table(last_day: u32) -> FeedTable {
        FeedTable::parse(&feed_text(last_day)).unwrap()
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    struct FailingFeed;

    impl FeedSource for FailingFeed {
        fn fetch_csv(&self) -> Result<String, AppError> {
            Err(AppError::new(EXIT_NO_DATA, "boom"))
        }
    }

    #[test]
    fn after_cutoff_reports_today_and_closes_trend() {
        let data = gather_report_data(&ReportConfig::default(), &table(10), at(10, 19)).unwrap();

        assert_eq!(data.latest.report_date, NaiveDate::from_ymd_opt(2021, 1, 10).unwrap());
        assert_eq!(data.latest.contagions, 100);
        assert_eq!(data.latest.tests, 10_000 - 8_100);
        assert_eq!(data.previous.len(), 6);
        assert_eq!(data.trend.len(), 7);
        assert_eq!(data.trend[6], Some(data.latest));
    }

    #[test]
    fn before_cutoff_reports_yesterday_without_closing_trend() {
        let data = gather_report_data(&ReportConfig::default(), &table(10), at(10, 9)).unwrap();

        assert_eq!(data.latest.report_date, NaiveDate::from_ymd_opt(2021, 1, 9).unwrap());
        assert_eq!(data.trend.len(), 6);
        assert_eq!(
            data.trend[0].map(|c| c.report_date),
            NaiveDate::from_ymd_opt(2021, 1, 3)
        );
    }

    #[test]
    fn trend_days_without_previous_row_are_absent() {
        // The feed starts on day 1, which has no row before it.
        let config = ReportConfig {
            trend_days: 9,
            ..ReportConfig::default()
        };
        let data = gather_report_data(&config, &table(10), at(10, 19)).unwrap();
        assert_eq!(data.previous.len(), 9);
        assert!(data.previous[8].is_none());
        assert!(data.previous[7].is_some());
    }

    #[test]
    fn missing_latest_is_a_no_data_error() {
        let err = gather_report_data(&ReportConfig::default(), &table(8), at(10, 19)).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_NO_DATA);
    }

    #[test]
    fn explicit_date_bypasses_cutoff() {
        let config = ReportConfig {
            as_of: NaiveDate::from_ymd_opt(2021, 1, 5),
            ..ReportConfig::default()
        };
        let data = gather_report_data(&config, &table(10), at(10, 9)).unwrap();
        assert_eq!(data.latest.report_date, NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
        assert_eq!(data.trend.len(), 6);
    }

    #[test]
    fn failed_download_leaves_an_empty_table() {
        let table = load_feed(&FailingFeed).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn static_feed_loads_every_row() {
        let table = load_feed(&StaticFeed(feed_text(3))).unwrap();
        assert_eq!(table.len(), 4);
    }
}
