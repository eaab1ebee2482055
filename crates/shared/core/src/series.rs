//! Per-session market data for a single instrument

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const OPEN: &str = "Open";
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const CLOSE: &str = "Close";
pub const ADJ_CLOSE: &str = "Adj Close";
pub const VOLUME: &str = "Volume";

/// One trading day's row of market data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: f64,
}

/// Column-oriented session data over strictly ascending unique dates.
///
/// Construction validates the ordering and shape invariants; afterwards the
/// series is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<f64>)>,
}

/// Unvalidated wire form of [`TimeSeries`]
#[derive(Deserialize)]
struct RawTimeSeries {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<f64>)>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = Error;

    fn try_from(raw: RawTimeSeries) -> Result<Self> {
        TimeSeries::new(raw.dates, raw.columns)
    }
}

impl TimeSeries {
    /// Create a series from dates and named columns
    pub fn new(dates: Vec<NaiveDate>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        if let Some(pair) = dates.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidSeries(format!(
                "dates must be strictly ascending: {} followed by {}",
                pair[0], pair[1]
            )));
        }

        let mut seen = HashSet::new();
        for (name, values) in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidSeries(format!("duplicate column '{}'", name)));
            }
            if values.len() != dates.len() {
                return Err(Error::shape(format!(
                    "column '{}' has {} values for {} dates",
                    name,
                    values.len(),
                    dates.len()
                )));
            }
        }

        Ok(Self { dates, columns })
    }

    /// Build a series with the standard OHLC/adjusted-close/volume columns
    pub fn from_sessions(sessions: &[Session]) -> Result<Self> {
        let dates = sessions.iter().map(|s| s.date).collect();
        let pick = |f: fn(&Session) -> f64| sessions.iter().map(f).collect::<Vec<_>>();

        Self::new(
            dates,
            vec![
                (OPEN.to_string(), pick(|s| s.open)),
                (HIGH.to_string(), pick(|s| s.high)),
                (LOW.to_string(), pick(|s| s.low)),
                (CLOSE.to_string(), pick(|s| s.close)),
                (ADJ_CLOSE.to_string(), pick(|s| s.adj_close)),
                (VOLUME.to_string(), pick(|s| s.volume)),
            ],
        )
    }

    /// Values of a named column
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, values)| values.as_slice())
            .ok_or_else(|| Error::Column(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(col, _)| col == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    #[inline]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 1, d).unwrap()
    }

    #[test]
    fn test_new_validates_order() {
        let err = TimeSeries::new(
            vec![day(6), day(8), day(7)],
            vec![("Close".to_string(), vec![1.0, 2.0, 3.0])],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));

        let err = TimeSeries::new(vec![day(6), day(6)], vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn test_new_validates_shape() {
        let err = TimeSeries::new(
            vec![day(6), day(7)],
            vec![("Close".to_string(), vec![1.0])],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_duplicate_column() {
        let err = TimeSeries::new(
            vec![day(6)],
            vec![
                ("Close".to_string(), vec![1.0]),
                ("Close".to_string(), vec![2.0]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn test_from_sessions() {
        let sessions = [
            Session {
                date: day(6),
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5,
                adj_close: 1.4,
                volume: 1000.0,
            },
            Session {
                date: day(7),
                open: 1.5,
                high: 2.5,
                low: 1.0,
                close: 2.0,
                adj_close: 1.9,
                volume: 1200.0,
            },
        ];
        let series = TimeSeries::from_sessions(&sessions).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.column(ADJ_CLOSE).unwrap(), &[1.4, 1.9]);
        assert_eq!(series.column(VOLUME).unwrap(), &[1000.0, 1200.0]);
        assert_eq!(series.column_names().count(), 6);
    }

    #[test]
    fn test_deserialize_rejects_unordered_dates() {
        let json = r#"{"dates": ["2014-01-08", "2014-01-06", "2014-01-06"],
            "columns": [["Close", [1.0, 2.0, 3.0]]]}"#;
        let err = serde_json::from_str::<TimeSeries>(json).unwrap_err();
        assert!(err.to_string().contains("strictly ascending"));
    }

    #[test]
    fn test_deserialize_rejects_column_length() {
        let json = r#"{"dates": ["2014-01-06", "2014-01-07"],
            "columns": [["Close", [1.0, 2.0, 3.0, 4.0]]]}"#;
        assert!(serde_json::from_str::<TimeSeries>(json).is_err());

        let json = r#"{"dates": ["2014-01-06"],
            "columns": [["Close", [1.0]], ["Close", [2.0]]]}"#;
        assert!(serde_json::from_str::<TimeSeries>(json).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let series = TimeSeries::new(
            vec![day(6), day(7)],
            vec![("Close".to_string(), vec![1.0, 2.0])],
        )
        .unwrap();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(serde_json::from_str::<TimeSeries>(&json).unwrap(), series);
    }

    #[test]
    fn test_missing_column() {
        let series = TimeSeries::new(vec![day(6)], vec![]).unwrap();
        assert_eq!(
            series.column("Volume").unwrap_err(),
            Error::Column("Volume".to_string())
        );
        assert!(!series.has_column("Volume"));
    }
}
