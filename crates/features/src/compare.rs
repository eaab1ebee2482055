//! Relative performance of several instruments over the same sessions

use seshat_core::{Error, Frame, Result, TimeSeries};

/// One column per series, each scaled so its first session is 1.0.
///
/// All series must share the same dates.
pub fn compare(series: &[&TimeSeries], names: &[&str], selection: &str) -> Result<Frame> {
    let Some(first) = series.first() else {
        return Err(Error::shape("no series to compare"));
    };
    if names.len() != series.len() {
        return Err(Error::shape(format!(
            "{} names given for {} series",
            names.len(),
            series.len()
        )));
    }
    if first.is_empty() {
        return Err(Error::shape("cannot compare empty series"));
    }

    let mut columns = Vec::with_capacity(series.len());
    for (s, &name) in series.iter().zip(names) {
        if s.dates() != first.dates() {
            return Err(Error::alignment(format!(
                "series '{}' does not cover the same sessions as '{}'",
                name, names[0]
            )));
        }
        let values = s.column(selection)?;
        let base = values[0];
        columns.push((name.to_string(), values.iter().map(|v| v / base).collect()));
    }

    Frame::from_columns(first.dates().to_vec(), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(close: Vec<f64>, offset_days: u64) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2016, 1, 4).unwrap() + chrono::Days::new(offset_days);
        let dates = start.iter_days().take(close.len()).collect();
        TimeSeries::new(dates, vec![("Close".to_string(), close)]).unwrap()
    }

    #[test]
    fn test_compare() {
        let a = series(vec![10.0, 12.0, 9.0], 0);
        let b = series(vec![50.0, 50.0, 75.0], 0);

        let rel = compare(&[&a, &b], &["FSLR", "SPWR"], "Close").unwrap();
        assert_eq!(rel.columns(), &["FSLR", "SPWR"]);
        assert_eq!(rel.row(0), &[1.0, 1.0]);
        assert_eq!(rel.row(1), &[1.2, 1.0]);
        assert_eq!(rel.row(2), &[0.9, 1.5]);
    }

    #[test]
    fn test_compare_errors() {
        let a = series(vec![10.0, 12.0], 0);
        let shifted = series(vec![10.0, 12.0], 1);

        assert!(matches!(
            compare(&[&a, &shifted], &["A", "B"], "Close"),
            Err(Error::Alignment(_))
        ));
        assert!(matches!(compare(&[&a], &[], "Close"), Err(Error::Shape(_))));
        assert!(matches!(compare(&[], &[], "Close"), Err(Error::Shape(_))));
        assert!(matches!(
            compare(&[&a], &["A"], "Volume"),
            Err(Error::Column(_))
        ));
    }
}
