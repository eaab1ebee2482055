use log::debug;
use seshat_core::{Error, FeatureFrame, LabelFrame, Result, TimeSeries};
use seshat_ports::{FeatureGenerator, LabelGenerator};

/// Features and labels over identical decision dates
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledFeatures {
    pub features: FeatureFrame,
    pub labels: LabelFrame,
}

impl LabeledFeatures {
    /// Number of aligned rows
    pub fn len(&self) -> usize {
        self.features.n_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Run both generators over `series` and trim their outputs to a common index.
///
/// Generator errors propagate unchanged.
pub fn labeled_features<F, L>(
    series: &TimeSeries,
    feature_fn: &F,
    label_fn: &L,
) -> Result<LabeledFeatures>
where
    F: FeatureGenerator + ?Sized,
    L: LabelGenerator + ?Sized,
{
    let labels = label_fn.labels(series)?;
    let features = feature_fn.features(series)?;
    let (skip_at_start, skip_at_end) = (features.skip_at_start, labels.skip_at_end);

    let len = series.len();
    if skip_at_start + skip_at_end >= len {
        return Err(Error::alignment(format!(
            "{} sessions leave no rows after {} leading and {} trailing skips",
            len, skip_at_start, skip_at_end
        )));
    }

    let features = features.frame.drop_tail(skip_at_end)?;
    let labels = labels.frame.drop_head(skip_at_start)?;
    if features.index() != labels.index() {
        return Err(Error::alignment(format!(
            "feature rows ({}) and label rows ({}) do not share decision dates",
            features.n_rows(),
            labels.n_rows()
        )));
    }

    debug!(
        "Aligned {} rows (skip_at_start = {}, skip_at_end = {}) from {} sessions",
        features.n_rows(),
        skip_at_start,
        skip_at_end,
        len
    );
    Ok(LabeledFeatures { features, labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seshat_core::Frame;
    use seshat_ports::{FeatureOutput, LabelOutput};

    fn series(n: usize) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2014, 1, 6).unwrap();
        let dates = start.iter_days().take(n).collect();
        let close = (1..=n).map(|i| i as f64).collect();
        TimeSeries::new(dates, vec![("Close".to_string(), close)]).unwrap()
    }

    /// Close at the decision date, after `warmup` sessions
    fn lagged(warmup: usize) -> impl Fn(&TimeSeries) -> Result<FeatureOutput> {
        move |s: &TimeSeries| {
            let close = s.column("Close")?;
            let frame = Frame::single(
                s.dates()[warmup..].to_vec(),
                "0Close",
                close[warmup..].to_vec(),
            )?;
            Ok(FeatureOutput::new(frame, warmup))
        }
    }

    /// Close `ahead` sessions after the decision date
    fn forward(ahead: usize) -> impl Fn(&TimeSeries) -> Result<LabelOutput> {
        move |s: &TimeSeries| {
            let close = s.column("Close")?;
            let n = s.len() - ahead;
            let frame = Frame::single(s.dates()[..n].to_vec(), "Close", close[ahead..].to_vec())?;
            Ok(LabelOutput::new(frame, ahead))
        }
    }

    #[test]
    fn test_warmup_and_trailing_skip() {
        let data = series(10);
        let aligned = labeled_features(&data, &lagged(2), &forward(1)).unwrap();

        assert_eq!(aligned.len(), 7);
        assert_eq!(aligned.labels.n_rows(), 7);
        assert_eq!(aligned.features.index(), aligned.labels.index());
        assert_eq!(aligned.features.index(), &data.dates()[2..9]);
        // each label is the next session's close
        for r in 0..aligned.len() {
            assert_eq!(aligned.labels.get(r, 0), aligned.features.get(r, 0) + 1.0);
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        let data = series(5);
        assert!(matches!(
            labeled_features(&data, &lagged(3), &forward(2)),
            Err(Error::Alignment(_))
        ));
        assert!(labeled_features(&data, &lagged(2), &forward(2)).is_ok());
    }

    #[test]
    fn test_index_mismatch() {
        let data = series(8);
        // claims no warm-up while actually starting two rows in
        let misreported = |s: &TimeSeries| -> Result<FeatureOutput> {
            let out = lagged(2)(s)?;
            Ok(FeatureOutput::new(out.frame, 0))
        };
        assert!(matches!(
            labeled_features(&data, &misreported, &forward(1)),
            Err(Error::Alignment(_))
        ));
    }

    #[test]
    fn test_generator_errors_propagate() {
        let data = series(8);
        let failing =
            |_: &TimeSeries| -> Result<LabelOutput> { Err(Error::Column("Volume".into())) };
        assert_eq!(
            labeled_features(&data, &lagged(1), &failing),
            Err(Error::Column("Volume".into()))
        );
    }

    #[test]
    fn test_trait_objects() {
        let data = series(6);
        let features: Box<dyn FeatureGenerator> = Box::new(lagged(1));
        let labels: Box<dyn LabelGenerator> = Box::new(forward(1));
        let aligned = labeled_features(&data, features.as_ref(), labels.as_ref()).unwrap();
        assert_eq!(aligned.len(), 4);
    }
}
