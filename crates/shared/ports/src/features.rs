use seshat_core::{FeatureFrame, Result, TimeSeries};

/// Feature frame together with the number of leading series rows it omits
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureOutput {
    pub frame: FeatureFrame,
    /// Row of the series matching the first feature row
    pub skip_at_start: usize,
}

impl FeatureOutput {
    pub fn new(frame: FeatureFrame, skip_at_start: usize) -> Self {
        Self {
            frame,
            skip_at_start,
        }
    }
}

/// Port for feature frame producers driven by the aligner
///
/// Implementations are evaluated over the full series and report their own
/// warm-up; trimming to the label horizon is left to the aligner.
pub trait FeatureGenerator {
    fn features(&self, series: &TimeSeries) -> Result<FeatureOutput>;
}

impl<F> FeatureGenerator for F
where
    F: Fn(&TimeSeries) -> Result<FeatureOutput>,
{
    fn features(&self, series: &TimeSeries) -> Result<FeatureOutput> {
        self(series)
    }
}
