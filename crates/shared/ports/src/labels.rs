use seshat_core::{LabelFrame, Result, TimeSeries};

/// Label frame together with the number of trailing series rows it omits
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOutput {
    pub frame: LabelFrame,
    /// Trailing rows the feature frame must drop to stay aligned
    pub skip_at_end: usize,
}

impl LabelOutput {
    pub fn new(frame: LabelFrame, skip_at_end: usize) -> Self {
        Self { frame, skip_at_end }
    }
}

/// Port for label producers
///
/// Labels look forward: a label for a decision date is computed from rows at
/// or after that date. `skip_at_end` counts the final sessions for which no
/// label exists.
pub trait LabelGenerator {
    fn labels(&self, series: &TimeSeries) -> Result<LabelOutput>;
}

impl<F> LabelGenerator for F
where
    F: Fn(&TimeSeries) -> Result<LabelOutput>,
{
    fn labels(&self, series: &TimeSeries) -> Result<LabelOutput> {
        self(series)
    }
}
