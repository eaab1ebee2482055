//! Current value relative to its trailing average
//!
//! The average covers the `window` sessions *before* the decision date and
//! never the decision date itself, so the feature only describes past
//! behaviour relative to today.

use crate::rolling::trailing_means;
use seshat_core::{AlignmentSpec, Error, Frame, Result, TimeSeries, VOLUME};
use seshat_ports::ColumnGenerator;
use serde::{Deserialize, Serialize};

/// Column ratio-to-average is computed on unless told otherwise
pub const DEFAULT_RATIO_COLUMN: &str = VOLUME;

/// Output column label
pub const RATIO_TO_AVE_COLUMN: &str = "Ratio to Ave";

/// Ratio of `x[t]` to the mean of `x[t - window .. t]`.
///
/// Decision rows are `t ∈ [window + skip_at_start, len - skip_at_end)`.
pub fn ratio_to_ave(
    series: &TimeSeries,
    window: usize,
    selection: &str,
    skip: AlignmentSpec,
) -> Result<Frame> {
    if window < 1 {
        return Err(Error::shape("averaging window must span at least one session"));
    }
    let values = series.column(selection)?;
    let len = values.len();
    let first = skip.skip_at_start + window;
    let last = len.saturating_sub(skip.skip_at_end);
    if first >= last {
        return Err(Error::shape(format!(
            "{} sessions leave no values after a {}-session average and {} skipped rows",
            len,
            window,
            skip.total()
        )));
    }

    // means[j] averages values[skip_at_start + j ..][..window], the window
    // preceding decision row first + j
    let means = trailing_means(&values[skip.skip_at_start..last - 1], window);
    let data = (first..last)
        .zip(means)
        .map(|(t, mean)| values[t] / mean)
        .collect();

    Frame::single(series.dates()[first..last].to_vec(), RATIO_TO_AVE_COLUMN, data)
}

/// Ratio-to-average column generator for the feature composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioToAverageGenerator {
    /// Sessions in the trailing average
    pub window: usize,
    /// Column to measure
    #[serde(default = "default_selection")]
    pub selection: String,
    /// Extra leading rows to omit
    #[serde(default)]
    pub skip_at_start: usize,
}

fn default_selection() -> String {
    DEFAULT_RATIO_COLUMN.to_string()
}

impl RatioToAverageGenerator {
    /// Volume relative to its trailing `window`-session average
    pub fn new(window: usize) -> Self {
        Self {
            window,
            selection: default_selection(),
            skip_at_start: 0,
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }

    pub fn with_skip_at_start(mut self, skip_at_start: usize) -> Self {
        self.skip_at_start = skip_at_start;
        self
    }
}

impl ColumnGenerator for RatioToAverageGenerator {
    fn warmup(&self) -> usize {
        self.skip_at_start + self.window
    }

    fn generate(&self, series: &TimeSeries) -> Result<Frame> {
        ratio_to_ave(
            series,
            self.window,
            &self.selection,
            AlignmentSpec::start(self.skip_at_start),
        )
    }
}
