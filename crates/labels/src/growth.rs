//! Forward growth labels

use log::trace;
use seshat_core::{Error, LabelFrame, Result, TimeSeries};
use seshat_features::GrowthKind;
use seshat_ports::{LabelGenerator, LabelOutput};
use serde::{Deserialize, Serialize};

/// Forward growth of `selection` over `interval` sessions.
///
/// Row `t` holds `x[t + interval] / x[t]` and is indexed by `dates[t]`, the
/// date the prediction is made.
pub fn growth_labels(
    series: &TimeSeries,
    interval: usize,
    selection: &str,
    kind: GrowthKind,
) -> Result<LabelFrame> {
    if interval < 1 {
        return Err(Error::shape("label interval must be at least one session"));
    }
    let values = series.column(selection)?;
    let len = values.len();
    if interval >= len {
        return Err(Error::shape(format!(
            "{} sessions leave no {}-session forward labels",
            len, interval
        )));
    }

    let data = values
        .iter()
        .zip(&values[interval..])
        .map(|(now, later)| kind.apply(later / now))
        .collect();
    LabelFrame::single(series.dates()[..len - interval].to_vec(), kind.column(), data)
}

/// Label generator for forward growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthLabel {
    /// Sessions between the decision date and the labelled value
    pub interval: usize,
    /// Column to measure
    pub selection: String,
    #[serde(default)]
    pub kind: GrowthKind,
}

impl GrowthLabel {
    pub fn new(interval: usize, selection: impl Into<String>) -> Self {
        Self {
            interval,
            selection: selection.into(),
            kind: GrowthKind::Growth,
        }
    }

    pub fn with_kind(mut self, kind: GrowthKind) -> Self {
        self.kind = kind;
        self
    }
}

impl LabelGenerator for GrowthLabel {
    fn labels(&self, series: &TimeSeries) -> Result<LabelOutput> {
        let frame = growth_labels(series, self.interval, &self.selection, self.kind)?;
        trace!(
            "Labelled {} rows of {}-session {} on '{}'",
            frame.n_rows(),
            self.interval,
            self.kind.column(),
            self.selection
        );
        Ok(LabelOutput::new(frame, self.interval))
    }
}
