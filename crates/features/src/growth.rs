//! Growth of a value versus its value n sessions earlier
//!
//! Growth is measured relative to the earlier session but indexed by the
//! later one, the date on which the value is known. Zero or negative
//! denominators are not guarded: they yield IEEE NaN/Inf.

use seshat_core::{AlignmentSpec, Error, Frame, Result, TimeSeries};
use seshat_ports::ColumnGenerator;
use serde::{Deserialize, Serialize};

/// What to report for each ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthKind {
    /// `x[t] / x[t - n]`
    #[default]
    Growth,
    /// Growth minus one
    Return,
    /// Natural log of growth
    LnGrowth,
}

impl GrowthKind {
    /// Default output column label
    pub fn column(&self) -> &'static str {
        match self {
            GrowthKind::Growth => "Growth",
            GrowthKind::Return => "Return",
            GrowthKind::LnGrowth => "LnGrowth",
        }
    }

    #[inline]
    pub fn apply(&self, ratio: f64) -> f64 {
        match self {
            GrowthKind::Growth => ratio,
            GrowthKind::Return => ratio - 1.0,
            GrowthKind::LnGrowth => ratio.ln(),
        }
    }
}

/// Ratio of `selection` to its value `n_sessions` earlier, as a `Growth` column
pub fn growth(
    series: &TimeSeries,
    selection: &str,
    n_sessions: usize,
    skip: AlignmentSpec,
) -> Result<Frame> {
    ratio_frame(series, selection, n_sessions, skip, GrowthKind::Growth)
}

/// Growth minus one, as a `Return` column
pub fn ret(
    series: &TimeSeries,
    selection: &str,
    n_sessions: usize,
    skip: AlignmentSpec,
) -> Result<Frame> {
    ratio_frame(series, selection, n_sessions, skip, GrowthKind::Return)
}

/// Natural log of growth, as a `LnGrowth` column
pub fn ln_growth(
    series: &TimeSeries,
    selection: &str,
    n_sessions: usize,
    skip: AlignmentSpec,
) -> Result<Frame> {
    ratio_frame(series, selection, n_sessions, skip, GrowthKind::LnGrowth)
}

fn ratio_frame(
    series: &TimeSeries,
    selection: &str,
    n_sessions: usize,
    skip: AlignmentSpec,
    kind: GrowthKind,
) -> Result<Frame> {
    if n_sessions < 1 {
        return Err(Error::shape("growth needs an interval of at least one session"));
    }
    let values = series.column(selection)?;
    let len = values.len();
    let first = skip.skip_at_start + n_sessions;
    let last = len.saturating_sub(skip.skip_at_end);
    if first >= last {
        return Err(Error::shape(format!(
            "{} sessions leave no {}-session growth values after skipping {} rows",
            len,
            n_sessions,
            skip.total()
        )));
    }

    let data = (first..last)
        .map(|t| kind.apply(values[t] / values[t - n_sessions]))
        .collect();
    Frame::single(series.dates()[first..last].to_vec(), kind.column(), data)
}

/// Growth column generator for the feature composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthGenerator {
    /// Column to measure
    pub selection: String,
    /// Sessions between the two compared values
    pub n_sessions: usize,
    /// Extra leading rows to omit
    #[serde(default)]
    pub skip_at_start: usize,
    #[serde(default)]
    pub kind: GrowthKind,
}

impl GrowthGenerator {
    /// Session-over-session growth of `selection`
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            n_sessions: 1,
            skip_at_start: 0,
            kind: GrowthKind::Growth,
        }
    }

    pub fn with_sessions(mut self, n_sessions: usize) -> Self {
        self.n_sessions = n_sessions;
        self
    }

    pub fn with_skip_at_start(mut self, skip_at_start: usize) -> Self {
        self.skip_at_start = skip_at_start;
        self
    }

    pub fn with_kind(mut self, kind: GrowthKind) -> Self {
        self.kind = kind;
        self
    }
}

impl ColumnGenerator for GrowthGenerator {
    fn warmup(&self) -> usize {
        self.skip_at_start + self.n_sessions
    }

    fn generate(&self, series: &TimeSeries) -> Result<Frame> {
        ratio_frame(
            series,
            &self.selection,
            self.n_sessions,
            AlignmentSpec::start(self.skip_at_start),
            self.kind,
        )
    }
}
