use seshat_core::{Frame, Result, TimeSeries};

/// Port for single-column generators feeding the feature composer
///
/// A generator evaluates one column over the full series and reports how
/// many leading sessions it consumes before its first valid value. The
/// output must cover exactly `series.dates()[warmup()..]`.
pub trait ColumnGenerator {
    /// Leading sessions without output
    fn warmup(&self) -> usize;

    /// Evaluate the generator over the full series
    fn generate(&self, series: &TimeSeries) -> Result<Frame>;
}

impl<G: ColumnGenerator + ?Sized> ColumnGenerator for Box<G> {
    fn warmup(&self) -> usize {
        (**self).warmup()
    }

    fn generate(&self, series: &TimeSeries) -> Result<Frame> {
        (**self).generate(series)
    }
}
