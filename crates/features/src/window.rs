//! Sliding-window featurization of one column
//!
//! Each output row holds `n` consecutive session values ending at the
//! decision date; column `0` is the decision date itself and column `-k` is
//! the value `k` sessions earlier.

use seshat_core::{AlignmentSpec, Error, Frame, Result, TimeSeries};

/// Offset labels `-n+1 … 0`
pub fn offsets(n: usize) -> impl Iterator<Item = i64> {
    (0..n as i64).map(move |k| k - n as i64 + 1)
}

/// Row-major sliding windows of width `n` over `values`.
///
/// Row `r` is `values[r .. r + n]`; there are `values.len() - n + 1` rows.
/// Callers check `1 <= n <= values.len()`.
pub fn window_values(values: &[f64], n: usize) -> Vec<f64> {
    debug_assert!(n >= 1 && n <= values.len());
    let n_rows = values.len() + 1 - n;
    let mut out = Vec::with_capacity(n_rows * n);
    for window in values.windows(n) {
        out.extend_from_slice(window);
    }
    out
}

/// Turn one column into an `n`-wide window matrix.
///
/// Output rows are the decision dates `dates[n - 1 + skip_at_start ..
/// len - skip_at_end]`.
pub fn featurize(
    series: &TimeSeries,
    n: usize,
    selection: &str,
    skip: AlignmentSpec,
) -> Result<Frame> {
    if n < 1 {
        return Err(Error::shape("window must span at least one session"));
    }
    let values = series.column(selection)?;
    let len = values.len();
    if len < n + skip.total() {
        return Err(Error::shape(format!(
            "{} sessions cannot fill a {}-session window after skipping {} rows",
            len,
            n,
            skip.total()
        )));
    }

    let first = skip.skip_at_start;
    let last = len - skip.skip_at_end;
    let decision_start = first + n - 1;

    let index = series.dates()[decision_start..last].to_vec();
    let columns = offsets(n).map(|offset| offset.to_string()).collect();
    let data = window_values(&values[first..last], n);

    Frame::new(index, columns, data)
}
