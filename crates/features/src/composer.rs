//! Feature Composition
//!
//! Combines several named single-column generators into one feature frame.
//!
//! ## Layout
//!
//! ```text
//! | Constant | -n+1<A> … 0<A> | -n+1<B> … 0<B> | …
//! ```
//!
//! Every generator is evaluated against the same full series, then windowed
//! into an `n_sessions`-wide block. Blocks are concatenated in generator
//! order.
//!
//! ## Row range
//!
//! Each generator reports its warm-up. The first decision row is
//! `max(skip_at_start, warm-ups) + n_sessions - 1`: the most restrictive
//! generator determines the start for all of them. Running out of history is
//! an alignment error, never a silent truncation.

use crate::window::{offsets, window_values};
use log::{debug, trace};
use seshat_core::{CONSTANT_COLUMN, Error, FeatureFrame, Frame, Result, TimeSeries};
use seshat_ports::{ColumnGenerator, FeatureGenerator, FeatureOutput};
use std::fmt;

/// A column generator paired with the name used to label its block
pub struct NamedGenerator {
    display_name: String,
    generator: Box<dyn ColumnGenerator>,
}

impl NamedGenerator {
    pub fn new(display_name: impl Into<String>, generator: impl ColumnGenerator + 'static) -> Self {
        Self {
            display_name: display_name.into(),
            generator: Box::new(generator),
        }
    }

    /// Wrap a closure producing one column after `warmup` leading sessions
    pub fn from_fn<F>(display_name: impl Into<String>, warmup: usize, func: F) -> Self
    where
        F: Fn(&TimeSeries) -> Result<Frame> + 'static,
    {
        Self::new(display_name, FnGenerator { warmup, func })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn warmup(&self) -> usize {
        self.generator.warmup()
    }

    /// Evaluate the generator and check it covers the sessions it promised
    fn column(&self, series: &TimeSeries) -> Result<Vec<f64>> {
        let out = self.generator.generate(series)?;
        if out.n_cols() != 1 {
            return Err(Error::shape(format!(
                "generator '{}' produced {} columns, expected exactly one",
                self.display_name,
                out.n_cols()
            )));
        }

        let warmup = self.warmup();
        let expected = series.dates().get(warmup..).unwrap_or(&[]);
        if out.index() != expected {
            return Err(Error::alignment(format!(
                "generator '{}' covers {} sessions ({:?} to {:?}) but reports a warm-up of {} on {} sessions",
                self.display_name,
                out.n_rows(),
                out.index().first(),
                out.index().last(),
                warmup,
                series.len()
            )));
        }

        Ok(out.column_at(0))
    }
}

impl fmt::Debug for NamedGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedGenerator")
            .field("display_name", &self.display_name)
            .field("warmup", &self.warmup())
            .finish()
    }
}

struct FnGenerator<F> {
    warmup: usize,
    func: F,
}

impl<F> ColumnGenerator for FnGenerator<F>
where
    F: Fn(&TimeSeries) -> Result<Frame>,
{
    fn warmup(&self) -> usize {
        self.warmup
    }

    fn generate(&self, series: &TimeSeries) -> Result<Frame> {
        (self.func)(series)
    }
}

/// Raw column passthrough, used to window columns as they are
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSelect {
    pub selection: String,
}

impl ColumnSelect {
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
        }
    }
}

impl ColumnGenerator for ColumnSelect {
    fn warmup(&self) -> usize {
        0
    }

    fn generate(&self, series: &TimeSeries) -> Result<Frame> {
        let values = series.column(&self.selection)?;
        Frame::single(series.dates().to_vec(), &self.selection, values.to_vec())
    }
}

/// Build a feature frame from named generators.
///
/// Returns the frame together with its `skip_at_start`, the series row of the
/// first decision date.
pub fn from_funcs(
    generators: &[NamedGenerator],
    n_sessions: usize,
    series: &TimeSeries,
    skip_at_start: usize,
    constant_feature: bool,
) -> Result<FeatureOutput> {
    if n_sessions < 1 {
        return Err(Error::shape("feature window must span at least one session"));
    }
    let Some(limiting) = generators.iter().max_by_key(|g| g.warmup()) else {
        return Err(Error::shape("no feature generators given"));
    };

    let len = series.len();
    let warmup = limiting.warmup().max(skip_at_start);
    let start = warmup + n_sessions - 1;
    if start >= len {
        let binding = if skip_at_start > limiting.warmup() {
            format!("skip_at_start = {}", skip_at_start)
        } else {
            format!("most restrictive generator: '{}'", limiting.display_name())
        };
        return Err(Error::alignment(format!(
            "{} sessions cannot cover a warm-up of {} plus a {}-session window ({})",
            len, warmup, n_sessions, binding
        )));
    }

    let n_rows = len - start;
    let n_cols = generators.len() * n_sessions + usize::from(constant_feature);
    let mut values = vec![0.0; n_rows * n_cols];
    let mut columns = Vec::with_capacity(n_cols);

    let mut offset = 0;
    if constant_feature {
        columns.push(CONSTANT_COLUMN.to_string());
        for r in 0..n_rows {
            values[r * n_cols] = 1.0;
        }
        offset = 1;
    }

    for generator in generators {
        let column = generator.column(series)?;
        // column[k] holds series row warmup + k; row 0 needs the window
        // ending at series row `start`
        let base = start + 1 - n_sessions - generator.warmup();
        let windows = window_values(&column[base..], n_sessions);
        for (r, window) in windows.chunks_exact(n_sessions).enumerate() {
            let at = r * n_cols + offset;
            values[at..at + n_sessions].copy_from_slice(window);
        }

        columns.extend(
            offsets(n_sessions).map(|o| format!("{}{}", o, generator.display_name())),
        );
        trace!(
            "Windowed generator '{}' (warm-up {}) into columns {}..{}",
            generator.display_name(),
            generator.warmup(),
            offset,
            offset + n_sessions
        );
        offset += n_sessions;
    }

    debug!(
        "Composed {} feature rows x {} columns from {} generators (skip_at_start = {})",
        n_rows,
        n_cols,
        generators.len(),
        start
    );

    let frame = Frame::new(series.dates()[start..].to_vec(), columns, values)?;
    Ok(FeatureOutput::new(frame, start))
}

/// Window raw series columns side by side
pub fn from_cols(
    selection: &[&str],
    n_sessions: usize,
    series: &TimeSeries,
    constant_feature: bool,
) -> Result<FeatureFrame> {
    let generators: Vec<NamedGenerator> = selection
        .iter()
        .map(|&col| NamedGenerator::new(col, ColumnSelect::new(col)))
        .collect();
    from_funcs(&generators, n_sessions, series, 0, constant_feature).map(|out| out.frame)
}

/// Reusable feature composition: generators plus window settings
#[derive(Debug)]
pub struct FeatureComposer {
    generators: Vec<NamedGenerator>,
    n_sessions: usize,
    skip_at_start: usize,
    constant_feature: bool,
}

impl FeatureComposer {
    /// Composer over `n_sessions`-wide blocks with the constant feature on
    pub fn new(n_sessions: usize) -> Self {
        Self {
            generators: Vec::new(),
            n_sessions,
            skip_at_start: 0,
            constant_feature: true,
        }
    }

    pub fn with_generator(mut self, generator: NamedGenerator) -> Self {
        self.generators.push(generator);
        self
    }

    pub fn with_skip_at_start(mut self, skip_at_start: usize) -> Self {
        self.skip_at_start = skip_at_start;
        self
    }

    pub fn with_constant_feature(mut self, constant_feature: bool) -> Self {
        self.constant_feature = constant_feature;
        self
    }

    pub fn generators(&self) -> &[NamedGenerator] {
        &self.generators
    }

    pub fn n_sessions(&self) -> usize {
        self.n_sessions
    }

    /// Columns the composed frame will have
    pub fn n_columns(&self) -> usize {
        self.generators.len() * self.n_sessions + usize::from(self.constant_feature)
    }

    pub fn compose(&self, series: &TimeSeries) -> Result<FeatureOutput> {
        from_funcs(
            &self.generators,
            self.n_sessions,
            series,
            self.skip_at_start,
            self.constant_feature,
        )
    }
}

impl FeatureGenerator for FeatureComposer {
    fn features(&self, series: &TimeSeries) -> Result<FeatureOutput> {
        self.compose(series)
    }
}
