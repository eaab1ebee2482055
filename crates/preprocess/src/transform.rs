//! Row and column scaling
//!
//! Every value becomes `x * norm / divisor`, where the divisor is computed
//! per row (or per column) by the chosen [`Method`].

use log::debug;
use seshat_core::{Error, Frame, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction along which divisors are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// One divisor per row
    #[default]
    Rows,
    /// One divisor per column
    Columns,
}

impl Axis {
    /// Method used when none is configured
    pub fn default_method(&self) -> Method {
        match self {
            Axis::Rows => Method::Vector,
            Axis::Columns => Method::First,
        }
    }
}

/// How the divisor of a row or column is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Euclidean norm
    Vector,
    /// First value
    First,
    /// Last value
    Last,
    /// Arithmetic mean
    Mean,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Vector => "vector",
            Method::First => "first",
            Method::Last => "last",
            Method::Mean => "mean",
        }
    }

    fn divisor(&self, values: &[f64]) -> f64 {
        match self {
            Method::Vector => values.iter().map(|x| x * x).sum::<f64>().sqrt(),
            Method::First => values.first().copied().unwrap_or(f64::NAN),
            Method::Last => values.last().copied().unwrap_or(f64::NAN),
            Method::Mean => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vector" => Ok(Method::Vector),
            "first" => Ok(Method::First),
            "last" => Ok(Method::Last),
            "mean" => Ok(Method::Mean),
            other => Err(Error::method(format!("no normalization method '{}'", other))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`transform`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub axis: Axis,
    /// Defaults to the axis's method when unset
    pub method: Option<Method>,
    /// Target value of each divisor after scaling
    pub norm: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Rows,
            method: None,
            norm: 1.0,
        }
    }
}

impl TransformConfig {
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_norm(mut self, norm: f64) -> Self {
        self.norm = norm;
        self
    }

    /// Configured method, or the axis default
    pub fn method(&self) -> Method {
        self.method.unwrap_or_else(|| self.axis.default_method())
    }
}

/// Scaled features, and labels when they were supplied
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub features: Frame,
    pub labels: Option<Frame>,
}

/// Scale `frame` along `config.axis`.
///
/// Labels are only supported with [`Axis::Rows`]: each label row is scaled by
/// the divisor of the matching feature row.
pub fn transform(
    frame: &Frame,
    config: &TransformConfig,
    labels: Option<&Frame>,
) -> Result<Transformed> {
    let method = config.method();
    if let Some(labels) = labels {
        if config.axis == Axis::Columns {
            return Err(Error::method(
                "label normalization incompatible with normalization by column",
            ));
        }
        if labels.n_rows() != frame.n_rows() {
            return Err(Error::shape(format!(
                "{} label rows for {} feature rows",
                labels.n_rows(),
                frame.n_rows()
            )));
        }
    }

    let divisors = match config.axis {
        Axis::Rows => frame.rows().map(|row| method.divisor(row)).collect::<Vec<_>>(),
        Axis::Columns => (0..frame.n_cols())
            .map(|c| method.divisor(&frame.column_at(c)))
            .collect(),
    };
    debug!(
        "Transforming {:?} frame by {:?} with method '{}' and norm {}",
        frame.shape(),
        config.axis,
        method,
        config.norm
    );

    let features = scale(frame, &divisors, config.axis, config.norm);
    let labels = labels.map(|l| scale(l, &divisors, Axis::Rows, config.norm));
    Ok(Transformed { features, labels })
}

fn scale(frame: &Frame, divisors: &[f64], axis: Axis, norm: f64) -> Frame {
    let mut out = frame.clone();
    for r in 0..out.n_rows() {
        for (c, x) in out.row_mut(r).iter_mut().enumerate() {
            let divisor = match axis {
                Axis::Rows => divisors[r],
                Axis::Columns => divisors[c],
            };
            *x = *x * norm / divisor;
        }
    }
    out
}
