//! Dated numeric tables for features and labels

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label of the bias column prepended by [`Frame::with_constant`]
pub const CONSTANT_COLUMN: &str = "Constant";

/// Row-major `f64` table indexed by decision date.
///
/// Used both for feature frames (columns are `(offset, generator)` labels)
/// and label frames (columns are named targets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct Frame {
    index: Vec<NaiveDate>,
    columns: Vec<String>,
    values: Vec<f64>,
}

/// Unvalidated wire form of [`Frame`]
#[derive(Deserialize)]
struct RawFrame {
    index: Vec<NaiveDate>,
    columns: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawFrame> for Frame {
    type Error = Error;

    fn try_from(raw: RawFrame) -> Result<Self> {
        Frame::new(raw.index, raw.columns, raw.values)
    }
}

pub type FeatureFrame = Frame;
pub type LabelFrame = Frame;

impl Frame {
    /// Create a frame from row-major values
    pub fn new(index: Vec<NaiveDate>, columns: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if values.len() != index.len() * columns.len() {
            return Err(Error::shape(format!(
                "{} values cannot fill {} rows x {} columns",
                values.len(),
                index.len(),
                columns.len()
            )));
        }
        Ok(Self {
            index,
            columns,
            values,
        })
    }

    /// Create a frame from named columns of equal length
    pub fn from_columns(index: Vec<NaiveDate>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let n_rows = index.len();
        let n_cols = columns.len();
        if let Some((name, col)) = columns.iter().find(|(_, col)| col.len() != n_rows) {
            return Err(Error::shape(format!(
                "column '{}' has {} values for {} rows",
                name,
                col.len(),
                n_rows
            )));
        }

        let mut values = vec![0.0; n_rows * n_cols];
        for (c, (_, col)) in columns.iter().enumerate() {
            for (r, &value) in col.iter().enumerate() {
                values[r * n_cols + c] = value;
            }
        }
        let names = columns.into_iter().map(|(name, _)| name).collect();
        Ok(Self {
            index,
            columns: names,
            values,
        })
    }

    /// Create a single-column frame
    pub fn single(index: Vec<NaiveDate>, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        Self::new(index, vec![name.into()], values)
    }

    #[inline]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    /// Value at `(row, col)`
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.n_cols(), "column {} out of bounds", col);
        self.values[row * self.n_cols() + col]
    }

    /// Values of one row
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let n_cols = self.n_cols();
        &self.values[row * n_cols..(row + 1) * n_cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let n_cols = self.n_cols();
        &mut self.values[row * n_cols..(row + 1) * n_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.n_rows()).map(|r| self.row(r))
    }

    /// Values of one column, by position
    pub fn column_at(&self, col: usize) -> Vec<f64> {
        (0..self.n_rows()).map(|r| self.get(r, col)).collect()
    }

    /// Values of one column, by label
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let col = self
            .position(name)
            .ok_or_else(|| Error::Column(name.to_string()))?;
        Ok(self.column_at(col))
    }

    /// Position of a column label
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Row-major values
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Drop the first `n` rows
    pub fn drop_head(&self, n: usize) -> Result<Frame> {
        if n > self.n_rows() {
            return Err(Error::alignment(format!(
                "cannot drop {} leading rows from a frame of {} rows",
                n,
                self.n_rows()
            )));
        }
        Ok(self.slice_rows(n, self.n_rows()))
    }

    /// Drop the last `n` rows
    pub fn drop_tail(&self, n: usize) -> Result<Frame> {
        if n > self.n_rows() {
            return Err(Error::alignment(format!(
                "cannot drop {} trailing rows from a frame of {} rows",
                n,
                self.n_rows()
            )));
        }
        Ok(self.slice_rows(0, self.n_rows() - n))
    }

    fn slice_rows(&self, start: usize, end: usize) -> Frame {
        let n_cols = self.n_cols();
        Frame {
            index: self.index[start..end].to_vec(),
            columns: self.columns.clone(),
            values: self.values[start * n_cols..end * n_cols].to_vec(),
        }
    }

    /// Prepend the constant bias column fixed at 1.0
    pub fn with_constant(&self) -> Frame {
        let n_cols = self.n_cols() + 1;
        let mut values = Vec::with_capacity(self.n_rows() * n_cols);
        for row in self.rows() {
            values.push(1.0);
            values.extend_from_slice(row);
        }

        let mut columns = Vec::with_capacity(n_cols);
        columns.push(CONSTANT_COLUMN.to_string());
        columns.extend(self.columns.iter().cloned());

        Frame {
            index: self.index.clone(),
            columns,
            values,
        }
    }

    /// True if both frames have the same shape
    #[inline]
    pub fn same_shape(&self, other: &Frame) -> bool {
        self.shape() == other.shape()
    }

    /// True if any value is NaN
    pub fn has_na(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }
}

/// True if `frame` contains any missing (NaN) value.
///
/// Training collaborators expect frames without missing values; call this
/// before handing a frame over.
pub fn has_na(frame: &Frame) -> bool {
    frame.has_na()
}
