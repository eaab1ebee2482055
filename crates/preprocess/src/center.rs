//! Centering and normalization
//!
//! `normalize` expects centered input: it divides by the population standard
//! deviation (ddof 0) around the column mean. A constant column has zero
//! deviation and normalizes to NaN/Inf, so leave the bias column out.

use crate::adjust::{Adjustment, AdjustmentKind};
use log::trace;
use seshat_core::{Error, Frame, Result};

/// Per-column means
fn column_means(frame: &Frame) -> Vec<f64> {
    let n = frame.n_rows() as f64;
    let mut sums = vec![0.0; frame.n_cols()];
    for row in frame.rows() {
        for (sum, &x) in sums.iter_mut().zip(row) {
            *sum += x;
        }
    }
    sums.into_iter().map(|s| s / n).collect()
}

/// Per-column population standard deviations
fn column_stds(frame: &Frame) -> Vec<f64> {
    let n = frame.n_rows() as f64;
    let means = column_means(frame);
    let mut squares = vec![0.0; frame.n_cols()];
    for row in frame.rows() {
        for ((sq, &x), &mean) in squares.iter_mut().zip(row).zip(&means) {
            *sq += (x - mean) * (x - mean);
        }
    }
    squares.into_iter().map(|s| (s / n).sqrt()).collect()
}

fn check_out(frame: &Frame, out: &Frame) -> Result<()> {
    if !frame.same_shape(out) {
        return Err(Error::shape(format!(
            "output buffer is {:?}, input is {:?}",
            out.shape(),
            frame.shape()
        )));
    }
    Ok(())
}

/// Subtract each column's mean.
///
/// Returns the centered frame and the means that were subtracted.
pub fn center(frame: &Frame) -> (Frame, Adjustment) {
    let mut out = frame.clone();
    let means = center_in_place(&mut out);
    (out, means)
}

/// Center `frame` into the caller's buffer.
///
/// `out` keeps its own index and column labels; only its values are written.
pub fn center_into<'a>(
    frame: &Frame,
    out: &'a mut Frame,
) -> Result<(&'a mut Frame, Adjustment)> {
    check_out(frame, out)?;
    out.values_mut().copy_from_slice(frame.values());
    let means = center_in_place(out);
    Ok((out, means))
}

pub fn center_in_place(frame: &mut Frame) -> Adjustment {
    let means = Adjustment::new(
        AdjustmentKind::Mean,
        frame.columns().to_vec(),
        column_means(frame),
    );
    trace!("Centering {:?} frame", frame.shape());
    for r in 0..frame.n_rows() {
        for (x, &mean) in frame.row_mut(r).iter_mut().zip(means.values()) {
            *x -= mean;
        }
    }
    means
}

/// Divide each column by its standard deviation.
///
/// Returns the scaled frame and the deviations it was divided by.
pub fn normalize(centered: &Frame) -> (Frame, Adjustment) {
    let mut out = centered.clone();
    let scales = normalize_in_place(&mut out);
    (out, scales)
}

/// Normalize `centered` into the caller's buffer.
pub fn normalize_into<'a>(
    centered: &Frame,
    out: &'a mut Frame,
) -> Result<(&'a mut Frame, Adjustment)> {
    check_out(centered, out)?;
    out.values_mut().copy_from_slice(centered.values());
    let scales = normalize_in_place(out);
    Ok((out, scales))
}

pub fn normalize_in_place(frame: &mut Frame) -> Adjustment {
    let scales = Adjustment::new(
        AdjustmentKind::Scale,
        frame.columns().to_vec(),
        column_stds(frame),
    );
    trace!("Normalizing {:?} frame", frame.shape());
    for r in 0..frame.n_rows() {
        for (x, &sd) in frame.row_mut(r).iter_mut().zip(scales.values()) {
            *x /= sd;
        }
    }
    scales
}
