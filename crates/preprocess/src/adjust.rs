//! Invertible per-column adjustments

use seshat_core::{Error, Frame, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    /// Column means that were subtracted
    Mean,
    /// Column scales each value was divided by
    Scale,
}

/// One value per column, recorded by `center` or `normalize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    kind: AdjustmentKind,
    columns: Vec<String>,
    values: Vec<f64>,
}

impl Adjustment {
    pub fn new(kind: AdjustmentKind, columns: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self {
            kind,
            columns,
            values,
        }
    }

    #[inline]
    pub fn kind(&self) -> AdjustmentKind {
        self.kind
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Adjust another frame with the same recorded values
    pub fn apply(&self, frame: &Frame) -> Result<Frame> {
        let mut out = frame.clone();
        self.apply_in_place(&mut out)?;
        Ok(out)
    }

    /// Undo the adjustment
    pub fn invert(&self, frame: &Frame) -> Result<Frame> {
        let mut out = frame.clone();
        self.invert_in_place(&mut out)?;
        Ok(out)
    }

    pub fn apply_in_place(&self, frame: &mut Frame) -> Result<()> {
        self.check(frame)?;
        let kind = self.kind;
        self.for_each(frame, |x, v| match kind {
            AdjustmentKind::Mean => x - v,
            AdjustmentKind::Scale => x / v,
        });
        Ok(())
    }

    pub fn invert_in_place(&self, frame: &mut Frame) -> Result<()> {
        self.check(frame)?;
        let kind = self.kind;
        self.for_each(frame, |x, v| match kind {
            AdjustmentKind::Mean => x + v,
            AdjustmentKind::Scale => x * v,
        });
        Ok(())
    }

    fn check(&self, frame: &Frame) -> Result<()> {
        if frame.n_cols() != self.values.len() {
            return Err(Error::shape(format!(
                "adjustment has {} columns, frame has {}",
                self.values.len(),
                frame.n_cols()
            )));
        }
        Ok(())
    }

    fn for_each(&self, frame: &mut Frame, f: impl Fn(f64, f64) -> f64) {
        for r in 0..frame.n_rows() {
            for (x, &v) in frame.row_mut(r).iter_mut().zip(&self.values) {
                *x = f(*x, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn frame(rows: &[[f64; 2]]) -> Frame {
        let start = NaiveDate::from_ymd_opt(2014, 1, 6).unwrap();
        let index = start.iter_days().take(rows.len()).collect();
        let values = rows.iter().flatten().copied().collect();
        Frame::new(index, vec!["a".into(), "b".into()], values).unwrap()
    }

    #[test]
    fn test_mean_apply_and_invert() {
        let means = Adjustment::new(
            AdjustmentKind::Mean,
            vec!["a".into(), "b".into()],
            vec![1.0, 10.0],
        );
        let data = frame(&[[2.0, 20.0], [3.0, 5.0]]);

        let adjusted = means.apply(&data).unwrap();
        assert_eq!(adjusted.row(0), &[1.0, 10.0]);
        assert_eq!(adjusted.row(1), &[2.0, -5.0]);
        assert_eq!(means.invert(&adjusted).unwrap(), data);
    }

    #[test]
    fn test_scale_apply_and_invert() {
        let scales = Adjustment::new(
            AdjustmentKind::Scale,
            vec!["a".into(), "b".into()],
            vec![2.0, 4.0],
        );
        let data = frame(&[[2.0, 20.0], [3.0, 5.0]]);

        let adjusted = scales.apply(&data).unwrap();
        assert_eq!(adjusted.row(0), &[1.0, 5.0]);
        assert_eq!(adjusted.row(1), &[1.5, 1.25]);
        assert_eq!(scales.invert(&adjusted).unwrap(), data);
    }

    #[test]
    fn test_column_mismatch() {
        let means = Adjustment::new(AdjustmentKind::Mean, vec!["a".into()], vec![1.0]);
        assert!(matches!(
            means.apply(&frame(&[[1.0, 2.0]])),
            Err(Error::Shape(_))
        ));
        assert!(matches!(
            means.invert(&frame(&[[1.0, 2.0]])),
            Err(Error::Shape(_))
        ));
    }

    #[test]
    fn test_serialize() {
        let scales = Adjustment::new(AdjustmentKind::Scale, vec!["0G".into()], vec![0.5]);
        let json = serde_json::to_string(&scales).unwrap();
        assert!(json.contains("\"scale\""));
        let back: Adjustment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scales);
    }
}
