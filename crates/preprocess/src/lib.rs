//! Seshat Preprocess
//!
//! Downstream transforms applied after train/test splitting:
//! - `center` / `normalize`: zero column means and unit population standard
//!   deviation, each returning the [`Adjustment`] that undoes it
//! - `transform`: scale each row (or column) by its norm, first, last or mean
//!   value, optionally carrying the labels along with the feature rows
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (centered, means) = center(&train);
//! let (scaled, scales) = normalize(&centered);
//!
//! // same adjustments on held-out rows
//! let test = scales.apply(&means.apply(&test)?)?;
//! ```
//!
//! To leave the bias column untouched, pass only the other columns.

pub mod adjust;
pub mod center;
pub mod transform;

pub use adjust::{Adjustment, AdjustmentKind};
pub use center::{
    center, center_in_place, center_into, normalize, normalize_in_place, normalize_into,
};
pub use transform::{Axis, Method, TransformConfig, Transformed, transform};
