//! Seshat Features
//!
//! Feature generators over a daily [`TimeSeries`](seshat_core::TimeSeries):
//! - Sliding-window featurization of a single column
//! - Growth, return and log-growth over n sessions
//! - Ratio of a value to its trailing average
//! - The feature composer, which windows several generators into one frame
//!
//! ## Pipeline
//!
//! ```text
//!   TimeSeries
//!       │
//!       ├──► GrowthGenerator ("G") ──────────┐
//!       │                                    │ window n_sessions
//!       ├──► RatioToAverageGenerator ("V") ──┼──────────────────► FeatureFrame
//!       │                                    │  | Constant | -1G 0G | -1V 0V |
//!       └──► ColumnSelect ("Close") ─────────┘
//! ```
//!
//! The first decision row is set by the generator that needs the most
//! history, so every block in the composed frame starts on the same date.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seshat_features::{FeatureComposer, GrowthGenerator, NamedGenerator, RatioToAverageGenerator};
//!
//! let composer = FeatureComposer::new(2)
//!     .with_generator(NamedGenerator::new("G", GrowthGenerator::new("Adj Close")))
//!     .with_generator(NamedGenerator::new("V", RatioToAverageGenerator::new(252)));
//! let output = composer.compose(&series)?;
//! ```

pub mod compare;
pub mod composer;
pub mod growth;
pub mod ratio;
pub mod rolling;
pub mod window;

pub use compare::compare;
pub use composer::{ColumnSelect, FeatureComposer, NamedGenerator, from_cols, from_funcs};
pub use growth::{GrowthGenerator, GrowthKind, growth, ln_growth, ret};
pub use ratio::{DEFAULT_RATIO_COLUMN, RATIO_TO_AVE_COLUMN, RatioToAverageGenerator, ratio_to_ave};
pub use rolling::{RollingMean, trailing_means};
pub use window::{featurize, offsets, window_values};
