//! Seshat Aligner
//!
//! Pairs a feature frame with a label frame so that row `i` of both refers
//! to the same decision date.
//!
//! ## Trimming
//!
//! ```text
//!   series rows     0 ─────────────────────────────────────── len
//!   features            [skip_at_start ─────────────────────── len)
//!   labels          [0 ─────────────────────── len - skip_at_end)
//!   aligned             [skip_at_start ─────── len - skip_at_end)
//! ```
//!
//! Generators report only their own requirement; the aligner does all of the
//! trimming and checks that the two indices agree.

pub mod aligner;
pub mod config;

pub use aligner::{LabeledFeatures, labeled_features};
pub use config::{GrowthVolumeConfig, labeled_growth_volume};
