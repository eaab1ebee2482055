//! Seshat Ports
//!
//! Generator traits for the Seshat feature/label engine.
//! These define the boundaries between the aligner and the pluggable
//! feature and label computations.

mod column;
mod features;
mod labels;

pub use column::ColumnGenerator;
pub use features::{FeatureGenerator, FeatureOutput};
pub use labels::{LabelGenerator, LabelOutput};

// Re-export the error taxonomy for convenience
pub use seshat_core::{Error, Result};
