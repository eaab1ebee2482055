//! Seshat Core Domain
//!
//! Pure data types for the Seshat feature/label engine: session data,
//! dated frames, alignment bookkeeping and the error taxonomy.
//! This crate contains no I/O and is 100% unit testable.

pub mod alignment;
pub mod error;
pub mod frame;
pub mod series;

// Re-export commonly used types at crate root
pub use alignment::AlignmentSpec;
pub use error::{Error, Result};
pub use frame::{CONSTANT_COLUMN, FeatureFrame, Frame, LabelFrame, has_na};
pub use series::{ADJ_CLOSE, CLOSE, HIGH, LOW, OPEN, Session, TimeSeries, VOLUME};
