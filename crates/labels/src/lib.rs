//! Seshat Labels
//!
//! Label generators: the value to be predicted on each decision date.
//!
//! A label looks forward from its decision date, so a generator cannot label
//! the last few sessions of a series. It reports how many with
//! `skip_at_end`; the aligner drops the same number of trailing feature rows.

pub mod growth;

pub use growth::{GrowthLabel, growth_labels};
