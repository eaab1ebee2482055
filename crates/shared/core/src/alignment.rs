use serde::{Deserialize, Serialize};

/// Leading/trailing rows a generator cannot produce, or is asked to omit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentSpec {
    #[serde(default)]
    pub skip_at_start: usize,
    #[serde(default)]
    pub skip_at_end: usize,
}

impl AlignmentSpec {
    pub const NONE: AlignmentSpec = AlignmentSpec {
        skip_at_start: 0,
        skip_at_end: 0,
    };

    pub fn new(skip_at_start: usize, skip_at_end: usize) -> Self {
        Self {
            skip_at_start,
            skip_at_end,
        }
    }

    /// Skip only leading rows
    pub fn start(skip_at_start: usize) -> Self {
        Self::new(skip_at_start, 0)
    }

    /// Skip only trailing rows
    pub fn end(skip_at_end: usize) -> Self {
        Self::new(0, skip_at_end)
    }

    /// Total rows skipped at both ends
    #[inline]
    pub fn total(&self) -> usize {
        self.skip_at_start + self.skip_at_end
    }
}
