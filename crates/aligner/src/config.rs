//! Growth and relative-volume preset

use crate::aligner::{LabeledFeatures, labeled_features};
use seshat_core::{ADJ_CLOSE, Result, TimeSeries, VOLUME};
use seshat_features::{FeatureComposer, GrowthGenerator, NamedGenerator, RatioToAverageGenerator};
use seshat_ports::LabelGenerator;
use serde::{Deserialize, Serialize};

/// Display name of the growth block
pub const GROWTH_BLOCK: &str = "G";
/// Display name of the relative-volume block
pub const VOLUME_BLOCK: &str = "V";

/// Configuration for the growth + relative-volume feature set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthVolumeConfig {
    /// Sessions of history in each block
    pub n_sessions: usize,
    /// Sessions in the trailing volume average
    pub averaging_interval: usize,
    pub price_column: String,
    pub volume_column: String,
    /// Prepend the bias column
    pub constant_feature: bool,
}

impl Default for GrowthVolumeConfig {
    fn default() -> Self {
        Self {
            n_sessions: 1,
            averaging_interval: 252, // one trading year
            price_column: ADJ_CLOSE.to_string(),
            volume_column: VOLUME.to_string(),
            constant_feature: true,
        }
    }
}

impl GrowthVolumeConfig {
    pub fn with_sessions(mut self, n_sessions: usize) -> Self {
        self.n_sessions = n_sessions;
        self
    }

    pub fn with_averaging_interval(mut self, averaging_interval: usize) -> Self {
        self.averaging_interval = averaging_interval;
        self
    }

    pub fn with_price_column(mut self, price_column: impl Into<String>) -> Self {
        self.price_column = price_column.into();
        self
    }

    pub fn with_volume_column(mut self, volume_column: impl Into<String>) -> Self {
        self.volume_column = volume_column.into();
        self
    }

    pub fn with_constant_feature(mut self, constant_feature: bool) -> Self {
        self.constant_feature = constant_feature;
        self
    }

    /// Composer with a 1-session growth block `G` and a relative-volume block `V`
    pub fn composer(&self) -> FeatureComposer {
        FeatureComposer::new(self.n_sessions)
            .with_constant_feature(self.constant_feature)
            .with_generator(NamedGenerator::new(
                GROWTH_BLOCK,
                GrowthGenerator::new(self.price_column.as_str()),
            ))
            .with_generator(NamedGenerator::new(
                VOLUME_BLOCK,
                RatioToAverageGenerator::new(self.averaging_interval)
                    .with_selection(self.volume_column.as_str()),
            ))
    }
}

/// Growth and relative-volume features aligned with `label_fn`
pub fn labeled_growth_volume<L>(
    series: &TimeSeries,
    config: &GrowthVolumeConfig,
    label_fn: &L,
) -> Result<LabeledFeatures>
where
    L: LabelGenerator + ?Sized,
{
    labeled_features(series, &config.composer(), label_fn)
}
