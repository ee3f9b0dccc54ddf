use serde::{Deserialize, Serialize};

use crate::core::{BandScale, Orientation, ValueScale};

/// Pixel sub-range of a band allocated to one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub size: f64,
    pub offset: f64,
}

impl Lane {
    #[must_use]
    pub const fn new(size: f64, offset: f64) -> Self {
        Self { size, offset }
    }

    /// End of the lane relative to the band start.
    #[must_use]
    pub fn end(self) -> f64 {
        self.offset + self.size
    }
}

/// Shared coordinate scales of one combination chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub orientation: Orientation,
    pub value_scale: ValueScale,
    pub band_scale: BandScale,
}

impl ScalePair {
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.band_scale.bandwidth()
    }
}
