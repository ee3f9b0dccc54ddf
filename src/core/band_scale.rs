use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Discrete positional scale over ordered category keys.
///
/// With `n` categories over a pixel extent `E` and padding `p`:
/// - `step = E / n`
/// - `bandwidth = step * (1 - p)`
/// - band `i` starts at `range_start + step * (i + p / 2)`
///
/// Each band is centered in its step, so half a padding unit sits on both
/// outer edges and a full padding unit between neighbouring bands.
/// An empty domain yields a degenerate scale with zero step and bandwidth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<I, S>(domain: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() || range_end < range_start {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and ordered".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidPadding(padding));
        }

        let domain: IndexSet<String> = domain.into_iter().map(Into::into).collect();
        let (step, bandwidth) = if domain.is_empty() {
            (0.0, 0.0)
        } else {
            let step = (range_end - range_start) / domain.len() as f64;
            (step, step * (1.0 - padding))
        };

        Ok(Self {
            domain,
            range_start,
            range_end,
            padding,
            step,
            bandwidth,
        })
    }

    /// Category keys in domain order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.domain.get_index_of(key)
    }

    /// Start pixel of the band for `index`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if index >= self.domain.len() {
            return None;
        }
        Some(self.range_start + self.step * (index as f64 + self.padding * 0.5))
    }

    /// Start pixel of the band for `key`; `None` when the key is not in the domain.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        self.index_of(key).and_then(|index| self.position_at(index))
    }

    /// Center pixel of the band for `key`.
    #[must_use]
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|start| start + self.bandwidth * 0.5)
    }
}
