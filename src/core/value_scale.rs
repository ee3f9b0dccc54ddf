use serde::{Deserialize, Serialize};

use crate::core::ticks::{self, DEFAULT_TICK_COUNT};
use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a numeric domain to a pixel range.
///
/// The range may be reversed (`range_start > range_end`), which is how the
/// vertical value axis puts the domain minimum at the bottom of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl ValueScale {
    /// Creates a scale with the exact domain given.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start > domain_end {
            return Err(ChartError::InvalidData(
                "value scale domain must be finite and ordered".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "value scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Creates a scale whose domain is extended outward to round bounds.
    pub fn niced(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::niced_with_count(domain, range, DEFAULT_TICK_COUNT)
    }

    pub fn niced_with_count(
        domain: (f64, f64),
        range: (f64, f64),
        tick_count: usize,
    ) -> ChartResult<Self> {
        let scale = Self::new(domain, range)?;
        let (start, end) = ticks::nice_domain(scale.domain_start, scale.domain_end, tick_count);
        Self::new((start, end), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.domain_start..=self.domain_end).contains(&value)
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// Values outside the domain extrapolate linearly. A zero-span domain maps
    /// everything to the middle of the range.
    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok((self.range_start + self.range_end) * 0.5);
        }
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Pixel coordinate of the zero baseline.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.value_to_pixel(0.0).unwrap_or(self.range_start)
    }

    /// Round tick values inside the domain, roughly `count` intervals apart.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain_start, self.domain_end, count)
    }
}
