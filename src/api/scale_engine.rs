use crate::core::ticks::{self, DEFAULT_TICK_COUNT};
use crate::core::{BandScale, Dataset, Orientation, PlotArea, ScalePair, ValueScale};
use crate::error::{ChartError, ChartResult};

use super::CompositionStore;

/// Derives the shared scale pair from composition state.
///
/// The value scale covers `extent` niced outward and runs bottom-to-top for
/// vertical charts (domain minimum at the larger pixel) and left-to-right for
/// horizontal ones. The band scale follows dataset order.
pub fn derive_scales(
    orientation: Orientation,
    band_scale_padding: f64,
    area: PlotArea,
    data: &Dataset,
    extent: (f64, f64),
) -> ChartResult<ScalePair> {
    let value_extent = orientation.value_extent(area);
    let value_range = if orientation.is_vertical() {
        (value_extent, 0.0)
    } else {
        (0.0, value_extent)
    };
    let value_scale = ValueScale::niced(extent, value_range)?;
    let band_scale = BandScale::new(
        data.categories(),
        (0.0, orientation.band_extent(area)),
        band_scale_padding,
    )?;

    Ok(ScalePair {
        orientation,
        value_scale,
        band_scale,
    })
}

impl CompositionStore {
    /// Aggregate `(min, max)` reported by registered charts, zero included.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        self.registry().aggregate_extent()
    }

    /// Niced value domain; independent of the container size.
    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        let (min, max) = self.value_extent();
        ticks::nice_domain(min, max, DEFAULT_TICK_COUNT)
    }

    /// Current scale pair.
    ///
    /// Fails with [`ChartError::ViewportUnavailable`] until the container
    /// size has been delivered through [`CompositionStore::set_viewport`].
    pub fn scales(&self) -> ChartResult<ScalePair> {
        let area = self.plot_area().ok_or(ChartError::ViewportUnavailable)?;
        derive_scales(
            self.orientation,
            self.band_scale_padding,
            area,
            &self.data,
            self.value_extent(),
        )
    }

    pub fn value_scale(&self) -> ChartResult<ValueScale> {
        self.scales().map(|scales| scales.value_scale)
    }

    pub fn band_scale(&self) -> ChartResult<BandScale> {
        self.scales().map(|scales| scales.band_scale)
    }
}
