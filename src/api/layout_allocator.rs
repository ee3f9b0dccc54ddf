use crate::core::{ChartId, Lane};
use crate::error::{ChartError, ChartResult};

use super::{ChartRegistry, CompositionStore};

/// Lane of `id` inside a band of `bandwidth` pixels.
///
/// Overlay charts span the whole band. Space-requiring charts split the band
/// evenly and are placed side by side in registration order, so the result
/// depends only on the current registry contents.
pub fn allocate_lane(registry: ChartRegistry<'_>, id: ChartId, bandwidth: f64) -> ChartResult<Lane> {
    let registration = registry.get(id).ok_or(ChartError::UnknownChartId(id))?;
    if !registration.requires_space() {
        return Ok(Lane::new(bandwidth, 0.0));
    }

    let space_count = registry.space_requiring_count();
    let rank = registry
        .space_rank(id)
        .ok_or(ChartError::UnknownChartId(id))?;
    let size = bandwidth / space_count as f64;
    Ok(Lane::new(size, size * rank as f64))
}

impl CompositionStore {
    /// Lane assigned to a registered chart.
    ///
    /// Unknown ids fail with [`ChartError::UnknownChartId`] even before the
    /// container size is known.
    pub fn lane_for(&self, id: ChartId) -> ChartResult<Lane> {
        if !self.registrations.contains_key(&id) {
            return Err(ChartError::UnknownChartId(id));
        }
        let bandwidth = self.scales()?.bandwidth();
        allocate_lane(self.registry(), id, bandwidth)
    }

    /// Lanes of every registered chart, in registration order.
    pub fn lanes(&self) -> ChartResult<Vec<(ChartId, Lane)>> {
        let bandwidth = self.scales()?.bandwidth();
        let registry = self.registry();
        registry
            .ordered_ids()
            .into_iter()
            .map(|id| allocate_lane(registry, id, bandwidth).map(|lane| (id, lane)))
            .collect()
    }
}
