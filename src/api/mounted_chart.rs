use tracing::{debug, warn};

use crate::core::{ChartGeometry, ChartId, ChartSpec, Dataset, Lane, project_chart};
use crate::error::ChartResult;

use super::validation::validate_extent;
use super::{ChartDescriptor, CompositionStore};

/// A chart declaration attached to a store.
///
/// Implements the renderer side of the composition contract: register on
/// mount, report the extent after every data change, unregister on unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedChart {
    id: ChartId,
    spec: ChartSpec,
}

impl MountedChart {
    /// Registers `spec` and reports its extent for the store's data.
    ///
    /// The extent is checked before registering, and the registration is
    /// rolled back if reporting still fails, so a failed mount leaves no
    /// registration behind.
    pub fn mount(store: &mut CompositionStore, spec: ChartSpec) -> ChartResult<Self> {
        spec.validate()?;
        let extent = Self::extent_for(&spec, store.data())?;
        let id = store.register_chart(ChartDescriptor::for_spec(&spec));
        let chart = Self { id, spec };
        if let Err(err) = chart.apply_extent(store, extent) {
            warn!(id = %chart.id, error = %err, "mount failed, rolling back registration");
            store.unregister_chart(chart.id)?;
            return Err(err);
        }
        debug!(id = %chart.id, kind = chart.spec.kind_name(), "mounted chart");
        Ok(chart)
    }

    /// Validated extent `spec` would report for `data`.
    pub fn extent_for(spec: &ChartSpec, data: &Dataset) -> ChartResult<Option<(f64, f64)>> {
        spec.extent(data)
            .map(|(min, max)| validate_extent(min, max))
            .transpose()
    }

    #[must_use]
    pub fn id(&self) -> ChartId {
        self.id
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Re-reports this chart's extent for the store's current data.
    pub fn refresh(&self, store: &mut CompositionStore) -> ChartResult<()> {
        let extent = Self::extent_for(&self.spec, store.data())?;
        self.apply_extent(store, extent)
    }

    pub(super) fn apply_extent(
        &self,
        store: &mut CompositionStore,
        extent: Option<(f64, f64)>,
    ) -> ChartResult<()> {
        match extent {
            Some((min, max)) => store.report_extent(self.id, min, max),
            None => store.clear_extent(self.id),
        }
    }

    pub fn lane(&self, store: &CompositionStore) -> ChartResult<Lane> {
        store.lane_for(self.id)
    }

    /// Pixel geometry of this chart in its lane.
    pub fn geometry(&self, store: &CompositionStore) -> ChartResult<ChartGeometry> {
        let scales = store.scales()?;
        let lane = store.lane_for(self.id)?;
        project_chart(&self.spec, store.data(), &scales, lane)
    }

    pub fn unmount(self, store: &mut CompositionStore) -> ChartResult<()> {
        store.unregister_chart(self.id)?;
        debug!(id = %self.id, kind = self.spec.kind_name(), "unmounted chart");
        Ok(())
    }
}
