use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    ChartGeometry, ChartId, ChartSpec, Dataset, Lane, PlotArea, Viewport, project_chart,
};
use crate::error::ChartResult;
use crate::extensions::CompositionObserver;

use super::{
    AxisLayout, AxisSpec, CompositionConfig, CompositionSnapshot, CompositionStore, MountedChart,
};

/// Everything a renderer needs to draw one child chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub id: ChartId,
    pub spec: ChartSpec,
    pub lane: Lane,
    pub geometry: ChartGeometry,
}

/// Composition root of a single combination chart.
///
/// Owns the store, the charts mounted from the config and the axis specs.
/// The store lives as long as this value and is never shared with another
/// chart instance.
pub struct CombinationChart {
    store: CompositionStore,
    charts: Vec<MountedChart>,
    axes: Vec<AxisSpec>,
}

impl CombinationChart {
    pub fn new(config: CompositionConfig) -> ChartResult<Self> {
        config.validate()?;
        let mut store = CompositionStore::from_config(&config)?;
        let charts = mount_all(&mut store, config.charts)?;
        debug!(
            charts = charts.len(),
            axes = config.axes.len(),
            "created combination chart"
        );
        Ok(Self {
            store,
            charts,
            axes: config.axes,
        })
    }

    #[must_use]
    pub fn store(&self) -> &CompositionStore {
        &self.store
    }

    #[must_use]
    pub fn charts(&self) -> &[MountedChart] {
        &self.charts
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisSpec] {
        &self.axes
    }

    /// Current declarative config, including runtime changes.
    #[must_use]
    pub fn config(&self) -> CompositionConfig {
        CompositionConfig {
            orientation: self.store.orientation(),
            band_scale_padding: self.store.band_scale_padding(),
            margins: self.store.margins(),
            axes: self.axes.clone(),
            charts: self.charts.iter().map(|chart| chart.spec().clone()).collect(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn CompositionObserver>) -> ChartResult<()> {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, observer_id: &str) -> bool {
        self.store.unsubscribe(observer_id)
    }

    /// Replaces the dataset and re-reports every chart's extent.
    ///
    /// Every extent is computed against the new data first; on error neither
    /// the data nor any reported extent changes.
    pub fn set_data(&mut self, data: Dataset) -> ChartResult<()> {
        let extents = self
            .charts
            .iter()
            .map(|chart| MountedChart::extent_for(chart.spec(), &data))
            .collect::<ChartResult<Vec<_>>>()?;
        self.store.set_data(data);
        for (chart, extent) in self.charts.iter().zip(extents) {
            chart.apply_extent(&mut self.store, extent)?;
        }
        Ok(())
    }

    /// Ready callback of the container probe.
    pub fn set_container_size(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.store.set_viewport(viewport)
    }

    /// Applies a new config while keeping the store and its data.
    ///
    /// Existing charts are unmounted and the new ones mounted in config
    /// order. The config is checked against the current container size and
    /// data before anything is touched, so nothing changes when it is
    /// rejected.
    pub fn reconfigure(&mut self, config: CompositionConfig) -> ChartResult<()> {
        config.validate()?;
        if let Some(viewport) = self.store.viewport() {
            PlotArea::resolve(viewport, config.margins)?;
        }
        for spec in &config.charts {
            MountedChart::extent_for(spec, self.store.data())?;
        }

        self.store.set_orientation(config.orientation);
        self.store.set_band_scale_padding(config.band_scale_padding)?;
        self.store.set_margins(config.margins)?;
        for chart in self.charts.drain(..) {
            chart.unmount(&mut self.store)?;
        }
        self.charts = mount_all(&mut self.store, config.charts)?;
        self.axes = config.axes;
        debug!(
            charts = self.charts.len(),
            axes = self.axes.len(),
            revision = self.store.revision(),
            "reconfigured combination chart"
        );
        Ok(())
    }

    /// Lane and geometry of every chart, in mount order.
    pub fn chart_frames(&self) -> ChartResult<Vec<ChartFrame>> {
        let scales = self.store.scales()?;
        self.charts
            .iter()
            .map(|chart| {
                let lane = chart.lane(&self.store)?;
                Ok(ChartFrame {
                    id: chart.id(),
                    spec: chart.spec().clone(),
                    lane,
                    geometry: project_chart(chart.spec(), self.store.data(), &scales, lane)?,
                })
            })
            .collect()
    }

    pub fn axis_layouts(&self) -> ChartResult<Vec<AxisLayout>> {
        self.axes
            .iter()
            .map(|axis| self.store.axis_layout(*axis))
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> CompositionSnapshot {
        self.store.snapshot()
    }
}

/// Mounts `specs` in order; on failure the charts mounted so far are
/// unmounted again.
fn mount_all(store: &mut CompositionStore, specs: Vec<ChartSpec>) -> ChartResult<Vec<MountedChart>> {
    let mut mounted = Vec::with_capacity(specs.len());
    for spec in specs {
        match MountedChart::mount(store, spec) {
            Ok(chart) => mounted.push(chart),
            Err(err) => {
                for chart in mounted.into_iter().rev() {
                    let id = chart.id();
                    if let Err(rollback) = chart.unmount(store) {
                        warn!(%id, error = %rollback, "failed to roll back mounted chart");
                    }
                }
                return Err(err);
            }
        }
    }
    Ok(mounted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataEntry, MeasureValues};

    #[test]
    fn failed_batch_leaves_no_registrations() {
        let mut store = CompositionStore::default();
        store.set_data(
            Dataset::from_entries([DataEntry::new("A", MeasureValues::new().with("x", 1.0))])
                .expect("dataset"),
        );

        let result = mount_all(
            &mut store,
            vec![
                ChartSpec::bar("x", "#000"),
                ChartSpec::area("x", "#111"),
                ChartSpec::bar("", "#222"),
            ],
        );

        assert!(result.is_err());
        assert!(store.registry().is_empty());
    }
}
