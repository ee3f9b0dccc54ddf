use serde::{Deserialize, Serialize};

use crate::core::{ChartId, Lane, Margins, Orientation, PlotArea, Viewport};

use super::CompositionStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub id: ChartId,
    #[serde(default)]
    pub kind: Option<String>,
    pub requires_space: bool,
    #[serde(default)]
    pub extent: Option<(f64, f64)>,
    /// `None` while the container size is unknown.
    #[serde(default)]
    pub lane: Option<Lane>,
}

/// Point-in-time read model of a composition, for consumers that poll
/// instead of subscribing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSnapshot {
    pub revision: u64,
    pub orientation: Orientation,
    pub band_scale_padding: f64,
    pub margins: Margins,
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub plot_area: Option<PlotArea>,
    pub categories: Vec<String>,
    pub value_extent: (f64, f64),
    pub value_domain: (f64, f64),
    #[serde(default)]
    pub bandwidth: Option<f64>,
    pub charts: Vec<ChartSnapshot>,
}

impl CompositionStore {
    #[must_use]
    pub fn snapshot(&self) -> CompositionSnapshot {
        let scales = self.scales().ok();
        let charts = self
            .registry()
            .iter()
            .map(|registration| ChartSnapshot {
                id: registration.id,
                kind: registration.descriptor.kind.clone(),
                requires_space: registration.requires_space(),
                extent: registration.extent,
                lane: scales
                    .as_ref()
                    .and_then(|scales| self.lane_in(registration.id, scales.bandwidth())),
            })
            .collect();

        CompositionSnapshot {
            revision: self.revision,
            orientation: self.orientation,
            band_scale_padding: self.band_scale_padding,
            margins: self.margins,
            viewport: self.viewport,
            plot_area: self.plot_area(),
            categories: self.data.categories().map(str::to_owned).collect(),
            value_extent: self.value_extent(),
            value_domain: scales
                .as_ref()
                .map_or_else(|| self.value_domain(), |scales| scales.value_scale.domain()),
            bandwidth: scales.as_ref().map(|scales| scales.bandwidth()),
            charts,
        }
    }

    fn lane_in(&self, id: ChartId, bandwidth: f64) -> Option<Lane> {
        super::allocate_lane(self.registry(), id, bandwidth).ok()
    }
}
