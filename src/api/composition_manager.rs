use indexmap::IndexMap;
use tracing::debug;

use crate::error::ChartResult;

use super::{CombinationChart, CompositionBuilder, CompositionConfig};

/// Registry of combination charts keyed by an external id.
///
/// Owned explicitly by the host's composition root: create it at startup,
/// drop it at teardown. Entries keep insertion order.
#[derive(Default)]
pub struct CompositionManager {
    charts: IndexMap<String, CombinationChart>,
}

impl CompositionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> CompositionBuilder {
        CompositionBuilder::default()
    }

    /// Creates the chart for `chart_id`, or reconfigures the existing one.
    ///
    /// Reconfiguring keeps the chart's store, so data loaded earlier
    /// survives a layout change.
    pub fn configure(
        &mut self,
        chart_id: impl Into<String>,
        config: CompositionConfig,
    ) -> ChartResult<&mut CombinationChart> {
        let chart_id = chart_id.into();
        match self.charts.entry(chart_id) {
            indexmap::map::Entry::Occupied(entry) => {
                debug!(chart_id = %entry.key(), "reconfigure managed chart");
                let chart = entry.into_mut();
                chart.reconfigure(config)?;
                Ok(chart)
            }
            indexmap::map::Entry::Vacant(entry) => {
                debug!(chart_id = %entry.key(), "create managed chart");
                let chart = CombinationChart::new(config)?;
                Ok(entry.insert(chart))
            }
        }
    }

    /// Drops the chart for `chart_id`, returning it if present.
    pub fn remove(&mut self, chart_id: &str) -> Option<CombinationChart> {
        let removed = self.charts.shift_remove(chart_id);
        if removed.is_some() {
            debug!(chart_id, "removed managed chart");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, chart_id: &str) -> Option<&CombinationChart> {
        self.charts.get(chart_id)
    }

    pub fn get_mut(&mut self, chart_id: &str) -> Option<&mut CombinationChart> {
        self.charts.get_mut(chart_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
