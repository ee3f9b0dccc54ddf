use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{ChartId, Dataset, Margins, Orientation, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{CompositionEvent, CompositionObserver};

use super::chart_registry::next_chart_id;
use super::validation::{
    DEFAULT_BAND_SCALE_PADDING, validate_band_scale_padding, validate_extent, validate_margins,
};
use super::{ChartDescriptor, ChartRegistration, ChartRegistry, CompositionConfig};

/// Single source of truth for one combination chart.
///
/// Owns configuration, the dataset and chart registrations. Derived values
/// (scales, lanes, snapshots) are recomputed from this state on every read,
/// so there is nothing to invalidate after a mutation.
pub struct CompositionStore {
    pub(super) orientation: Orientation,
    pub(super) band_scale_padding: f64,
    pub(super) margins: Margins,
    pub(super) viewport: Option<Viewport>,
    pub(super) data: Dataset,
    pub(super) registrations: IndexMap<ChartId, ChartRegistration>,
    pub(super) observers: Vec<Box<dyn CompositionObserver>>,
    pub(super) revision: u64,
}

impl Default for CompositionStore {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            band_scale_padding: DEFAULT_BAND_SCALE_PADDING,
            margins: Margins::default(),
            viewport: None,
            data: Dataset::empty(),
            registrations: IndexMap::new(),
            observers: Vec::new(),
            revision: 0,
        }
    }
}

impl CompositionStore {
    pub fn new(orientation: Orientation, band_scale_padding: f64) -> ChartResult<Self> {
        Ok(Self {
            orientation,
            band_scale_padding: validate_band_scale_padding(band_scale_padding)?,
            ..Self::default()
        })
    }

    /// Creates a store from the layout part of a declarative config.
    ///
    /// Charts and axes in the config are mounted by the composition root,
    /// not by the store.
    pub fn from_config(config: &CompositionConfig) -> ChartResult<Self> {
        Ok(Self {
            margins: validate_margins(config.margins)?,
            ..Self::new(config.orientation, config.band_scale_padding)?
        })
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn band_scale_padding(&self) -> f64 {
        self.band_scale_padding
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Inner drawing area; `None` until the container size is known.
    #[must_use]
    pub fn plot_area(&self) -> Option<PlotArea> {
        self.viewport
            .and_then(|viewport| PlotArea::resolve(viewport, self.margins).ok())
    }

    /// Whether container dimensions are known and layout can be computed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.plot_area().is_some()
    }

    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    #[must_use]
    pub fn registry(&self) -> ChartRegistry<'_> {
        ChartRegistry::new(&self.registrations)
    }

    /// Monotonic counter bumped by every applied mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the dataset. Other state is left untouched.
    pub fn set_data(&mut self, data: Dataset) {
        debug!(
            previous_len = self.data.len(),
            categories_len = data.len(),
            "set composition data"
        );
        self.data = data;
        self.commit(CompositionEvent::DataChanged {
            categories_len: self.data.len(),
        });
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        debug!(%orientation, "set orientation");
        self.orientation = orientation;
        self.commit(CompositionEvent::OrientationChanged { orientation });
    }

    /// Sets the inter-category gap fraction; must lie in `[0.1, 0.8]`.
    pub fn set_band_scale_padding(&mut self, padding: f64) -> ChartResult<()> {
        let padding = validate_band_scale_padding(padding).inspect_err(|err| {
            warn!(error = %err, "rejected band scale padding");
        })?;
        if self.band_scale_padding == padding {
            return Ok(());
        }
        debug!(padding, "set band scale padding");
        self.band_scale_padding = padding;
        self.commit(CompositionEvent::PaddingChanged { padding });
        Ok(())
    }

    /// Sets the plot margins.
    ///
    /// Fails with [`ChartError::InvalidViewport`] when a known container size
    /// would leave no plot area; nothing changes in that case.
    pub fn set_margins(&mut self, margins: Margins) -> ChartResult<()> {
        let margins = validate_margins(margins)?;
        if let Some(viewport) = self.viewport {
            PlotArea::resolve(viewport, margins).inspect_err(|err| {
                warn!(error = %err, ?margins, "rejected margins for current container size");
            })?;
        }
        if self.margins == margins {
            return Ok(());
        }
        debug!(?margins, "set margins");
        self.margins = margins;
        self.commit(CompositionEvent::MarginsChanged { margins });
        Ok(())
    }

    /// Ready callback for the environment probe: records the container size.
    ///
    /// Fails when the container is too small to leave a plot area after
    /// margins; the previous size is kept in that case.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        PlotArea::resolve(viewport, self.margins).inspect_err(|err| {
            warn!(error = %err, "rejected container size");
        })?;
        if self.viewport == Some(viewport) {
            return Ok(());
        }
        debug!(width = viewport.width, height = viewport.height, "set viewport");
        self.viewport = Some(viewport);
        self.commit(CompositionEvent::ViewportChanged { viewport });
        Ok(())
    }

    /// Forgets the container size, e.g. when the drawing surface detaches.
    pub fn clear_viewport(&mut self) {
        if self.viewport.take().is_some() {
            debug!("cleared viewport");
            self.commit(CompositionEvent::ViewportCleared);
        }
    }

    /// Attaches a chart and returns its id.
    pub fn register_chart(&mut self, descriptor: ChartDescriptor) -> ChartId {
        let id = next_chart_id();
        let requires_space = descriptor.requires_space;
        debug!(
            %id,
            requires_space,
            kind = descriptor.kind.as_deref().unwrap_or("custom"),
            "register chart"
        );
        self.registrations.insert(
            id,
            ChartRegistration {
                id,
                descriptor,
                extent: None,
            },
        );
        self.commit(CompositionEvent::ChartRegistered { id, requires_space });
        id
    }

    /// Detaches a chart; later reads ignore it.
    pub fn unregister_chart(&mut self, id: ChartId) -> ChartResult<ChartRegistration> {
        let Some(registration) = self.registrations.shift_remove(&id) else {
            warn!(%id, "unregister of unknown chart");
            return Err(ChartError::UnknownChartId(id));
        };
        debug!(%id, remaining = self.registrations.len(), "unregister chart");
        self.commit(CompositionEvent::ChartUnregistered { id });
        Ok(registration)
    }

    /// Records the value extent a chart needs to be fully visible.
    pub fn report_extent(&mut self, id: ChartId, min: f64, max: f64) -> ChartResult<()> {
        let extent = validate_extent(min, max)?;
        let Some(registration) = self.registrations.get_mut(&id) else {
            warn!(%id, "extent reported by unknown chart");
            return Err(ChartError::UnknownChartId(id));
        };
        if registration.extent == Some(extent) {
            trace!(%id, min, max, "extent unchanged");
            return Ok(());
        }
        trace!(%id, min, max, "report extent");
        registration.extent = Some(extent);
        self.commit(CompositionEvent::ExtentReported { id, min, max });
        Ok(())
    }

    /// Drops a chart's reported extent, e.g. after its data emptied.
    pub fn clear_extent(&mut self, id: ChartId) -> ChartResult<()> {
        let registration = self
            .registrations
            .get_mut(&id)
            .ok_or(ChartError::UnknownChartId(id))?;
        if registration.extent.take().is_some() {
            trace!(%id, "clear extent");
            self.commit(CompositionEvent::ExtentCleared { id });
        }
        Ok(())
    }

    fn commit(&mut self, event: CompositionEvent) {
        self.revision += 1;
        self.emit_event(event);
    }
}
