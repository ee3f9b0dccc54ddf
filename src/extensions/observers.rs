use serde::{Deserialize, Serialize};

use crate::core::{ChartId, Margins, Orientation, Viewport};

/// Read-only state passed to observers alongside each event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionContext {
    pub revision: u64,
    pub orientation: Orientation,
    pub band_scale_padding: f64,
    pub viewport: Option<Viewport>,
    pub categories_len: usize,
    pub registered_charts: usize,
    pub value_domain: (f64, f64),
}

/// Mutation notifications emitted by a composition store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CompositionEvent {
    DataChanged { categories_len: usize },
    OrientationChanged { orientation: Orientation },
    PaddingChanged { padding: f64 },
    MarginsChanged { margins: Margins },
    ViewportChanged { viewport: Viewport },
    ViewportCleared,
    ChartRegistered { id: ChartId, requires_space: bool },
    ChartUnregistered { id: ChartId },
    ExtentReported { id: ChartId, min: f64, max: f64 },
    ExtentCleared { id: ChartId },
}

/// Subscriber interface replacing implicit reactive dependency tracking.
///
/// Observers are notified after a mutation is fully applied and cannot reach
/// back into the store, so they never see a half-updated registry.
pub trait CompositionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CompositionEvent, context: CompositionContext);
}
