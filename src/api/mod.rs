//! Stateful composition layer.
//!
//! [`CompositionStore`] holds the state of one chart; scales, lanes, axis
//! layouts and snapshots are derived from it on read. [`CombinationChart`]
//! mounts declarative chart specs against a store and
//! [`CompositionManager`] keeps several charts under external ids.

mod axis_layout;
mod chart_registry;
mod combination_chart;
mod composition_config;
mod composition_manager;
mod composition_store;
mod json_contract;
mod layout_allocator;
mod mounted_chart;
mod observer_registry;
mod scale_engine;
mod snapshot;
mod validation;

pub use axis_layout::{AxisKind, AxisLayout, AxisSide, AxisTick, layout_axis};
pub use chart_registry::{
    ChartDescriptor, ChartRegistration, ChartRegistry, DEFAULT_VALUE_MAX,
};
pub use combination_chart::{ChartFrame, CombinationChart};
pub use composition_config::{
    AxisPlacement, AxisSpec, CompositionBuilder, CompositionConfig, HorizontalPosition,
    VerticalPosition,
};
pub use composition_manager::CompositionManager;
pub use composition_store::CompositionStore;
pub use json_contract::{COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1, CompositionSnapshotJsonContractV1};
pub use layout_allocator::allocate_lane;
pub use mounted_chart::MountedChart;
pub use scale_engine::derive_scales;
pub use snapshot::{ChartSnapshot, CompositionSnapshot};
pub use validation::{
    DEFAULT_BAND_SCALE_PADDING, MAX_BAND_SCALE_PADDING, MIN_BAND_SCALE_PADDING,
};
