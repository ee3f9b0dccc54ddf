//! chart-compose: combination-chart composition engine.
//!
//! Child charts (bars, stacked bars, areas) register with a shared
//! [`CompositionStore`], report the value extent they need, and read back a
//! common band/value scale pair plus the lane they are allowed to draw in.
//! Drawing itself is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{
    CombinationChart, CompositionBuilder, CompositionConfig, CompositionManager, CompositionStore,
};
pub use error::{ChartError, ChartResult};
