pub mod band_scale;
pub mod chart_kind;
pub mod dataset;
pub mod projection;
pub mod scale_pair;
pub(crate) mod ticks;
pub mod types;
pub mod value_scale;

pub use band_scale::BandScale;
pub use chart_kind::{AreaChartSpec, BarChartSpec, ChartSpec, MeasureSpec, StackedBarChartSpec};
pub use dataset::{DataEntry, Dataset, MeasureValues};
pub use projection::{
    AreaVertex, BarRect, ChartGeometry, project_area, project_bars, project_chart,
};
pub use scale_pair::{Lane, ScalePair};
pub use ticks::DEFAULT_TICK_COUNT;
pub use types::{ChartId, Margins, Orientation, PlotArea, Viewport};
pub use value_scale::ValueScale;
