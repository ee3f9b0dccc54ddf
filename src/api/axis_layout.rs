use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TICK_COUNT, Margins, PlotArea, ScalePair};
use crate::error::{ChartError, ChartResult};

use super::{AxisSpec, CompositionStore, HorizontalPosition, VerticalPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    Value,
    Band,
}

/// Side of the axis line the tick labels are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// One labelled tick; `position` is measured along the axis in plot-area
/// pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

/// Resolved placement and ticks of one axis.
///
/// `origin` is the axis translation in container pixels, margins included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub kind: AxisKind,
    pub side: AxisSide,
    pub origin: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

/// Places `spec` around a plot area.
pub fn layout_axis(
    spec: AxisSpec,
    scales: &ScalePair,
    area: PlotArea,
    margins: Margins,
) -> ChartResult<AxisLayout> {
    let vertical = scales.orientation.is_vertical();
    let zero = scales.value_scale.value_to_pixel(0.0)?;

    let layout = match spec {
        AxisSpec::Value(placement) => {
            let (side, origin) = if vertical {
                match placement.horizontal_position {
                    HorizontalPosition::Right => {
                        (AxisSide::Right, (margins.left + area.width, margins.top))
                    }
                    _ => (AxisSide::Left, (margins.left, margins.top)),
                }
            } else {
                match placement.vertical_position {
                    VerticalPosition::Top => (AxisSide::Top, (margins.left, margins.top)),
                    _ => (AxisSide::Bottom, (margins.left, margins.top + area.height)),
                }
            };
            AxisLayout {
                kind: AxisKind::Value,
                side,
                origin,
                ticks: value_ticks(scales)?,
            }
        }
        AxisSpec::Band(placement) => {
            let (side, origin) = if vertical {
                let offset = match placement.vertical_position {
                    VerticalPosition::Top => 0.0,
                    VerticalPosition::Bottom => area.height,
                    VerticalPosition::Zero => zero,
                };
                let side = if placement.vertical_position == VerticalPosition::Top {
                    AxisSide::Top
                } else {
                    AxisSide::Bottom
                };
                (side, (margins.left, margins.top + offset))
            } else {
                let offset = match placement.horizontal_position {
                    HorizontalPosition::Left => 0.0,
                    HorizontalPosition::Right => area.width,
                    HorizontalPosition::Zero => zero,
                };
                let side = if placement.horizontal_position == HorizontalPosition::Right {
                    AxisSide::Right
                } else {
                    AxisSide::Left
                };
                (side, (margins.left + offset, margins.top))
            };
            AxisLayout {
                kind: AxisKind::Band,
                side,
                origin,
                ticks: band_ticks(scales),
            }
        }
    };
    Ok(layout)
}

fn value_ticks(scales: &ScalePair) -> ChartResult<Vec<AxisTick>> {
    scales
        .value_scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                label: format_tick_value(value),
                position: scales.value_scale.value_to_pixel(value)?,
            })
        })
        .collect()
}

fn band_ticks(scales: &ScalePair) -> Vec<AxisTick> {
    scales
        .band_scale
        .domain()
        .filter_map(|key| {
            scales.band_scale.center(key).map(|position| AxisTick {
                label: key.to_owned(),
                position,
            })
        })
        .collect()
}

fn format_tick_value(value: f64) -> String {
    // Normalizes negative zero so the baseline reads `0`.
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

impl CompositionStore {
    /// Resolves the layout of `spec` against the current scales.
    pub fn axis_layout(&self, spec: AxisSpec) -> ChartResult<AxisLayout> {
        let scales = self.scales()?;
        let area = self.plot_area().ok_or(ChartError::ViewportUnavailable)?;
        layout_axis(spec, &scales, area, self.margins)
    }
}
