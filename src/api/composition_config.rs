use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ChartSpec, Margins, Orientation};
use crate::error::{ChartError, ChartResult};

use super::validation::{DEFAULT_BAND_SCALE_PADDING, validate_band_scale_padding};

/// Horizontal anchor of an axis. `Zero` follows the value-scale zero line
/// and is only meaningful for band axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPosition {
    #[default]
    Left,
    Right,
    Zero,
}

/// Vertical anchor of an axis. `Zero` follows the value-scale zero line
/// and is only meaningful for band axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    Top,
    #[default]
    Bottom,
    Zero,
}

/// Placement of an axis. Only the component matching the current
/// orientation is used; the other is kept so orientation can flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AxisPlacement {
    #[serde(default)]
    pub horizontal_position: HorizontalPosition,
    #[serde(default)]
    pub vertical_position: VerticalPosition,
}

impl AxisPlacement {
    #[must_use]
    pub const fn new(
        horizontal_position: HorizontalPosition,
        vertical_position: VerticalPosition,
    ) -> Self {
        Self {
            horizontal_position,
            vertical_position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AxisSpec {
    Value(AxisPlacement),
    Band(AxisPlacement),
}

impl AxisSpec {
    pub fn validate(self) -> ChartResult<()> {
        if let Self::Value(placement) = self {
            if placement.horizontal_position == HorizontalPosition::Zero
                || placement.vertical_position == VerticalPosition::Zero
            {
                return Err(ChartError::InvalidData(
                    "value axis cannot be anchored at the zero line".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Declarative description of one combination chart.
///
/// This is the typed document an external configuration tool produces; it is
/// consumed by [`super::CombinationChart`] to set up the store and mount the
/// child charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_band_scale_padding")]
    pub band_scale_padding: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub axes: Vec<AxisSpec>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            band_scale_padding: default_band_scale_padding(),
            margins: Margins::default(),
            axes: Vec::new(),
            charts: Vec::new(),
        }
    }
}

impl CompositionConfig {
    #[must_use]
    pub fn builder() -> CompositionBuilder {
        CompositionBuilder::default()
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_band_scale_padding(self.band_scale_padding)?;
        self.margins.validate()?;
        for axis in &self.axes {
            axis.validate()?;
        }
        for chart in &self.charts {
            chart.validate()?;
        }
        Ok(())
    }

    /// Parses and validates a JSON config document.
    ///
    /// An unknown orientation string surfaces as
    /// [`ChartError::InvalidOrientation`] rather than a generic parse error.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        if let Some(orientation) = raw.get("orientation") {
            let name = orientation.as_str().ok_or_else(|| {
                ChartError::InvalidOrientation(orientation.to_string())
            })?;
            Orientation::from_str(name)?;
        }
        let config: Self = serde_json::from_value(raw)
            .map_err(|e| ChartError::InvalidData(format!("invalid config document: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }
}

fn default_band_scale_padding() -> f64 {
    DEFAULT_BAND_SCALE_PADDING
}

/// Fluent builder producing a validated [`CompositionConfig`].
#[derive(Debug, Clone, Default)]
pub struct CompositionBuilder {
    config: CompositionConfig,
}

impl CompositionBuilder {
    #[must_use]
    pub fn add_chart(mut self, chart: ChartSpec) -> Self {
        self.config.charts.push(chart);
        self
    }

    #[must_use]
    pub fn add_axis(mut self, axis: AxisSpec) -> Self {
        self.config.axes.push(axis);
        self
    }

    #[must_use]
    pub fn add_value_axis(self, placement: AxisPlacement) -> Self {
        self.add_axis(AxisSpec::Value(placement))
    }

    #[must_use]
    pub fn add_band_axis(self, placement: AxisPlacement) -> Self {
        self.add_axis(AxisSpec::Band(placement))
    }

    #[must_use]
    pub fn set_orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    #[must_use]
    pub fn set_band_scale_padding(mut self, padding: f64) -> Self {
        self.config.band_scale_padding = padding;
        self
    }

    #[must_use]
    pub fn set_margins(mut self, margins: Margins) -> Self {
        self.config.margins = margins;
        self
    }

    pub fn build(self) -> ChartResult<CompositionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
