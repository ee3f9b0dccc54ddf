use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Dataset, MeasureValues};
use crate::error::{ChartError, ChartResult};

/// Bar chart drawing one measure per category in its own lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub measure: String,
    pub color: String,
}

/// One layer of a stacked bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub name: String,
    pub color: String,
}

/// Stacked bar chart; layers are drawn in one shared lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedBarChartSpec {
    pub measures: Vec<MeasureSpec>,
}

/// Area chart overlaid on the full band width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaChartSpec {
    pub measure: String,
    pub color: String,
}

/// Declarative child chart of a combination chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum ChartSpec {
    Bar(BarChartSpec),
    StackedBar(StackedBarChartSpec),
    Area(AreaChartSpec),
}

impl ChartSpec {
    #[must_use]
    pub fn bar(measure: impl Into<String>, color: impl Into<String>) -> Self {
        Self::Bar(BarChartSpec {
            measure: measure.into(),
            color: color.into(),
        })
    }

    #[must_use]
    pub fn stacked_bar<I, N, C>(measures: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self::StackedBar(StackedBarChartSpec {
            measures: measures
                .into_iter()
                .map(|(name, color)| MeasureSpec {
                    name: name.into(),
                    color: color.into(),
                })
                .collect(),
        })
    }

    #[must_use]
    pub fn area(measure: impl Into<String>, color: impl Into<String>) -> Self {
        Self::Area(AreaChartSpec {
            measure: measure.into(),
            color: color.into(),
        })
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::StackedBar(_) => "stackedbar",
            Self::Area(_) => "area",
        }
    }

    /// Whether the chart needs an exclusive lane inside each band.
    #[must_use]
    pub const fn requires_space(&self) -> bool {
        match self {
            Self::Bar(_) | Self::StackedBar(_) => true,
            Self::Area(_) => false,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Bar(spec) => validate_measure_name(&spec.measure),
            Self::Area(spec) => validate_measure_name(&spec.measure),
            Self::StackedBar(spec) => {
                if spec.measures.is_empty() {
                    return Err(ChartError::InvalidData(
                        "stacked bar chart needs at least one measure".to_owned(),
                    ));
                }
                spec.measures
                    .iter()
                    .try_for_each(|measure| validate_measure_name(&measure.name))
            }
        }
    }

    /// Values this chart plots for one category, in layer order.
    #[must_use]
    pub fn entry_values(&self, measures: &MeasureValues) -> SmallVec<[f64; 4]> {
        match self {
            Self::Bar(spec) => smallvec::smallvec![measures.value_or_zero(&spec.measure)],
            Self::Area(spec) => smallvec::smallvec![measures.value_or_zero(&spec.measure)],
            Self::StackedBar(spec) => (0..spec.measures.len())
                .map(|layer| stacked_value(spec, measures, layer))
                .collect(),
        }
    }

    /// All values this chart plots across the dataset.
    #[must_use]
    pub fn values(&self, dataset: &Dataset) -> Vec<f64> {
        dataset
            .iter()
            .flat_map(|(_, measures)| self.entry_values(measures))
            .collect()
    }

    /// `(min, max)` over [`Self::values`]; `None` for an empty dataset.
    #[must_use]
    pub fn extent(&self, dataset: &Dataset) -> Option<(f64, f64)> {
        self.values(dataset)
            .into_iter()
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}

/// Height of stacked layer `layer`: the sum of that layer and every layer
/// after it, so layer 0 spans the whole stack and is drawn underneath.
///
/// The sum saturates at `f64::MIN`/`f64::MAX`, so finite measures always
/// stack to a finite height.
#[must_use]
pub fn stacked_value(spec: &StackedBarChartSpec, measures: &MeasureValues, layer: usize) -> f64 {
    spec.measures
        .iter()
        .skip(layer)
        .map(|measure| measures.value_or_zero(&measure.name))
        .fold(0.0, |total, value| (total + value).clamp(f64::MIN, f64::MAX))
}

fn validate_measure_name(name: &str) -> ChartResult<()> {
    if name.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "chart measure name must not be empty".to_owned(),
        ));
    }
    Ok(())
}
