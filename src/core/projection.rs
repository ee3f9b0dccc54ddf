use serde::{Deserialize, Serialize};

use crate::core::{ChartSpec, Dataset, Lane, ScalePair};
use crate::error::{ChartError, ChartResult};

/// Rectangle of one bar (or one stacked layer) in plot-area pixels.
///
/// `width` and `height` are never negative; negative values extend from the
/// zero baseline in the opposite direction instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub category: String,
    pub layer: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One sample of an area outline.
///
/// `band` is the band-axis coordinate, `baseline` and `value` are value-axis
/// coordinates of the zero line and the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub category: String,
    pub band: f64,
    pub baseline: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartGeometry {
    Bars(Vec<BarRect>),
    Area(Vec<AreaVertex>),
}

impl ChartGeometry {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bars(rects) => rects.len(),
            Self::Area(vertices) => vertices.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Projects a chart declaration into pixel geometry for its lane.
pub fn project_chart(
    spec: &ChartSpec,
    dataset: &Dataset,
    scales: &ScalePair,
    lane: Lane,
) -> ChartResult<ChartGeometry> {
    match spec {
        ChartSpec::Bar(_) | ChartSpec::StackedBar(_) => {
            project_bars(spec, dataset, scales, lane).map(ChartGeometry::Bars)
        }
        ChartSpec::Area(_) => project_area(spec, dataset, scales).map(ChartGeometry::Area),
    }
}

/// Bar rectangles for every category and layer of `spec`.
pub fn project_bars(
    spec: &ChartSpec,
    dataset: &Dataset,
    scales: &ScalePair,
    lane: Lane,
) -> ChartResult<Vec<BarRect>> {
    if !lane.size.is_finite() || !lane.offset.is_finite() || lane.size < 0.0 {
        return Err(ChartError::InvalidData(
            "lane size/offset must be finite and size >= 0".to_owned(),
        ));
    }

    let vertical = scales.orientation.is_vertical();
    let value_scale = scales.value_scale;
    let zero = value_scale.value_to_pixel(0.0)?;
    let mut rects = Vec::with_capacity(dataset.len());
    for (category, measures) in dataset.iter() {
        let band_start = band_position(scales, category)? + lane.offset;
        for (layer, value) in spec.entry_values(measures).into_iter().enumerate() {
            let value_px = value_scale.value_to_pixel(value)?;
            let length = (zero - value_px).abs();
            let (x, y, width, height) = if vertical {
                (band_start, zero.min(value_px), lane.size, length)
            } else {
                (zero.min(value_px), band_start, length, lane.size)
            };
            rects.push(BarRect {
                category: category.to_owned(),
                layer,
                value,
                x,
                y,
                width,
                height,
            });
        }
    }
    Ok(rects)
}

/// Area outline samples, one per category at the band start.
pub fn project_area(
    spec: &ChartSpec,
    dataset: &Dataset,
    scales: &ScalePair,
) -> ChartResult<Vec<AreaVertex>> {
    let value_scale = scales.value_scale;
    let baseline = value_scale.value_to_pixel(0.0)?;
    let mut vertices = Vec::with_capacity(dataset.len());
    for (category, measures) in dataset.iter() {
        let Some(value) = spec.entry_values(measures).first().copied() else {
            continue;
        };
        vertices.push(AreaVertex {
            category: category.to_owned(),
            band: band_position(scales, category)?,
            baseline,
            value: value_scale.value_to_pixel(value)?,
        });
    }
    Ok(vertices)
}

fn band_position(scales: &ScalePair, category: &str) -> ChartResult<f64> {
    scales.band_scale.position(category).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "category `{category}` is not in the band scale domain"
        ))
    })
}
