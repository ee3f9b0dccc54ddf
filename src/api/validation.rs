use crate::core::Margins;
use crate::error::{ChartError, ChartResult};

pub const MIN_BAND_SCALE_PADDING: f64 = 0.1;
pub const MAX_BAND_SCALE_PADDING: f64 = 0.8;
pub const DEFAULT_BAND_SCALE_PADDING: f64 = 0.1;

pub(crate) fn validate_band_scale_padding(padding: f64) -> ChartResult<f64> {
    if !padding.is_finite() || !(MIN_BAND_SCALE_PADDING..=MAX_BAND_SCALE_PADDING).contains(&padding)
    {
        return Err(ChartError::InvalidPadding(padding));
    }
    Ok(padding)
}

pub(crate) fn validate_margins(margins: Margins) -> ChartResult<Margins> {
    margins.validate()
}

pub(crate) fn validate_extent(min: f64, max: f64) -> ChartResult<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "reported extent must be finite".to_owned(),
        ));
    }
    if min > max {
        return Err(ChartError::InvalidData(format!(
            "reported extent is inverted: min={min} > max={max}"
        )));
    }
    Ok((min, max))
}
