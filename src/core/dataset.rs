use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Measure name to optional value for one category.
///
/// A `None` value (JSON `null`) and an absent measure both mean "no value for
/// this category".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasureValues {
    values: IndexMap<String, Option<f64>>,
}

impl MeasureValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, measure: impl Into<String>, value: f64) -> Self {
        self.values.insert(measure.into(), Some(value));
        self
    }

    #[must_use]
    pub fn with_missing(mut self, measure: impl Into<String>) -> Self {
        self.values.insert(measure.into(), None);
        self
    }

    pub fn insert(&mut self, measure: impl Into<String>, value: Option<f64>) {
        self.values.insert(measure.into(), value);
    }

    #[must_use]
    pub fn get(&self, measure: &str) -> Option<f64> {
        self.values.get(measure).copied().flatten()
    }

    /// Measure value with absent entries read as zero.
    #[must_use]
    pub fn value_or_zero(&self, measure: &str) -> f64 {
        self.get(measure).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    fn validate(&self, key: &str) -> ChartResult<()> {
        for (measure, value) in self.iter() {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "measure `{measure}` of category `{key}` must be finite"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One `(dimension_key, measures)` pair. Serializes as a two-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry(pub String, pub MeasureValues);

impl DataEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, measures: MeasureValues) -> Self {
        Self(key.into(), measures)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn measures(&self) -> &MeasureValues {
        &self.1
    }
}

/// Ordered categorical dataset.
///
/// Keys are unique and their order is the band-scale domain order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DataEntry>", into = "Vec<DataEntry>")]
pub struct Dataset {
    entries: IndexMap<String, MeasureValues>,
}

impl Dataset {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset, rejecting duplicate keys and non-finite values.
    pub fn from_entries(entries: impl IntoIterator<Item = DataEntry>) -> ChartResult<Self> {
        let mut map = IndexMap::new();
        for DataEntry(key, measures) in entries {
            measures.validate(&key)?;
            if map.contains_key(&key) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate dimension key `{key}`"
                )));
            }
            map.insert(key, measures);
        }
        Ok(Self { entries: map })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimension keys in dataset order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MeasureValues)> {
        self.entries.iter().map(|(key, measures)| (key.as_str(), measures))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MeasureValues> {
        self.entries.get(key)
    }
}

impl TryFrom<Vec<DataEntry>> for Dataset {
    type Error = ChartError;

    fn try_from(entries: Vec<DataEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Dataset> for Vec<DataEntry> {
    fn from(dataset: Dataset) -> Self {
        dataset
            .entries
            .into_iter()
            .map(|(key, measures)| DataEntry(key, measures))
            .collect()
    }
}
