use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{ChartId, ChartSpec};

/// Upper value bound used while no chart has reported an extent.
///
/// This is a placeholder that keeps the value axis from collapsing before the
/// first data load; it carries no meaning beyond that.
pub const DEFAULT_VALUE_MAX: f64 = 100.0;

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

pub(super) fn next_chart_id() -> ChartId {
    ChartId(NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
}

/// What a chart renderer declares when it attaches to a composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub requires_space: bool,
    #[serde(default)]
    pub kind: Option<String>,
}

impl ChartDescriptor {
    /// Chart that needs its own lane (side-by-side bars).
    #[must_use]
    pub fn exclusive() -> Self {
        Self {
            requires_space: true,
            kind: None,
        }
    }

    /// Chart drawn over the full band width (areas, lines).
    #[must_use]
    pub fn overlay() -> Self {
        Self {
            requires_space: false,
            kind: None,
        }
    }

    #[must_use]
    pub fn for_spec(spec: &ChartSpec) -> Self {
        Self {
            requires_space: spec.requires_space(),
            kind: Some(spec.kind_name().to_owned()),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Record kept for every mounted chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRegistration {
    pub id: ChartId,
    pub descriptor: ChartDescriptor,
    /// Last `(min, max)` reported by the chart, if any.
    pub extent: Option<(f64, f64)>,
}

impl ChartRegistration {
    #[must_use]
    pub fn requires_space(&self) -> bool {
        self.descriptor.requires_space
    }
}

/// Read-only view over a store's registrations, in registration order.
#[derive(Debug, Clone, Copy)]
pub struct ChartRegistry<'a> {
    registrations: &'a IndexMap<ChartId, ChartRegistration>,
}

impl<'a> ChartRegistry<'a> {
    pub(super) fn new(registrations: &'a IndexMap<ChartId, ChartRegistration>) -> Self {
        Self { registrations }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.registrations.len()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.registrations.is_empty()
    }

    #[must_use]
    pub fn contains(self, id: ChartId) -> bool {
        self.registrations.contains_key(&id)
    }

    #[must_use]
    pub fn get(self, id: ChartId) -> Option<&'a ChartRegistration> {
        self.registrations.get(&id)
    }

    pub fn iter(self) -> impl Iterator<Item = &'a ChartRegistration> {
        self.registrations.values()
    }

    /// Ids in registration order.
    #[must_use]
    pub fn ordered_ids(self) -> Vec<ChartId> {
        self.registrations.keys().copied().collect()
    }

    #[must_use]
    pub fn count(self, predicate: impl Fn(&ChartRegistration) -> bool) -> usize {
        self.registrations
            .values()
            .filter(|registration| predicate(*registration))
            .count()
    }

    #[must_use]
    pub fn space_requiring_count(self) -> usize {
        self.count(ChartRegistration::requires_space)
    }

    /// Number of space-requiring charts registered before `id`.
    ///
    /// `None` when `id` is not registered.
    #[must_use]
    pub fn space_rank(self, id: ChartId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        Some(
            self.registrations
                .values()
                .take_while(|registration| registration.id != id)
                .filter(|registration| registration.requires_space())
                .count(),
        )
    }

    /// Aggregate value extent across every reported chart.
    ///
    /// The minimum never exceeds zero and the maximum never drops below it.
    /// Without any report the maximum falls back to [`DEFAULT_VALUE_MAX`].
    #[must_use]
    pub fn aggregate_extent(self) -> (f64, f64) {
        let min = self
            .registrations
            .values()
            .filter_map(|registration| registration.extent)
            .map(|(min, _)| OrderedFloat(min))
            .min()
            .map_or(0.0, |min| min.0.min(0.0));
        let max = self
            .registrations
            .values()
            .filter_map(|registration| registration.extent)
            .map(|(_, max)| OrderedFloat(max))
            .max()
            .map_or(DEFAULT_VALUE_MAX, |max| max.0.max(0.0));
        (min, max)
    }
}
