use crate::error::{ChartError, ChartResult};
use crate::extensions::{CompositionContext, CompositionEvent, CompositionObserver};

use super::CompositionStore;

impl CompositionStore {
    /// Subscribes an observer under its unique id.
    pub fn subscribe(&mut self, observer: Box<dyn CompositionObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already subscribed"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Removes an observer by id. Returns `true` when removed.
    pub fn unsubscribe(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    /// Read-only state handed to observers.
    #[must_use]
    pub fn context(&self) -> CompositionContext {
        CompositionContext {
            revision: self.revision,
            orientation: self.orientation,
            band_scale_padding: self.band_scale_padding,
            viewport: self.viewport,
            categories_len: self.data.len(),
            registered_charts: self.registrations.len(),
            value_domain: self.value_domain(),
        }
    }

    pub(super) fn emit_event(&mut self, event: CompositionEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
