//! Extension points for code that observes a composition without owning it.

pub mod observers;

pub use observers::{CompositionContext, CompositionEvent, CompositionObserver};
