//! # Presenters
//!
//! Presenters own the view tree: they decide which views are mounted, react
//! to component events and keep the trip data in sync with what is shown.
//!
//! - [`TripPresenter`]: the whole trip (sort bar, list container, registry)
//! - [`EventPresenter`]: one event and its item ↔ form state machine

pub mod event;
pub mod trip;

pub use event::{EventAction, EventIntent, EventMode, EventPresenter};
pub use trip::{Effect, TripPresenter};
