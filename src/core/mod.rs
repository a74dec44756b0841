//! # Core Trip Data
//!
//! The data side of tripboard. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TripEvent (data)     │
//!                    │  • sort comparators     │
//!                    │  • update_item()        │
//!                    │                         │
//!                    │  No rendering. Pure.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │ presenters │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`trip_event`]: `TripEvent` and the immutable `update_item` helper
//! - [`sort`]: `SortType` and the stable comparators
//! - [`summary`]: route, dates and cost for the title bar
//! - [`trip_file`]: loading a trip from JSON
//! - [`config`]: settings and their override hierarchy

pub mod config;
pub mod sort;
pub mod summary;
pub mod trip_event;
pub mod trip_file;
