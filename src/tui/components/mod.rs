//! # TUI Components
//!
//! All views that presenters mount into the view tree, plus the chrome
//! drawn around them.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: route, dates, cost and status line
//! - `EventItemView`: read-only row for one event
//! - `NoEventsView`: empty-state placeholder
//! - `SortBar`: sort tabs, active tab is a prop
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `EventFormView`: draft editing with validation
//! - `EventList`: scrollable container with layout caching
//!
//! ## Interaction Surface
//!
//! Components never call back into presenters. Each one implements
//! `EventHandler` with a typed `Event` (`ItemEvent`, `FormEvent`,
//! `SortType`); the presenter routes a key to the component and acts on
//! whatever comes back.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── sort_bar.rs      (Sort tabs)
//! ├── event_item.rs    (Read-only event row)
//! ├── event_form/      (Editable event form)
//! ├── event_list.rs    (Scrollable list container)
//! └── no_events.rs     (Empty state)
//! ```

pub mod event_form;
pub mod event_item;
pub mod event_list;
pub mod no_events;
pub mod sort_bar;
pub mod title_bar;

pub use event_form::{EventFormView, FormError, FormEvent};
pub use event_item::{EventItemView, ItemEvent};
pub use event_list::{EventList, EventListState};
pub use no_events::NoEventsView;
pub use sort_bar::SortBar;
pub use title_bar::TitleBar;
