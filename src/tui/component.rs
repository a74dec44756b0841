use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::core::config::DisplaySettings;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// The `render` method takes `&mut self` so a component can update caches or
/// presentation state (e.g. scroll offsets) during the render pass, the same
/// way Ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// The associated `Event` type is the component's whole interaction surface:
/// a parent learns about clicks, submits and deletes only through the values
/// `handle_event` returns.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// A block stacked inside the scrolling event list.
///
/// Entries report their height up front so the list can size its scroll
/// canvas before anything is drawn.
pub trait ListEntry {
    fn height(&self, width: u16) -> u16;

    fn render_entry(&self, area: Rect, buf: &mut Buffer, focused: bool, display: &DisplaySettings);
}

/// Adapter that lets any [`ListEntry`] be handed to a `ScrollView`.
pub struct EntryWidget<'a, E: ListEntry + ?Sized> {
    pub entry: &'a E,
    pub focused: bool,
    pub display: &'a DisplaySettings,
}

impl<E: ListEntry + ?Sized> Widget for EntryWidget<'_, E> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.entry.render_entry(area, buf, self.focused, self.display);
    }
}
