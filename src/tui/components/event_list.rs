//! # EventList Component
//!
//! Scrollable container for the views mounted under the event-list node of
//! the view tree.
//!
//! ## Architecture
//!
//! `EventList` is a transient component (created each frame) that wraps
//! `&'a mut EventListState` (persistent state) and a borrowed `ViewTree`
//! (props). The list itself owns no views: whatever the presenters attached
//! under the list node is drawn, in tree order.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::config::DisplaySettings;
use crate::tui::component::{Component, EntryWidget, EventHandler, ListEntry};
use crate::tui::event::TuiEvent;
use crate::tui::view_tree::{View, ViewId, ViewTree};

/// Layout and scroll state for the event list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct EventListState {
    pub scroll_state: ScrollViewState,
    /// Views drawn last frame, top to bottom.
    pub entries: Vec<ViewId>,
    /// Running total of entry heights (entry `i` ends at `prefix_heights[i]`).
    pub prefix_heights: Vec<u16>,
    /// Screen area used last frame (for hit testing).
    pub area: Rect,
    /// When true the focused entry is scrolled into view on render.
    /// Mouse scrolling turns it off; keyboard navigation turns it back on.
    pub follow_focus: bool,
}

impl EventListState {
    pub fn new() -> Self {
        Self {
            follow_focus: true,
            ..Default::default()
        }
    }

    fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.area.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Scroll the viewport so `view` is fully visible.
    /// If it is taller than the viewport, align its top edge.
    fn scroll_to(&mut self, view: ViewId) {
        let Some(idx) = self.entries.iter().position(|v| *v == view) else {
            return;
        };
        let top = if idx == 0 { 0 } else { self.prefix_heights[idx - 1] };
        let bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.area.height {
            let new_y = bottom.saturating_sub(self.area.height).min(top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// The entry under screen position (`column`, `row`), if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ViewId> {
        if !self.area.contains(Position { x: column, y: row }) {
            return None;
        }
        let content_y = (row - self.area.y) + self.scroll_state.offset().y;
        self.prefix_heights
            .iter()
            .position(|end| content_y < *end)
            .and_then(|idx| self.entries.get(idx).copied())
    }
}

impl EventHandler for EventListState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.follow_focus = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                self.follow_focus = false;
                None
            }
            _ => None,
        }
    }
}

fn as_entry(view: &View) -> Option<&dyn ListEntry> {
    match view {
        View::Item(v) => Some(v),
        View::Form(v) => Some(v),
        View::NoEvents(v) => Some(v),
        View::Root | View::Sort(_) | View::EventList => None,
    }
}

/// Scrollable event list, created fresh each frame.
pub struct EventList<'a> {
    pub state: &'a mut EventListState,
    pub tree: &'a ViewTree,
    pub list: ViewId,
    pub focused: Option<ViewId>,
    pub display: &'a DisplaySettings,
}

impl Component for EventList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let tree = self.tree;

        // 1. Measure entries
        let entries: Vec<(ViewId, &dyn ListEntry)> = tree
            .children(self.list)
            .iter()
            .filter_map(|id| tree.get(*id).and_then(as_entry).map(|e| (*id, e)))
            .collect();

        let mut running = 0u16;
        self.state.prefix_heights = entries
            .iter()
            .map(|(_, entry)| {
                running = running.saturating_add(entry.height(content_width));
                running
            })
            .collect();
        self.state.entries = entries.iter().map(|(id, _)| *id).collect();
        self.state.area = area;

        // 2. Keep the focused entry on screen
        if self.state.follow_focus
            && let Some(focused) = self.focused
        {
            self.state.scroll_to(focused);
        }
        self.state.clamp_scroll();

        // 3. Render into a ScrollView
        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = 0u16;
        for (i, (id, entry)) in entries.iter().enumerate() {
            let height = self.state.prefix_heights[i] - y_offset;
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(
                EntryWidget {
                    entry: *entry,
                    focused: self.focused == Some(*id),
                    display: self.display,
                },
                rect,
            );
            y_offset = self.state.prefix_heights[i];
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
