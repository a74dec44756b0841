//! # Trip Presenter
//!
//! Owns the canonical event list, one [`EventPresenter`] per event, the sort
//! bar and the list container. Every mutation of the trip goes through here.
//!
//! ## Render Pipeline
//!
//! ```text
//! sort events ─→ sort bar ─→ list container ─┬─→ one EventPresenter per event
//!                                            └─→ NoEventsView when empty
//! ```
//!
//! A sort change tears the whole pipeline down and runs it again. Data
//! changes and deletes touch only the affected presenter.
//!
//! ## Intents
//!
//! Child presenters report back through [`EventIntent`] values returned from
//! [`EventPresenter::handle`]. [`TripPresenter::dispatch`] applies them after
//! the child is done, so a mode-change broadcast runs to completion before the
//! dispatch returns.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::core::sort::{SortType, sort_events};
use crate::core::summary::TripSummary;
use crate::core::trip_event::{EventId, TripEvent, update_item};
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, ItemEvent, NoEventsView, SortBar};
use crate::tui::event::TuiEvent;
use crate::tui::presenter::event::{EventAction, EventIntent, EventMode, EventPresenter};
use crate::tui::view_tree::{RenderPosition, View, ViewId, ViewTree};

/// What the terminal loop should do after an input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub struct TripPresenter {
    tree: ViewTree,
    events: Vec<TripEvent>,
    presenters: HashMap<EventId, EventPresenter>,
    /// Ids in on-screen order; selection indexes into this.
    order: Vec<EventId>,
    default_sort: SortType,
    current_sort: Option<SortType>,
    sort_view: Option<ViewId>,
    list_view: Option<ViewId>,
    no_events_view: Option<ViewId>,
    selected: usize,
    status: String,
}

impl TripPresenter {
    pub fn new(default_sort: SortType) -> Self {
        Self {
            tree: ViewTree::new(),
            events: Vec::new(),
            presenters: HashMap::new(),
            order: Vec::new(),
            default_sort,
            current_sort: None,
            sort_view: None,
            list_view: None,
            no_events_view: None,
            selected: 0,
            status: String::new(),
        }
    }

    /// Take ownership of the trip and render it under the default sort.
    pub fn init(&mut self, events: Vec<TripEvent>) {
        self.clear_event_list();
        self.events = events;
        self.current_sort = Some(self.default_sort);
        self.selected = 0;
        info!(
            "Trip initialised with {} events, sorted by {}",
            self.events.len(),
            self.default_sort.label()
        );
        self.render_trip();
    }

    // ------------------------------------------------------------------
    // Render pipeline
    // ------------------------------------------------------------------

    fn render_trip(&mut self) {
        let sort = self.current_sort.unwrap_or(self.default_sort);
        self.events = sort_events(&self.events, sort);

        self.render_sort(sort);
        let list = self.render_event_list_container();

        if self.events.is_empty() {
            self.render_no_events(list);
            return;
        }
        for event in self.events.clone() {
            self.render_event(list, event);
        }
    }

    fn render_sort(&mut self, sort: SortType) {
        if let Some(old) = self.sort_view.take() {
            self.tree.remove(old);
        }
        let view = self.tree.create(View::Sort(SortBar::new(sort)));
        let root = self.tree.root();
        self.tree.render(root, view, RenderPosition::AfterBegin);
        self.sort_view = Some(view);
    }

    fn render_event_list_container(&mut self) -> ViewId {
        if let Some(old) = self.list_view.take() {
            self.tree.remove(old);
        }
        let view = self.tree.create(View::EventList);
        let root = self.tree.root();
        self.tree.render(root, view, RenderPosition::BeforeEnd);
        self.list_view = Some(view);
        view
    }

    fn render_event(&mut self, list: ViewId, event: TripEvent) {
        let id = event.id.clone();
        let mut presenter = EventPresenter::new(list);
        presenter.init(&mut self.tree, event);
        if let Some(mut stale) = self.presenters.insert(id.clone(), presenter) {
            warn!("Event {} rendered twice, dropping the older presenter", id);
            stale.destroy(&mut self.tree);
            self.order.retain(|o| *o != id);
        }
        self.order.push(id);
    }

    fn render_no_events(&mut self, list: ViewId) {
        let view = self.tree.create(View::NoEvents(NoEventsView));
        self.tree.render(list, view, RenderPosition::AfterBegin);
        self.no_events_view = Some(view);
    }

    fn clear_event_list(&mut self) {
        for (_, mut presenter) in self.presenters.drain() {
            presenter.destroy(&mut self.tree);
        }
        self.order.clear();
        for view in [
            self.no_events_view.take(),
            self.sort_view.take(),
            self.list_view.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.tree.remove(view);
        }
    }

    // ------------------------------------------------------------------
    // Intent handling
    // ------------------------------------------------------------------

    /// Route `action` to the presenter of `id` and apply whatever it asks for.
    pub fn dispatch(&mut self, id: &EventId, action: EventAction) {
        let Some(presenter) = self.presenters.get_mut(id) else {
            warn!("No presenter for event {}, dropping {:?}", id, action);
            return;
        };
        match presenter.handle(&mut self.tree, action) {
            Some(EventIntent::Update(updated)) => self.handle_event_data_change(updated),
            Some(EventIntent::Delete(event)) => self.handle_event_delete(&event),
            Some(EventIntent::ModeChange) => self.handle_event_mode_change(id),
            None => {}
        }
    }

    pub fn handle_event_data_change(&mut self, updated: TripEvent) {
        if !self.events.iter().any(|e| e.id == updated.id) {
            warn!("Update for unknown event {} ignored", updated.id);
            return;
        }
        self.events = update_item(&self.events, &updated);
        match self.presenters.get_mut(&updated.id) {
            Some(presenter) => {
                debug!("Refreshing event {}", updated.id);
                presenter.init(&mut self.tree, updated);
            }
            None => warn!("Event {} has no presenter to refresh", updated.id),
        }
    }

    /// Close every form except the one belonging to `origin`.
    pub fn handle_event_mode_change(&mut self, origin: &EventId) {
        for (id, presenter) in self.presenters.iter_mut() {
            if id != origin {
                presenter.reset_view(&mut self.tree);
            }
        }
    }

    pub fn handle_sort_type_change(&mut self, sort: SortType) {
        if self.current_sort == Some(sort) {
            return;
        }
        if !sort.is_sortable() {
            self.status = format!("Sorting by {} is not available", sort.label());
            return;
        }

        info!("Re-rendering trip sorted by {}", sort.label());
        self.clear_event_list();
        self.current_sort = Some(sort);
        self.selected = 0;
        self.render_trip();
        self.status = format!("Sorted by {}", sort.label());
    }

    pub fn handle_event_delete(&mut self, event: &TripEvent) {
        let Some(mut presenter) = self.presenters.remove(&event.id) else {
            warn!("Delete for unknown event {} ignored", event.id);
            return;
        };
        presenter.destroy(&mut self.tree);
        self.events.retain(|e| e.id != event.id);
        self.order.retain(|id| *id != event.id);
        self.selected = self.selected.min(self.order.len().saturating_sub(1));
        self.status = format!("Deleted {}", event.destination);
        info!("Deleted event {}", event.id);

        if self.events.is_empty()
            && let Some(list) = self.list_view
        {
            self.render_no_events(list);
        }
    }

    // ------------------------------------------------------------------
    // Input routing
    // ------------------------------------------------------------------

    /// Route one key to whichever view should see it.
    pub fn handle_input(&mut self, event: &TuiEvent) -> Effect {
        match event {
            TuiEvent::ForceQuit => return Effect::Quit,
            TuiEvent::Escape => {
                for id in self.tree.escape_subscribers() {
                    self.dispatch(&id, EventAction::KeyDown(event.clone()));
                }
                return Effect::None;
            }
            _ => {}
        }

        let Some(id) = self.selected_id().cloned() else {
            return self.handle_list_input(event, None);
        };
        match self.presenters.get(&id).map(|p| (p.mode(), p.form_view())) {
            Some((EventMode::Form, Some(form))) => {
                self.handle_form_input(&id, form, event);
                Effect::None
            }
            _ => self.handle_list_input(event, Some(&id)),
        }
    }

    fn handle_form_input(&mut self, id: &EventId, form: ViewId, event: &TuiEvent) {
        let Some(form_event) = self
            .tree
            .form_mut(form)
            .and_then(|view| view.handle_event(event))
        else {
            return;
        };
        let action = match form_event {
            FormEvent::RollUp => EventAction::FormRollUp,
            FormEvent::Submit(edited) => EventAction::FormSubmit(edited),
            FormEvent::Delete(original) => EventAction::FormDelete(original),
        };
        self.dispatch(id, action);
    }

    fn handle_list_input(&mut self, event: &TuiEvent, selected: Option<&EventId>) -> Effect {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                return Effect::None;
            }
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.order.len() {
                    self.selected += 1;
                }
                return Effect::None;
            }
            TuiEvent::InputChar('q') => return Effect::Quit,
            _ => {}
        }

        if let Some(sort) = self
            .sort_view
            .and_then(|view| self.tree.sort_bar_mut(view))
            .and_then(|bar| bar.handle_event(event))
        {
            self.handle_sort_type_change(sort);
            return Effect::None;
        }

        let Some(id) = selected else {
            return Effect::None;
        };
        let item_event = self
            .presenters
            .get(id)
            .and_then(|p| p.item_view())
            .and_then(|view| self.tree.item_mut(view))
            .and_then(|view| view.handle_event(event));
        match item_event {
            Some(ItemEvent::RollUp) => self.dispatch(id, EventAction::ItemRollUp),
            Some(ItemEvent::FavoriteClick) => self.dispatch(id, EventAction::ItemFavoriteClick),
            None => {}
        }
        Effect::None
    }

    /// A click on a list entry selects it and, for an item view, opens its form.
    pub fn click_view(&mut self, view: ViewId) {
        let Some((index, id)) = self.order.iter().enumerate().find_map(|(i, id)| {
            let presenter = self.presenters.get(id)?;
            (presenter.visible_view() == Some(view)).then(|| (i, id.clone()))
        }) else {
            return;
        };
        self.selected = index;
        if self.presenters.get(&id).map(|p| p.mode()) == Some(EventMode::Item) {
            self.dispatch(&id, EventAction::ItemRollUp);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Events in their current on-screen order.
    pub fn events(&self) -> &[TripEvent] {
        &self.events
    }

    pub fn current_sort(&self) -> Option<SortType> {
        self.current_sort
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn presenter(&self, id: &EventId) -> Option<&EventPresenter> {
        self.presenters.get(id)
    }

    pub fn presenter_count(&self) -> usize {
        self.presenters.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.order.is_empty()).then_some(self.selected)
    }

    fn selected_id(&self) -> Option<&EventId> {
        self.order.get(self.selected)
    }

    /// The view of the selected event that is currently on screen.
    pub fn focused_view(&self) -> Option<ViewId> {
        self.selected_id()
            .and_then(|id| self.presenters.get(id))
            .and_then(|p| p.visible_view())
    }

    pub fn sort_bar(&self) -> Option<SortBar> {
        match self.sort_view.and_then(|view| self.tree.get(view)) {
            Some(View::Sort(bar)) => Some(*bar),
            _ => None,
        }
    }

    pub fn list_view(&self) -> Option<ViewId> {
        self.list_view
    }

    pub fn no_events_view(&self) -> Option<ViewId> {
        self.no_events_view
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary::from_events(&self.events)
    }
}
