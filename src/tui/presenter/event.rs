//! # Event Presenter
//!
//! Owns the item ↔ form state machine of a single trip event.
//!
//! ```text
//!            roll-up (item)  → emits ModeChange, subscribes to Esc
//!      ┌──────────────────────────────────────────┐
//!      │                                          ▼
//!   ┌──────┐                                  ┌──────┐
//!   │ Item │                                  │ Form │
//!   └──────┘                                  └──────┘
//!      ▲                                          │
//!      └──────────────────────────────────────────┘
//!            roll-up (form) │ Esc   → reset form
//!            submit                 → emits Update
//!            (every path unsubscribes from Esc)
//! ```
//!
//! Favourite clicks (item) and delete (form) emit intents without changing
//! mode. The presenter never touches the trip's event list: everything it
//! wants changed goes up as an [`EventIntent`], returned from
//! [`EventPresenter::handle`].

use log::debug;

use crate::core::trip_event::TripEvent;
use crate::tui::components::{EventFormView, EventItemView};
use crate::tui::event::{TuiEvent, on_escape};
use crate::tui::view_tree::{EscapeSubscription, RenderPosition, View, ViewId, ViewTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventMode {
    #[default]
    Item,
    Form,
}

/// User interaction routed to a presenter by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAction {
    ItemRollUp,
    ItemFavoriteClick,
    FormRollUp,
    FormSubmit(TripEvent),
    FormDelete(TripEvent),
    KeyDown(TuiEvent),
}

/// What a presenter asks its parent to do.
#[derive(Debug, Clone, PartialEq)]
pub enum EventIntent {
    Update(TripEvent),
    Delete(TripEvent),
    /// This presenter just opened its form; every other one should close.
    ModeChange,
}

pub struct EventPresenter {
    list: ViewId,
    event: Option<TripEvent>,
    item_view: Option<ViewId>,
    form_view: Option<ViewId>,
    mode: EventMode,
    escape: Option<EscapeSubscription>,
}

impl EventPresenter {
    /// A presenter that will mount its views under `list`.
    pub fn new(list: ViewId) -> Self {
        Self {
            list,
            event: None,
            item_view: None,
            form_view: None,
            mode: EventMode::Item,
            escape: None,
        }
    }

    /// Show `event`. The first call appends the item view to the list; later
    /// calls swap whichever view is visible for a fresh one built from
    /// `event` and drop the old pair.
    pub fn init(&mut self, tree: &mut ViewTree, event: TripEvent) {
        let prev_item = self.item_view.take();
        let prev_form = self.form_view.take();

        let item = tree.create(View::Item(EventItemView::new(event.clone())));
        let form = tree.create(View::Form(EventFormView::new(event.clone())));
        self.item_view = Some(item);
        self.form_view = Some(form);
        self.event = Some(event);

        let (Some(prev_item), Some(prev_form)) = (prev_item, prev_form) else {
            tree.render(self.list, item, RenderPosition::BeforeEnd);
            return;
        };

        match self.mode {
            EventMode::Item => tree.replace(item, prev_item),
            EventMode::Form => tree.replace(form, prev_form),
        }

        tree.remove(prev_item);
        tree.remove(prev_form);
    }

    /// Remove both views and drop the Esc subscription. Safe to call twice.
    pub fn destroy(&mut self, tree: &mut ViewTree) {
        if let Some(item) = self.item_view.take() {
            tree.remove(item);
        }
        if let Some(form) = self.form_view.take() {
            tree.remove(form);
        }
        self.unsubscribe_escape(tree);
    }

    /// Close the form if it is open. Called when a sibling opens its form.
    pub fn reset_view(&mut self, tree: &mut ViewTree) {
        if self.mode != EventMode::Item {
            self.replace_form_to_item(tree);
        }
    }

    /// React to one user interaction.
    pub fn handle(&mut self, tree: &mut ViewTree, action: EventAction) -> Option<EventIntent> {
        match action {
            EventAction::ItemRollUp => {
                if self.mode == EventMode::Form {
                    return None;
                }
                self.replace_item_to_form(tree);
                self.subscribe_escape(tree);
                Some(EventIntent::ModeChange)
            }
            EventAction::ItemFavoriteClick => self
                .event
                .as_ref()
                .map(|e| EventIntent::Update(e.with_favorite_toggled())),
            EventAction::FormRollUp => {
                self.reset_form(tree);
                self.replace_form_to_item(tree);
                None
            }
            EventAction::FormSubmit(edited) => {
                self.replace_form_to_item(tree);
                Some(EventIntent::Update(edited))
            }
            EventAction::FormDelete(event) => Some(EventIntent::Delete(event)),
            EventAction::KeyDown(key) => {
                if self.escape.is_some() {
                    on_escape(&key, || {
                        self.reset_form(tree);
                        self.replace_form_to_item(tree);
                    });
                }
                None
            }
        }
    }

    pub fn mode(&self) -> EventMode {
        self.mode
    }

    pub fn event(&self) -> Option<&TripEvent> {
        self.event.as_ref()
    }

    pub fn item_view(&self) -> Option<ViewId> {
        self.item_view
    }

    pub fn form_view(&self) -> Option<ViewId> {
        self.form_view
    }

    /// The view currently meant to be on screen.
    pub fn visible_view(&self) -> Option<ViewId> {
        match self.mode {
            EventMode::Item => self.item_view,
            EventMode::Form => self.form_view,
        }
    }

    pub fn is_listening_for_escape(&self) -> bool {
        self.escape.is_some()
    }

    fn replace_item_to_form(&mut self, tree: &mut ViewTree) {
        if let (Some(item), Some(form)) = (self.item_view, self.form_view) {
            tree.replace(form, item);
        }
        self.mode = EventMode::Form;
        debug!("Event {:?} opened its form", self.event.as_ref().map(|e| &e.id));
    }

    fn replace_form_to_item(&mut self, tree: &mut ViewTree) {
        if let (Some(item), Some(form)) = (self.item_view, self.form_view) {
            tree.replace(item, form);
        }
        self.unsubscribe_escape(tree);
        self.mode = EventMode::Item;
        debug!("Event {:?} closed its form", self.event.as_ref().map(|e| &e.id));
    }

    fn reset_form(&mut self, tree: &mut ViewTree) {
        if let Some(form) = self.form_view.and_then(|id| tree.form_mut(id)) {
            form.reset();
        }
    }

    fn subscribe_escape(&mut self, tree: &mut ViewTree) {
        let Some(id) = self.event.as_ref().map(|e| e.id.clone()) else {
            return;
        };
        self.unsubscribe_escape(tree);
        self.escape = Some(tree.subscribe_escape(id));
    }

    fn unsubscribe_escape(&mut self, tree: &mut ViewTree) {
        if let Some(subscription) = self.escape.take() {
            tree.unsubscribe_escape(subscription);
        }
    }
}
