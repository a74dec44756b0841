//! # View Tree
//!
//! A small retained tree of mounted views. Presenters never draw anything
//! themselves: they create views here, attach them under a parent, swap them
//! and remove them. `ui::draw_ui` then walks whatever is attached to the root.
//!
//! ```text
//! root
//! ├── Sort(SortBar)
//! └── EventList
//!     ├── Item(EventItemView)     ← one visible view per event
//!     ├── Form(EventFormView)
//!     └── Item(EventItemView)
//! ```
//!
//! Views can also live *detached*: created but not under any parent. Each
//! presenter keeps its hidden item or form view detached until it is swapped
//! back in with [`ViewTree::replace`].
//!
//! The tree also owns escape-key subscriptions so a presenter's listener has
//! the same lifetime rules as its views and can never outlive them unnoticed.

use std::collections::HashMap;

use log::debug;

use crate::core::trip_event::EventId;
use crate::tui::components::{EventFormView, EventItemView, NoEventsView, SortBar};

/// Handle to a view in the tree. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

/// Where [`ViewTree::render`] inserts a child among its new siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPosition {
    AfterBegin,
    BeforeEnd,
}

/// Everything that can be mounted.
pub enum View {
    Root,
    Sort(SortBar),
    EventList,
    NoEvents(NoEventsView),
    Item(EventItemView),
    Form(EventFormView),
}

struct Node {
    view: View,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
}

/// Proof of an escape-key subscription. Deliberately not `Clone`: whoever
/// holds it is the only one able to unsubscribe.
#[derive(Debug, PartialEq, Eq)]
pub struct EscapeSubscription(u64);

pub struct ViewTree {
    nodes: HashMap<ViewId, Node>,
    root: ViewId,
    next_id: u64,
    escape_listeners: Vec<(u64, EventId)>,
    next_subscription: u64,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    pub fn new() -> Self {
        let root = ViewId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                view: View::Root,
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
            escape_listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    /// Add a detached view and return its handle.
    pub fn create(&mut self, view: View) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                view,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    /// Attach `child` under `parent`. A child that is already attached
    /// elsewhere is moved.
    pub fn render(&mut self, parent: ViewId, child: ViewId, position: RenderPosition) {
        if parent == child || !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child)
        {
            debug!("render skipped: {:?} under {:?}", child, parent);
            return;
        }
        self.detach(child);

        if let Some(node) = self.nodes.get_mut(&parent) {
            match position {
                RenderPosition::AfterBegin => node.children.insert(0, child),
                RenderPosition::BeforeEnd => node.children.push(child),
            }
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
    }

    /// Put `new` where `old` is attached. `old` stays alive, detached.
    ///
    /// Nothing happens when `old` is not attached or either view is absent.
    pub fn replace(&mut self, new: ViewId, old: ViewId) {
        if new == old || !self.nodes.contains_key(&new) {
            return;
        }
        let Some(parent) = self.nodes.get(&old).and_then(|n| n.parent) else {
            debug!("replace skipped: {:?} is not attached", old);
            return;
        };
        self.detach(new);

        if let Some(node) = self.nodes.get_mut(&parent)
            && let Some(slot) = node.children.iter_mut().find(|c| **c == old)
        {
            *slot = new;
        }
        if let Some(node) = self.nodes.get_mut(&old) {
            node.parent = None;
        }
        if let Some(node) = self.nodes.get_mut(&new) {
            node.parent = Some(parent);
        }
    }

    /// Detach and drop `id` together with everything below it.
    ///
    /// Removing an absent view is a no-op, so teardown can run more than once.
    /// The root cannot be removed.
    pub fn remove(&mut self, id: ViewId) {
        if id == self.root || !self.nodes.contains_key(&id) {
            return;
        }
        self.detach(id);

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                pending.extend(node.children);
            }
        }
    }

    fn detach(&mut self, id: ViewId) {
        let Some(parent) = self.nodes.get_mut(&id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|c| *c != id);
        }
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// True when `id` is reachable from the root, i.e. it would be drawn.
    pub fn is_attached(&self, id: ViewId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes.get(&current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.nodes.get(&id).map(|n| &n.view)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.nodes.get_mut(&id).map(|n| &mut n.view)
    }

    pub fn item(&self, id: ViewId) -> Option<&EventItemView> {
        match self.get(id) {
            Some(View::Item(view)) => Some(view),
            _ => None,
        }
    }

    pub fn item_mut(&mut self, id: ViewId) -> Option<&mut EventItemView> {
        match self.get_mut(id) {
            Some(View::Item(view)) => Some(view),
            _ => None,
        }
    }

    pub fn form(&self, id: ViewId) -> Option<&EventFormView> {
        match self.get(id) {
            Some(View::Form(view)) => Some(view),
            _ => None,
        }
    }

    pub fn form_mut(&mut self, id: ViewId) -> Option<&mut EventFormView> {
        match self.get_mut(id) {
            Some(View::Form(view)) => Some(view),
            _ => None,
        }
    }

    pub fn sort_bar_mut(&mut self, id: ViewId) -> Option<&mut SortBar> {
        match self.get_mut(id) {
            Some(View::Sort(view)) => Some(view),
            _ => None,
        }
    }

    /// Number of live views, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    // ------------------------------------------------------------------
    // Escape-key subscriptions
    // ------------------------------------------------------------------

    pub fn subscribe_escape(&mut self, owner: EventId) -> EscapeSubscription {
        let key = self.next_subscription;
        self.next_subscription += 1;
        self.escape_listeners.push((key, owner));
        EscapeSubscription(key)
    }

    pub fn unsubscribe_escape(&mut self, subscription: EscapeSubscription) {
        self.escape_listeners.retain(|(key, _)| *key != subscription.0);
    }

    /// Owners of live escape subscriptions, oldest first.
    pub fn escape_subscribers(&self) -> Vec<EventId> {
        self.escape_listeners
            .iter()
            .map(|(_, owner)| owner.clone())
            .collect()
    }
}
