//! Event types exchanged between the carousel and its host.

use std::rc::Rc;

use crate::dom::Element;

/// Why a position-change notification fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCause {
    /// Synchronization right after construction.
    Initial,
    /// `go_to`, `next`, `prev` or one of the controls.
    Navigate,
    /// Silent jump out of the clone region after a transition settled.
    Rehome,
    /// Breakpoint crossing; the index is unchanged.
    Resize,
}

/// Payload handed to every move listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    /// Index into the (possibly extended) slide list.
    pub index: usize,
    /// Index of the real slide shown first, modulo the real slide count.
    pub real_index: usize,
    pub cause: MoveCause,
}

/// A navigation request. Listeners return one to move the carousel again;
/// it runs after every listener has seen the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    GoTo { index: isize, animate: bool },
}

pub type MoveListener = Rc<dyn Fn(&MoveEvent) -> Option<Navigation>>;

/// Handle returned by `Carousel::on_move`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Ordered listener registry. Dispatch iterates over a snapshot so listeners
/// added or removed mid-dispatch only affect the next event.
#[derive(Default)]
pub(crate) struct MoveListeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, MoveListener)>,
}

impl MoveListeners {
    pub(crate) fn subscribe(&mut self, listener: MoveListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn snapshot(&self) -> Vec<MoveListener> {
        self.entries.iter().map(|(_, l)| Rc::clone(l)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for MoveListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// What the host knows about a click that landed on the slide track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Extended index of the slide containing the click, when known.
    pub slide_index: Option<usize>,
    /// Attributes of the clicked element.
    pub attributes: Vec<(String, String)>,
}

impl ClickTarget {
    pub fn new(slide_index: Option<usize>) -> Self {
        Self {
            slide_index,
            attributes: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Captures the `data-*` attributes of a rendered element.
    pub fn from_element(slide_index: Option<usize>, element: &Element) -> Self {
        let attributes = element
            .attributes()
            .iter()
            .filter(|(name, _)| name.starts_with("data-"))
            .cloned()
            .collect();
        Self {
            slide_index,
            attributes,
        }
    }

    /// Value of the named captured attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Host-supplied handler for clicks anywhere on the track.
pub type TrackListener = Rc<dyn Fn(&ClickTarget)>;
