//! Event dispatch
//!
//! The page behaviors are reactors: functions invoked when the host fires an
//! event. Events carry an optional payload and a `default_prevented` flag a
//! reactor sets to suppress the host's default action. The flag never stops
//! later reactors; it only marks the default action as consumed.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::view::{ElementId, View};

/// Event type identifier
pub type EventType = u32;

/// Event types the page behaviors subscribe to
pub mod event_types {
    use super::EventType;

    /// Vertical scroll position changed
    pub const SCROLL: EventType = 1;
    /// Pointer click on an element
    pub const CLICK: EventType = 2;
    /// Form submission requested
    pub const SUBMIT: EventType = 3;
}

/// What an event is addressed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The viewport itself (scroll events)
    Window,
    /// A specific element
    Element(ElementId),
}

/// Event-specific payload
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    Scroll { offset_y: f32 },
    None,
}

/// An event delivered to registered reactors
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: EventTarget,
    pub data: EventData,
    pub default_prevented: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: EventTarget, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            default_prevented: false,
        }
    }

    /// Suppress the host's default action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Reactor function type
///
/// The dispatching view is passed back on every invocation so reactors can
/// query elements without capturing a view handle of their own.
pub type EventHandler = Arc<dyn Fn(&dyn View, &mut Event) + Send + Sync>;

/// Dispatches events to registered reactors
#[derive(Default)]
pub struct EventDispatcher {
    handlers: FxHashMap<(EventTarget, EventType), SmallVec<[EventHandler; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register a reactor for a target and event type
    pub fn register(&mut self, target: EventTarget, event_type: EventType, handler: EventHandler) {
        self.handlers
            .entry((target, event_type))
            .or_default()
            .push(handler);
    }

    /// Snapshot the reactors registered for one (target, event type) pair
    ///
    /// Lets a view release its dispatcher lock before invoking reactors, so
    /// a reactor may subscribe while an event is in flight.
    pub fn handlers_for(
        &self,
        target: EventTarget,
        event_type: EventType,
    ) -> SmallVec<[EventHandler; 2]> {
        self.handlers
            .get(&(target, event_type))
            .cloned()
            .unwrap_or_default()
    }

    /// Dispatch an event to every reactor registered for it, in
    /// registration order
    pub fn dispatch(&self, view: &dyn View, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            tracing::trace!(
                "dispatching event type {} to {} reactor(s)",
                event.event_type,
                handlers.len()
            );
            for handler in handlers {
                handler(view, event);
            }
        }
    }
}
