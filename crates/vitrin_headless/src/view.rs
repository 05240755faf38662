//! Headless view
//!
//! Implements the `View` capability against the in-memory document, with
//! simulated input dispatch and recorders for the outward-facing effects
//! (alerts and scroll requests). State sits behind mutexes so reactors can
//! call back into the view while an event is being dispatched.

use std::sync::Mutex;

use slotmap::{Key, KeyData};
use vitrin_core::events::{
    event_types, Event, EventData, EventDispatcher, EventHandler, EventTarget, EventType,
};
use vitrin_core::selector::Selector;
use vitrin_core::view::{ElementId, ScrollBlock, ScrollOptions, View};

use crate::document::{Document, NodeKey};

/// One recorded scroll-into-view request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub target: ElementId,
    pub options: ScrollOptions,
    /// Top edge of the target at request time, when laid out
    pub top: Option<f32>,
}

/// In-memory `View` implementation for tests and headless runs
///
/// Performs no I/O of any kind: alerts are recorded rather than shown, and
/// nothing a reactor does can reach a network.
pub struct HeadlessView {
    document: Mutex<Document>,
    dispatcher: Mutex<EventDispatcher>,
    scroll_offset: Mutex<f32>,
    alerts: Mutex<Vec<String>>,
    scroll_requests: Mutex<Vec<ScrollRequest>>,
}

fn element_id(key: NodeKey) -> ElementId {
    ElementId(key.data().as_ffi())
}

fn node_key(id: ElementId) -> NodeKey {
    NodeKey::from(KeyData::from_ffi(id.0))
}

impl HeadlessView {
    pub fn new(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
            dispatcher: Mutex::new(EventDispatcher::new()),
            scroll_offset: Mutex::new(0.0),
            alerts: Mutex::new(Vec::new()),
            scroll_requests: Mutex::new(Vec::new()),
        }
    }

    /// Parse a selector, answering `None` (with a warning) for anything
    /// outside the supported subset
    fn parse(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!("ignoring selector {selector:?}: {err}");
                None
            }
        }
    }

    fn dispatch(&self, event: &mut Event) {
        // Snapshot outside the lock so reactors may subscribe mid-dispatch.
        let handlers = self
            .dispatcher
            .lock()
            .unwrap()
            .handlers_for(event.target, event.event_type);
        let view: &dyn View = self;
        for handler in handlers {
            handler(view, event);
        }
    }

    // ========================================================================
    // Simulated input
    // ========================================================================

    /// Set the scroll offset, then fire a window scroll event
    pub fn simulate_scroll(&self, offset: f32) {
        *self.scroll_offset.lock().unwrap() = offset;
        let mut event = Event::new(
            event_types::SCROLL,
            EventTarget::Window,
            EventData::Scroll { offset_y: offset },
        );
        self.dispatch(&mut event);
    }

    /// Fire a click on `element`; true when a reactor suppressed the
    /// default action
    pub fn simulate_click(&self, element: ElementId) -> bool {
        let mut event = Event::new(
            event_types::CLICK,
            EventTarget::Element(element),
            EventData::None,
        );
        self.dispatch(&mut event);
        event.default_prevented
    }

    /// Fire a submit on `form`; true when a reactor suppressed the default
    /// (network) submission
    pub fn simulate_submit(&self, form: ElementId) -> bool {
        let mut event = Event::new(
            event_types::SUBMIT,
            EventTarget::Element(form),
            EventData::None,
        );
        self.dispatch(&mut event);
        event.default_prevented
    }

    /// Overwrite a form field's current value, as typing would
    pub fn set_field(&self, form: ElementId, name: &str, value: &str) {
        let mut document = self.document.lock().unwrap();
        if let Some(node) = document.node_mut(node_key(form)) {
            if let Some(field) = node.fields.iter_mut().find(|f| f.name == name) {
                field.value = value.to_string();
            }
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Alerts recorded so far, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    /// Scroll-into-view requests recorded so far, oldest first
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.scroll_requests.lock().unwrap().clone()
    }

    /// Current value of the named field on a form element
    pub fn field_value(&self, form: ElementId, name: &str) -> Option<String> {
        let document = self.document.lock().unwrap();
        document
            .node(node_key(form))?
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.clone())
    }
}

impl View for HeadlessView {
    fn query(&self, selector: &str) -> Option<ElementId> {
        let parsed = Self::parse(selector)?;
        let document = self.document.lock().unwrap();
        document.select_first(&parsed).map(element_id)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let parsed = match Self::parse(selector) {
            Some(parsed) => parsed,
            None => return Vec::new(),
        };
        let document = self.document.lock().unwrap();
        document
            .select_all(&parsed)
            .into_iter()
            .map(element_id)
            .collect()
    }

    fn contains_class(&self, element: ElementId, class: &str) -> bool {
        let document = self.document.lock().unwrap();
        document
            .node(node_key(element))
            .map_or(false, |node| node.classes.iter().any(|c| c == class))
    }

    fn add_class(&self, element: ElementId, class: &str) {
        let mut document = self.document.lock().unwrap();
        if let Some(node) = document.node_mut(node_key(element)) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&self, element: ElementId, class: &str) {
        let mut document = self.document.lock().unwrap();
        if let Some(node) = document.node_mut(node_key(element)) {
            node.classes.retain(|c| c != class);
        }
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let document = self.document.lock().unwrap();
        document
            .node(node_key(element))?
            .attributes
            .get(name)
            .cloned()
    }

    fn scroll_offset(&self) -> f32 {
        *self.scroll_offset.lock().unwrap()
    }

    fn scroll_into_view(&self, element: ElementId, options: ScrollOptions) {
        let top = self
            .document
            .lock()
            .unwrap()
            .node(node_key(element))
            .and_then(|node| node.top);
        if let (ScrollBlock::Start, Some(top)) = (options.block, top) {
            *self.scroll_offset.lock().unwrap() = top;
        }
        self.scroll_requests
            .lock()
            .unwrap()
            .push(ScrollRequest {
                target: element,
                options,
                top,
            });
    }

    fn reset_form(&self, form: ElementId) {
        let mut document = self.document.lock().unwrap();
        if let Some(node) = document.node_mut(node_key(form)) {
            for field in &mut node.fields {
                field.value = field.default.clone();
            }
        }
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn subscribe(&self, target: EventTarget, event_type: EventType, handler: EventHandler) {
        self.dispatcher
            .lock()
            .unwrap()
            .register(target, event_type, handler);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use vitrin_core::view::ScrollBehavior;

    use super::*;
    use crate::document::el;

    fn view_with_navbar() -> HeadlessView {
        let mut document = Document::new();
        document.append(None, el("nav").class("navbar"));
        HeadlessView::new(document)
    }

    #[test]
    fn test_class_operations_are_idempotent() {
        let view = view_with_navbar();
        let navbar = view.query(".navbar").unwrap();

        view.add_class(navbar, "scrolled");
        view.add_class(navbar, "scrolled");
        assert!(view.contains_class(navbar, "scrolled"));

        view.remove_class(navbar, "scrolled");
        view.remove_class(navbar, "scrolled");
        assert!(!view.contains_class(navbar, "scrolled"));
    }

    #[test]
    fn test_unparseable_selector_is_silent_absence() {
        let view = view_with_navbar();
        assert_eq!(view.query("#"), None);
        assert!(view.query_all("nav:first-child").is_empty());
    }

    #[test]
    fn test_scroll_into_view_start_aligns_top() {
        let mut document = Document::new();
        document.append(None, el("section").id("pricing").top(800.0));
        let view = HeadlessView::new(document);

        let pricing = view.query("#pricing").unwrap();
        view.scroll_into_view(
            pricing,
            ScrollOptions {
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Start,
            },
        );

        assert_eq!(view.scroll_offset(), 800.0);
        let requests = view.scroll_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].target, pricing);
        assert_eq!(requests[0].top, Some(800.0));
    }

    #[test]
    fn test_reset_restores_field_defaults() {
        let mut document = Document::new();
        document.append(
            None,
            el("form")
                .id("f")
                .field("name", "Ali")
                .field_with_default("subject", "Soru", "Merhaba"),
        );
        let view = HeadlessView::new(document);
        let form = view.query("#f").unwrap();

        view.reset_form(form);
        assert_eq!(view.field_value(form, "name").as_deref(), Some(""));
        assert_eq!(view.field_value(form, "subject").as_deref(), Some("Merhaba"));
    }

    #[test]
    fn test_set_field_overwrites_current_value() {
        let mut document = Document::new();
        document.append(None, el("form").id("f").field("name", ""));
        let view = HeadlessView::new(document);
        let form = view.query("#f").unwrap();

        view.set_field(form, "name", "Ali");
        assert_eq!(view.field_value(form, "name").as_deref(), Some("Ali"));
    }

    #[test]
    fn test_subscribe_and_simulate_round_trip() {
        let view = view_with_navbar();
        let navbar = view.query(".navbar").unwrap();

        view.subscribe(
            EventTarget::Element(navbar),
            event_types::CLICK,
            Arc::new(|_: &dyn View, event: &mut Event| event.prevent_default()),
        );

        assert!(view.simulate_click(navbar));
        // No reactor registered for submit on this element.
        assert!(!view.simulate_submit(navbar));
    }
}
