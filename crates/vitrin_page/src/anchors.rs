//! Smooth in-page anchor scrolling
//!
//! Same-page anchor links scroll their target into view instead of letting
//! the host jump to it. A link whose fragment resolves to nothing still
//! swallows the click: the default jump is suppressed and nothing else
//! happens, leaving the link inert.

use std::sync::Arc;

use vitrin_core::events::{event_types, Event, EventTarget};
use vitrin_core::view::{ScrollBehavior, ScrollBlock, ScrollOptions};
use vitrin_core::{EventHandler, View};

/// Selector matching same-page anchor links
pub const ANCHOR_SELECTOR: &str = "a[href^='#']";

const HREF: &str = "href";

/// Subscribe a click reactor on every anchor link present in the document
///
/// Links added after installation are not wired.
pub(crate) fn install(view: &dyn View) {
    for link in view.query_all(ANCHOR_SELECTOR) {
        let handler: EventHandler = Arc::new(move |view: &dyn View, event: &mut Event| {
            event.prevent_default();
            if let Some(href) = view.attribute(link, HREF) {
                scroll_to_fragment(view, &href);
            }
        });
        view.subscribe(EventTarget::Element(link), event_types::CLICK, handler);
    }
}

/// Resolve a `#fragment` reference and scroll its target to the top of the
/// viewport; unresolvable fragments are ignored
fn scroll_to_fragment(view: &dyn View, fragment: &str) {
    match view.query(fragment) {
        Some(target) => view.scroll_into_view(
            target,
            ScrollOptions {
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Start,
            },
        ),
        None => tracing::debug!("anchor fragment {fragment:?} has no target"),
    }
}
