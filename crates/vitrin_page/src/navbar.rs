//! Navigation bar scroll marker
//!
//! Past a fixed offset the navigation bar carries a `scrolled` class so the
//! host styling can swap it to its condensed form. The marker is recomputed
//! from the current offset on every scroll event rather than updated
//! incrementally; firing twice at the same offset leaves the same visible
//! state. No debouncing is applied.

use std::sync::Arc;

use vitrin_core::events::{event_types, Event, EventTarget};
use vitrin_core::{EventHandler, View};

/// Selector for the navigation element
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Class present while the page is scrolled past the threshold
pub const SCROLLED_CLASS: &str = "scrolled";

/// Offset above which the navigation bar counts as scrolled
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Visual state of the navigation bar, a pure function of the offset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavbarState {
    /// At or near the top of the page
    Transparent,
    /// Scrolled past the threshold
    Scrolled,
}

impl NavbarState {
    /// Derive the state for a scroll offset
    pub fn from_offset(offset: f32) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavbarState::Scrolled
        } else {
            NavbarState::Transparent
        }
    }
}

/// Subscribe the scroll reactor
pub(crate) fn install(view: &dyn View) {
    let handler: EventHandler = Arc::new(sync_marker);
    view.subscribe(EventTarget::Window, event_types::SCROLL, handler);
}

/// Synchronize the class marker with the current offset
///
/// Silently does nothing when no navigation element exists.
fn sync_marker(view: &dyn View, _event: &mut Event) {
    let navbar = match view.query(NAVBAR_SELECTOR) {
        Some(navbar) => navbar,
        None => return,
    };

    let offset = view.scroll_offset();
    let state = NavbarState::from_offset(offset);
    tracing::trace!("navbar marker offset={offset:.1} state={state:?}");
    match state {
        NavbarState::Scrolled => view.add_class(navbar, SCROLLED_CLASS),
        NavbarState::Transparent => view.remove_class(navbar, SCROLLED_CLASS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_transparent_at_threshold() {
        assert_eq!(NavbarState::from_offset(0.0), NavbarState::Transparent);
        assert_eq!(NavbarState::from_offset(50.0), NavbarState::Transparent);
    }

    #[test]
    fn test_state_is_scrolled_past_threshold() {
        assert_eq!(NavbarState::from_offset(50.5), NavbarState::Scrolled);
        assert_eq!(NavbarState::from_offset(120.0), NavbarState::Scrolled);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let first = NavbarState::from_offset(80.0);
        let second = NavbarState::from_offset(80.0);
        assert_eq!(first, second);
    }
}
