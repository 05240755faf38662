//! View capability
//!
//! The behaviors never touch a concrete document. They are handed a `View`:
//! a handle exposing element lookup, class manipulation, scroll control,
//! form reset, a modal alert, and event subscription. The host supplies the
//! real implementation; `vitrin_headless` supplies an in-memory one for
//! tests and headless runs.

use crate::events::{EventHandler, EventTarget, EventType};

/// Identifies an element within a view
///
/// Opaque to the behaviors; views decide what the value means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Options for scroll-into-view behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    /// How to animate the scroll
    pub behavior: ScrollBehavior,
    /// Vertical alignment of the target within the viewport
    pub block: ScrollBlock,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            block: ScrollBlock::Nearest,
        }
    }
}

/// Scroll animation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Instant scroll (no animation)
    #[default]
    Auto,
    /// Smooth animated scroll
    Smooth,
}

/// Vertical scroll alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    /// Align to top of viewport
    Start,
    /// Align to center of viewport
    Center,
    /// Align to bottom of viewport
    End,
    /// Scroll minimum distance to make visible
    #[default]
    Nearest,
}

/// Capability handle over the hosting document and viewport
///
/// Lookup methods answer `None` (or an empty list) for unmatched and
/// unparseable selectors alike; absence is never an error. Class operations
/// are idempotent. All methods take `&self`: implementations are expected
/// to manage interior mutability so reactors can call back in during event
/// dispatch.
pub trait View: Send + Sync {
    /// First element matching `selector`, in document order
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// Every element matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// Whether `element` currently carries `class`
    fn contains_class(&self, element: ElementId, class: &str) -> bool;

    /// Add `class` to `element`; present classes are left as-is
    fn add_class(&self, element: ElementId, class: &str);

    /// Remove `class` from `element`; absent classes are left as-is
    fn remove_class(&self, element: ElementId, class: &str);

    /// Value of the `name` attribute on `element`
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Current vertical scroll offset of the viewport, non-negative
    fn scroll_offset(&self) -> f32;

    /// Scroll the viewport so `element` satisfies `options`
    fn scroll_into_view(&self, element: ElementId, options: ScrollOptions);

    /// Restore every field of the `form` element to its default value
    fn reset_form(&self, form: ElementId);

    /// Show a blocking modal message and wait for acknowledgment
    fn alert(&self, message: &str);

    /// Register a reactor for events of `event_type` on `target`
    fn subscribe(&self, target: EventTarget, event_type: EventType, handler: EventHandler);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_options_default_is_instant_nearest() {
        let options = ScrollOptions::default();
        assert_eq!(options.behavior, ScrollBehavior::Auto);
        assert_eq!(options.block, ScrollBlock::Nearest);
    }
}
