//! Vitrin Core Primitives
//!
//! This crate provides the foundational pieces shared by the page behaviors
//! and by view implementations:
//!
//! - **View Capability**: element lookup, class manipulation, scroll control,
//!   and event subscription behind one injectable trait
//! - **Event Dispatch**: a small event model with default-action suppression
//! - **Selectors**: the CSS-flavored selector subset the behaviors address
//!   elements with
//!
//! # Example
//!
//! ```rust
//! use vitrin_core::Selector;
//!
//! let selector = Selector::parse("#contact form").unwrap();
//! assert_eq!(selector.parts.len(), 2);
//! ```

pub mod events;
pub mod selector;
pub mod view;

pub use events::{Event, EventData, EventDispatcher, EventHandler, EventTarget, EventType};
pub use selector::{Selector, SelectorError, SelectorPart};
pub use view::{ElementId, ScrollBehavior, ScrollBlock, ScrollOptions, View};
