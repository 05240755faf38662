//! Vitrin Headless View
//!
//! An in-memory implementation of the `vitrin_core::View` capability:
//!
//! - **Document tree**: tags, ids, classes, attributes, layout offsets, and
//!   form fields with default values
//! - **Selector matching**: the `vitrin_core::selector` subset, first/all
//!   matches in document order
//! - **Simulated input**: scroll, click, and submit dispatch with the same
//!   ordering the host's event loop would give
//! - **Recorders**: alerts and scroll requests are captured for inspection
//!   instead of reaching a user
//!
//! # Example
//!
//! ```rust
//! use vitrin_core::View;
//! use vitrin_headless::{el, Document, HeadlessView};
//!
//! let mut document = Document::new();
//! document.append(None, el("nav").class("navbar"));
//!
//! let view = HeadlessView::new(document);
//! view.simulate_scroll(120.0);
//! assert_eq!(view.scroll_offset(), 120.0);
//! ```

pub mod document;
pub mod view;

pub use document::{el, Document, ElementSpec, FormField, Node, NodeKey};
pub use view::{HeadlessView, ScrollRequest};
