//! Vitrin Page Behaviors
//!
//! One-shot wiring of the showcase page's cosmetic behaviors onto a host
//! view:
//!
//! - **Reveal bootstrap**: configure the external animate-on-scroll
//!   collaborator
//! - **Navbar marker**: a `scrolled` class past a fixed offset
//! - **Smooth anchors**: animated in-page scrolling for `#` links
//! - **Contact interception**: acknowledge-and-reset instead of a network
//!   submission
//!
//! The four behaviors are independent, stateless reactions. `PageBehaviors`
//! registers them in a fixed order and hands control back to the host's
//! event dispatch; nothing runs at module load time, so installation is
//! deterministic under test.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrin_page::{PageBehaviors, RevealSettings};
//!
//! PageBehaviors::new(animator)
//!     .reveal_settings(RevealSettings::new(600).once(true))
//!     .install(&view);
//! ```

pub mod anchors;
pub mod contact;
pub mod navbar;
pub mod reveal;

use std::sync::Arc;

use vitrin_core::View;

pub use contact::{AcknowledgeReset, SubmissionHandler, SUBMISSION_CONFIRMATION};
pub use navbar::NavbarState;
pub use reveal::{RevealAnimator, RevealSettings};

/// Builder for the page behavior set
///
/// Carries the reveal animator (required), the reveal settings, and the
/// submission handler. Call [`PageBehaviors::install`] once from the host's
/// page-ready hook; each call registers a fresh set of reactors.
pub struct PageBehaviors<A> {
    animator: A,
    reveal: RevealSettings,
    submission: Arc<dyn SubmissionHandler>,
}

impl<A: RevealAnimator> PageBehaviors<A> {
    /// Create the behavior set with the page defaults: a 1000 ms reveal
    /// that plays once per element, and the acknowledge-and-reset
    /// submission handler
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            reveal: RevealSettings {
                duration_ms: 1000,
                once: true,
            },
            submission: Arc::new(AcknowledgeReset),
        }
    }

    /// Override the reveal animation settings
    pub fn reveal_settings(mut self, settings: RevealSettings) -> Self {
        self.reveal = settings;
        self
    }

    /// Replace the submission handler
    pub fn submission_handler(mut self, handler: impl SubmissionHandler + 'static) -> Self {
        self.submission = Arc::new(handler);
        self
    }

    /// Wire all behaviors onto `view`
    ///
    /// Registration order is fixed: reveal bootstrap, navbar marker, anchor
    /// reactors, contact interception. Elements absent from the document
    /// degrade the corresponding behavior to a no-op; the reveal animator is
    /// a hard dependency and is always initialized.
    pub fn install(&self, view: &dyn View) {
        self.animator.init(self.reveal);
        navbar::install(view);
        anchors::install(view);
        contact::install(view, Arc::clone(&self.submission));
    }
}

/// Wire the page behaviors with all defaults
pub fn initialize(view: &dyn View, animator: impl RevealAnimator) {
    PageBehaviors::new(animator).install(view);
}
