//! Reveal-on-scroll bootstrap
//!
//! Marked elements animate into view as they first cross into the viewport.
//! The animation engine itself is an external collaborator; this module
//! carries only its configuration and the seam it is driven through.

/// Configuration handed to the reveal animator at bootstrap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSettings {
    /// Animation duration in milliseconds
    pub duration_ms: u32,
    /// Animate each element only on its first entry into the viewport
    pub once: bool,
}

impl RevealSettings {
    /// Settings with the given duration that re-trigger on every entry
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            once: false,
        }
    }

    /// Animate each element only the first time it enters the viewport
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }
}

/// External animate-on-scroll collaborator
///
/// A hard dependency of the page initializer: the bootstrap call is not
/// guarded, and a missing animator is an integration error rather than a
/// runtime condition to recover from.
pub trait RevealAnimator: Send + Sync {
    /// Configure the animator; called once during page initialization,
    /// before any reactor is registered
    fn init(&self, settings: RevealSettings);
}

impl<A: RevealAnimator + ?Sized> RevealAnimator for std::sync::Arc<A> {
    fn init(&self, settings: RevealSettings) {
        (**self).init(settings);
    }
}
