//! Contact form interception
//!
//! The contact form never reaches the network. Submission is intercepted
//! and delegated to a [`SubmissionHandler`]; the default handler
//! acknowledges with a fixed confirmation and resets the fields. Real
//! submission can be added later by installing a different handler, without
//! touching the wiring here.

use std::sync::Arc;

use vitrin_core::events::{event_types, Event, EventTarget};
use vitrin_core::{ElementId, EventHandler, View};

/// Selector for the form nested in the contact section
pub const CONTACT_FORM_SELECTOR: &str = "#contact form";

/// Confirmation shown after a submission is acknowledged
pub const SUBMISSION_CONFIRMATION: &str =
    "Mesajınız gönderildi! En kısa sürede size dönüş yapacağız.";

/// Receives intercepted form submissions
pub trait SubmissionHandler: Send + Sync {
    /// Handle one submission of `form`
    ///
    /// The default (network) action is already suppressed when this runs.
    fn handle(&self, view: &dyn View, form: ElementId);
}

impl<S: SubmissionHandler + ?Sized> SubmissionHandler for Arc<S> {
    fn handle(&self, view: &dyn View, form: ElementId) {
        (**self).handle(view, form);
    }
}

/// Default handler: show the confirmation, then reset the form
#[derive(Clone, Copy, Debug, Default)]
pub struct AcknowledgeReset;

impl SubmissionHandler for AcknowledgeReset {
    fn handle(&self, view: &dyn View, form: ElementId) {
        view.alert(SUBMISSION_CONFIRMATION);
        view.reset_form(form);
    }
}

/// Subscribe the submit reactor on the contact form, when one exists
pub(crate) fn install(view: &dyn View, handler: Arc<dyn SubmissionHandler>) {
    let form = match view.query(CONTACT_FORM_SELECTOR) {
        Some(form) => form,
        None => {
            tracing::debug!("no contact form present, interception skipped");
            return;
        }
    };

    let reactor: EventHandler = Arc::new(move |view: &dyn View, event: &mut Event| {
        event.prevent_default();
        handler.handle(view, form);
    });
    view.subscribe(EventTarget::Element(form), event_types::SUBMIT, reactor);
}
