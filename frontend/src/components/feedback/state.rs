use common::form::FeedbackForm;

/// State of the feedback form component.
///
/// The component keeps no state of its own besides the form model; the
/// `source` tag is deliberately not stored here because it is read from the
/// page URL at the moment of each submit.
pub struct FeedbackFormComponent {
    pub form: FeedbackForm,
}

impl FeedbackFormComponent {
    pub fn new() -> Self {
        Self {
            form: FeedbackForm::new(),
        }
    }
}
