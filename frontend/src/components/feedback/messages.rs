use common::form::{FieldInput, SubmitOutcome};

pub enum Msg {
    /// The user changed one field.
    Input(FieldInput),
    /// The user pressed the submit button.
    Submit,
    /// The request started by `Submit` finished, one way or another.
    Resolved(SubmitOutcome),
    /// "Submit another" on the thank-you panel.
    SubmitAnother,
}
