//! Platform independent state of the feedback form.
//!
//! The frontend component owns one [`FeedbackForm`] and only ever changes it
//! through the methods here, so the rules about when a request may leave the
//! browser live in plain Rust and are tested without a DOM:
//!
//! - `Editing`: fields are mutable and inline errors may be shown.
//! - `Submitting`: local validation passed and exactly one request is in
//!   flight. Further submits are refused until [`FeedbackForm::finish_submit`].
//! - `Submitted`: the backend accepted the feedback; fields are cleared and
//!   only [`FeedbackForm::reset`] ("submit another") leads back to `Editing`.

pub mod display;
pub mod source;
pub mod validation;

use crate::requests::FeedbackPayload;
use crate::responses::{SubmitResponse, GENERIC_FAILURE, SUCCESS_MESSAGE};
use std::fmt;
use thiserror::Error;
use validation::{validate, FormErrors};

/// The user-editable fields, in the order the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Rating,
    Comments,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Rating, Field::Comments];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Rating => "rating",
            Field::Comments => "comments",
        }
    }
}

/// Values typed so far. `rating == 0` means no star has been picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comments: String,
}

impl FeedbackSubmission {
    fn to_payload(&self, source: String) -> FeedbackPayload {
        FeedbackPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            rating: self.rating,
            comments: self.comments.clone(),
            source,
        }
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Name(String),
    Email(String),
    Rating(u8),
    Comments(String),
}

impl FieldInput {
    pub fn field(&self) -> Field {
        match self {
            FieldInput::Name(_) => Field::Name,
            FieldInput::Email(_) => Field::Email,
            FieldInput::Rating(_) => Field::Rating,
            FieldInput::Comments(_) => Field::Comments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Why [`FeedbackForm::begin_submit`] did not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the feedback was already submitted")]
    AlreadySubmitted,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
}

/// How the single request of a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend answered `success: true`.
    Accepted(String),
    /// The backend answered, but did not accept the feedback.
    Rejected(Option<String>),
    /// No answer could be obtained (network error, timeout, aborted request).
    TransportFailed(String),
}

impl SubmitOutcome {
    /// Interprets an HTTP answer. `body` is `None` when it was not a
    /// [`SubmitResponse`] (e.g. the plain text of a 405).
    pub fn from_response(status: u16, body: Option<SubmitResponse>) -> Self {
        match body {
            Some(SubmitResponse {
                success: true,
                message,
                ..
            }) => SubmitOutcome::Accepted(message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string())),
            Some(SubmitResponse { error, .. }) => SubmitOutcome::Rejected(error),
            None => SubmitOutcome::Rejected(Some(format!("unexpected response (HTTP {status})"))),
        }
    }
}

/// What the user is told once a submit attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(String),
    Rejected(String),
    ConnectionFailed,
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Notice::Saved(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Saved(message) => f.write_str(message),
            Notice::Rejected(reason) => write!(f, "Failed to submit: {reason}"),
            Notice::ConnectionFailed => f.write_str("Could not connect to backend"),
        }
    }
}

/// The form's fields, inline errors and submission phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    submission: FeedbackSubmission,
    errors: FormErrors,
    phase: FormPhase,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            submission: FeedbackSubmission::default(),
            errors: FormErrors::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn submission(&self) -> &FeedbackSubmission {
        &self.submission
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Applies one edit and drops that field's error without re-validating.
    ///
    /// Returns `false` (and changes nothing) unless the form is `Editing`.
    pub fn input(&mut self, input: FieldInput) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        let field = input.field();
        match input {
            FieldInput::Name(value) => self.submission.name = value,
            FieldInput::Email(value) => self.submission.email = value,
            FieldInput::Rating(value) => self.submission.rating = value,
            FieldInput::Comments(value) => self.submission.comments = value,
        }
        self.errors.clear(field);
        true
    }

    /// Validates the whole form and, if it passes, enters `Submitting` and
    /// hands back the one payload to send.
    ///
    /// `source` should be resolved right before calling this, not when the
    /// form was mounted.
    pub fn begin_submit(&mut self, source: String) -> Result<FeedbackPayload, SubmitBlocked> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitBlocked::InFlight),
            FormPhase::Submitted => return Err(SubmitBlocked::AlreadySubmitted),
            FormPhase::Editing => {}
        }

        self.errors = validate(&self.submission);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.count()));
        }

        self.phase = FormPhase::Submitting;
        Ok(self.submission.to_payload(source))
    }

    /// Resolves the in-flight request. Returns `None` if nothing was in flight.
    ///
    /// Only an accepted submission clears the fields; on any failure the form
    /// goes back to `Editing` with the user's input untouched.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Option<Notice> {
        if self.phase != FormPhase::Submitting {
            return None;
        }

        let notice = match outcome {
            SubmitOutcome::Accepted(message) => {
                self.submission = FeedbackSubmission::default();
                self.errors = FormErrors::default();
                self.phase = FormPhase::Submitted;
                return Some(Notice::Saved(message));
            }
            SubmitOutcome::Rejected(reason) => Notice::Rejected(
                reason
                    .filter(|reason| !reason.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ),
            SubmitOutcome::TransportFailed(_) => Notice::ConnectionFailed,
        };
        self.phase = FormPhase::Editing;
        Some(notice)
    }

    /// "Submit another": clears fields and errors and returns to `Editing`.
    ///
    /// Refused while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        *self = Self::new();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::source::{resolve_source, DEFAULT_SOURCE};
    use super::validation::FieldError;
    use super::*;

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.input(FieldInput::Name("Ada".to_string()));
        form.input(FieldInput::Email("ada@example.com".to_string()));
        form.input(FieldInput::Rating(5));
        form.input(FieldInput::Comments("Great tool!".to_string()));
        form
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let mut form = FeedbackForm::new();
        form.input(FieldInput::Email("not-an-email".to_string()));

        let blocked = form.begin_submit(resolve_source(None)).unwrap_err();

        assert_eq!(blocked, SubmitBlocked::Invalid(4));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.errors().get(Field::Email),
            Some(FieldError::InvalidFormat(Field::Email))
        );
    }

    #[test]
    fn payload_uses_default_source_without_query() {
        let mut form = filled_form();
        let payload = form.begin_submit(resolve_source(None)).unwrap();

        assert_eq!(
            payload,
            FeedbackPayload {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                rating: 5,
                comments: "Great tool!".to_string(),
                source: DEFAULT_SOURCE.to_string(),
            }
        );
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn payload_uses_query_source() {
        let mut form = filled_form();
        let payload = form.begin_submit(resolve_source(Some("MobileApp"))).unwrap();
        assert_eq!(payload.source, "MobileApp");
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = filled_form();
        form.begin_submit(resolve_source(None)).unwrap();

        assert_eq!(
            form.begin_submit(resolve_source(None)),
            Err(SubmitBlocked::InFlight)
        );
        assert!(!form.input(FieldInput::Name("Grace".to_string())));
        assert!(!form.reset());
        assert_eq!(form.submission().name, "Ada");
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = FeedbackForm::new();
        form.begin_submit(resolve_source(None)).unwrap_err();
        assert_eq!(form.errors().count(), 4);

        // optimistic: the new value is not re-validated
        form.input(FieldInput::Name(" ".to_string()));

        assert_eq!(form.errors().get(Field::Name), None);
        assert_eq!(form.errors().count(), 3);
    }

    #[test]
    fn accepted_submission_clears_and_submit_another_resets() {
        let mut form = filled_form();
        form.begin_submit(resolve_source(None)).unwrap();

        let notice = form
            .finish_submit(SubmitOutcome::Accepted("Feedback saved!".to_string()))
            .unwrap();

        assert_eq!(notice, Notice::Saved("Feedback saved!".to_string()));
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.submission(), &FeedbackSubmission::default());
        assert_eq!(
            form.begin_submit(resolve_source(None)),
            Err(SubmitBlocked::AlreadySubmitted)
        );

        assert!(form.reset());
        assert_eq!(form, FeedbackForm::new());
    }

    #[test]
    fn rejection_keeps_input() {
        let mut form = filled_form();
        form.begin_submit(resolve_source(None)).unwrap();

        let notice = form
            .finish_submit(SubmitOutcome::Rejected(Some("Missing field: email".to_string())))
            .unwrap();

        assert_eq!(notice.to_string(), "Failed to submit: Missing field: email");
        assert!(notice.is_failure());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.submission(), filled_form().submission());
    }

    #[test]
    fn rejection_without_reason_uses_generic_message() {
        let mut form = filled_form();
        form.begin_submit(resolve_source(None)).unwrap();

        let notice = form.finish_submit(SubmitOutcome::Rejected(None)).unwrap();

        assert_eq!(notice, Notice::Rejected(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn transport_failure_keeps_input_and_allows_retry() {
        let mut form = filled_form();
        form.begin_submit(resolve_source(None)).unwrap();

        let notice = form
            .finish_submit(SubmitOutcome::TransportFailed("timed out".to_string()))
            .unwrap();

        assert_eq!(notice.to_string(), "Could not connect to backend");
        assert_eq!(form.submission(), filled_form().submission());
        assert!(form.begin_submit(resolve_source(None)).is_ok());
    }

    #[test]
    fn stray_resolution_is_ignored() {
        let mut form = filled_form();
        assert_eq!(
            form.finish_submit(SubmitOutcome::Accepted(String::new())),
            None
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn outcome_from_http_answers() {
        assert_eq!(
            SubmitOutcome::from_response(200, Some(SubmitResponse::accepted("ok"))),
            SubmitOutcome::Accepted("ok".to_string())
        );
        assert_eq!(
            SubmitOutcome::from_response(400, Some(SubmitResponse::rejected("Missing field: name"))),
            SubmitOutcome::Rejected(Some("Missing field: name".to_string()))
        );
        assert_eq!(
            SubmitOutcome::from_response(405, None),
            SubmitOutcome::Rejected(Some("unexpected response (HTTP 405)".to_string()))
        );
    }
}
