//! Client-side checks run on every submit attempt.
//!
//! They only decide whether the form may send a request at all. The backend
//! validates every payload again and never relies on these rules.

use super::{FeedbackSubmission, Field};
use crate::model::feedback::RATING_RANGE;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Loose `<non-space>@<non-space>.<non-space>` check, unanchored.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Why a single field blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", required_message(.0))]
    Required(Field),
    #[error("{}", invalid_message(.0))]
    InvalidFormat(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) | FieldError::InvalidFormat(field) => *field,
        }
    }
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Email => "Email is required",
        Field::Rating => "Please select a rating",
        Field::Comments => "Comments are required",
    }
}

fn invalid_message(field: &Field) -> &'static str {
    match field {
        Field::Email => "Please enter a valid email address",
        Field::Rating => "Please select a rating between 1 and 5",
        Field::Name | Field::Comments => "Please enter a valid value",
    }
}

/// Inline errors, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    name: Option<FieldError>,
    email: Option<FieldError>,
    rating: Option<FieldError>,
    comments: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        *self.slot(field)
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    fn insert(&mut self, error: FieldError) {
        *self.slot_mut(error.field()) = Some(error);
    }

    fn slot(&self, field: Field) -> &Option<FieldError> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Rating => &self.rating,
            Field::Comments => &self.comments,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Rating => &mut self.rating,
            Field::Comments => &mut self.comments,
        }
    }
}

/// Runs every rule against `submission` and collects all failures.
pub fn validate(submission: &FeedbackSubmission) -> FormErrors {
    let mut errors = FormErrors::default();

    if submission.name.trim().is_empty() {
        errors.insert(FieldError::Required(Field::Name));
    }

    if submission.email.trim().is_empty() {
        errors.insert(FieldError::Required(Field::Email));
    } else if !EMAIL_PATTERN.is_match(&submission.email) {
        errors.insert(FieldError::InvalidFormat(Field::Email));
    }

    if submission.rating == 0 {
        errors.insert(FieldError::Required(Field::Rating));
    } else if !RATING_RANGE.contains(&submission.rating) {
        errors.insert(FieldError::InvalidFormat(Field::Rating));
    }

    if submission.comments.trim().is_empty() {
        errors.insert(FieldError::Required(Field::Comments));
    }

    errors
}
