//! Inbound payload schemas and the authoritative validation.
//!
//! Two deployment variants of the form disagree on key names, so each gets
//! its own explicit schema instead of one loosely typed object:
//!
//! | variant     | comments key | source key |
//! |-------------|--------------|------------|
//! | `Canonical` | `comments`   | `source`   |
//! | `Legacy`    | `feedback`   | `appName`  |
//!
//! Unknown keys are rejected by serde. Known keys are optional at the serde
//! level so that a missing one can be reported by name, in a fixed order,
//! one at a time: `name`, `email`, `rating`, comments, source.

use super::error::SubmissionError;
use common::model::feedback::{FeedbackRecord, RATING_RANGE};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonicalSubmission {
    name: Option<String>,
    email: Option<String>,
    rating: Option<i64>,
    comments: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LegacySubmission {
    name: Option<String>,
    email: Option<String>,
    rating: Option<i64>,
    feedback: Option<String>,
    app_name: Option<String>,
}

/// Fields of either variant, before validation.
pub struct RawFields {
    name: Option<String>,
    email: Option<String>,
    rating: Option<i64>,
    comments: Option<String>,
    source: Option<String>,
}

pub trait Submission {
    /// Key names as the client sent them, used in error messages.
    const COMMENTS_KEY: &'static str;
    const SOURCE_KEY: &'static str;

    fn into_fields(self) -> RawFields;

    /// Validates the payload and normalizes it into a storable record.
    fn into_record(self) -> Result<FeedbackRecord, SubmissionError>
    where
        Self: Sized,
    {
        let fields = self.into_fields();
        Ok(FeedbackRecord {
            name: required_text(fields.name, "name")?,
            email: required_text(fields.email, "email")?,
            rating: rating(fields.rating)?,
            comments: required_text(fields.comments, Self::COMMENTS_KEY)?,
            source: required_text(fields.source, Self::SOURCE_KEY)?,
        })
    }
}

impl Submission for CanonicalSubmission {
    const COMMENTS_KEY: &'static str = "comments";
    const SOURCE_KEY: &'static str = "source";

    fn into_fields(self) -> RawFields {
        RawFields {
            name: self.name,
            email: self.email,
            rating: self.rating,
            comments: self.comments,
            source: self.source,
        }
    }
}

impl Submission for LegacySubmission {
    const COMMENTS_KEY: &'static str = "feedback";
    const SOURCE_KEY: &'static str = "appName";

    fn into_fields(self) -> RawFields {
        RawFields {
            name: self.name,
            email: self.email,
            rating: self.rating,
            comments: self.feedback,
            source: self.app_name,
        }
    }
}

/// Absent, `null`, empty and whitespace-only values are all missing.
fn required_text(value: Option<String>, key: &'static str) -> Result<String, SubmissionError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(SubmissionError::MissingField(key)),
    }
}

/// A rating that is present but out of range (including the form's unset
/// value `0`) is invalid rather than missing.
fn rating(value: Option<i64>) -> Result<u8, SubmissionError> {
    let value = value.ok_or(SubmissionError::MissingField("rating"))?;
    u8::try_from(value)
        .ok()
        .filter(|rating| RATING_RANGE.contains(rating))
        .ok_or(SubmissionError::InvalidField {
            field: "rating",
            reason: "must be between 1 and 5",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical(value: serde_json::Value) -> Result<FeedbackRecord, SubmissionError> {
        serde_json::from_value::<CanonicalSubmission>(value)
            .unwrap()
            .into_record()
    }

    fn error_of(value: serde_json::Value) -> String {
        canonical(value).unwrap_err().to_string()
    }

    #[test]
    fn valid_payload_is_trimmed_into_a_record() {
        let record = canonical(json!({
            "name": "  Ada ",
            "email": "ada@example.com",
            "rating": 5,
            "comments": "Great tool!\n",
            "source": "MobileApp"
        }))
        .unwrap();

        assert_eq!(
            record,
            FeedbackRecord {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                rating: 5,
                comments: "Great tool!".to_string(),
                source: "MobileApp".to_string(),
            }
        );
    }

    #[test]
    fn first_missing_field_wins() {
        assert_eq!(error_of(json!({})), "Missing field: name");
        assert_eq!(
            error_of(json!({ "name": "Ada", "rating": 5, "comments": "hi", "source": "x" })),
            "Missing field: email"
        );
        assert_eq!(
            error_of(json!({ "name": "Ada", "email": "ada@example.com", "source": "x" })),
            "Missing field: rating"
        );
        assert_eq!(
            error_of(json!({ "name": "Ada", "email": "ada@example.com", "rating": 3, "source": "x" })),
            "Missing field: comments"
        );
        assert_eq!(
            error_of(json!({ "name": "Ada", "email": "ada@example.com", "rating": 3, "comments": "hi" })),
            "Missing field: source"
        );
    }

    #[test]
    fn blank_and_null_text_are_missing() {
        assert_eq!(
            error_of(json!({ "name": "   ", "email": null, "rating": 3, "comments": "hi", "source": "x" })),
            "Missing field: name"
        );
        assert_eq!(
            error_of(json!({ "name": "Ada", "email": null, "rating": 3, "comments": "hi", "source": "x" })),
            "Missing field: email"
        );
    }

    #[test]
    fn zero_rating_is_invalid_not_missing() {
        for rating in [0, 6, -1, 300] {
            assert_eq!(
                error_of(json!({
                    "name": "Ada", "email": "ada@example.com", "rating": rating,
                    "comments": "hi", "source": "x"
                })),
                "Invalid field: rating must be between 1 and 5",
                "{rating}"
            );
        }
    }

    #[test]
    fn unknown_keys_are_refused() {
        let parsed = serde_json::from_value::<CanonicalSubmission>(json!({
            "name": "Ada", "email": "ada@example.com", "rating": 3,
            "comments": "hi", "source": "x", "admin": true
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn legacy_keys_are_reported_by_their_own_names() {
        let legacy = |value| {
            serde_json::from_value::<LegacySubmission>(value)
                .unwrap()
                .into_record()
        };

        assert_eq!(
            legacy(json!({ "name": "Ada", "email": "ada@example.com", "rating": 4, "appName": "Web" }))
                .unwrap_err()
                .to_string(),
            "Missing field: feedback"
        );

        let record = legacy(json!({
            "name": "Ada", "email": "ada@example.com", "rating": 4,
            "feedback": "Nice", "appName": "Web"
        }))
        .unwrap();
        assert_eq!(record.comments, "Nice");
        assert_eq!(record.source, "Web");
    }
}
