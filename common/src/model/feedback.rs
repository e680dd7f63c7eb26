use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted star ratings. `0` is the form's "unset" value and never valid.
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// A feedback submission as it is persisted by the backend.
///
/// Records are built only from payloads the backend has validated, so every
/// text field is trimmed and non-empty and `rating` lies in [`RATING_RANGE`].
/// Once appended to the store a record is never updated or removed.
///
/// Field declaration order is the storage column order (see [`Self::HEADER`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comments: String,
    pub source: String,
}

impl FeedbackRecord {
    /// Column names written as the first row of a new store.
    pub const HEADER: [&'static str; 5] = ["name", "email", "rating", "comments", "source"];
}
