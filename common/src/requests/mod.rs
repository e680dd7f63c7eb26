use serde::{Deserialize, Serialize};

/// Request body the feedback form posts to `/api/feedback`.
///
/// `source` is not typed by the user: it is resolved from the page's
/// `source` query parameter at the moment the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comments: String,
    pub source: String,
}
