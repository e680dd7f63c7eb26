//! Display-only helpers for the form view. Nothing here affects validation.

/// Soft cap shown next to the comments counter. Longer comments are still accepted.
pub const COMMENTS_SOFT_LIMIT: usize = 500;

/// How close the comments are to [`COMMENTS_SOFT_LIMIT`], for counter styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentsLength {
    Normal,
    Elevated,
    High,
}

impl CommentsLength {
    pub fn of(comments: &str) -> Self {
        match comments.chars().count() {
            n if n > 400 => CommentsLength::High,
            n if n > 200 => CommentsLength::Elevated,
            _ => CommentsLength::Normal,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CommentsLength::Normal => "counter",
            CommentsLength::Elevated => "counter counter-elevated",
            CommentsLength::High => "counter counter-high",
        }
    }
}

/// Caption shown under the stars for a selected rating.
pub fn rating_caption(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("We'll do better!"),
        2 => Some("Thanks for the feedback!"),
        3 => Some("Good to know!"),
        4 => Some("Great to hear!"),
        5 => Some("You're amazing!"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_thresholds() {
        assert_eq!(CommentsLength::of(&"a".repeat(200)), CommentsLength::Normal);
        assert_eq!(CommentsLength::of(&"a".repeat(201)), CommentsLength::Elevated);
        assert_eq!(CommentsLength::of(&"a".repeat(401)), CommentsLength::High);
        // counted in characters, not bytes
        assert_eq!(CommentsLength::of(&"é".repeat(150)), CommentsLength::Normal);
    }

    #[test]
    fn unset_rating_has_no_caption() {
        assert_eq!(rating_caption(0), None);
        assert!(rating_caption(5).is_some());
    }
}
