//! Message types for the review page update loop.
//!
//! Messages represent reader interactions on the listing and its overlays,
//! and the completions of requests issued by earlier messages.

use crate::reviews::{FlagReason, Rating, ReviewId};

/// Messages handled by [`super::ReviewPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    // Per-review action links
    /// An action link inside a review was clicked.
    ActionClicked {
        /// Review containing the link.
        review: ReviewId,
        /// The link's declared action tag, if it has one.
        tag: Option<String>,
    },

    // Deletion
    /// The site confirmed a deletion.
    DeleteSucceeded(ReviewId),
    /// A deletion request failed.
    DeleteFailed {
        /// Review whose deletion failed.
        review: ReviewId,
        /// Failure detail.
        message: String,
    },

    // Flag overlay
    /// A reason was chosen from the flag overlay menu.
    FlagReasonChosen(FlagReason),
    /// The flag overlay's cancel control was clicked.
    FlagCancelled,
    /// The site accepted a flag.
    FlagSucceeded(ReviewId),
    /// A flag request failed.
    FlagFailed {
        /// Review whose flag failed.
        review: ReviewId,
        /// Failure detail.
        message: String,
    },

    // Edit overlay
    /// A star was clicked in the edit overlay's rating selector.
    EditRatingSelected(Rating),
    /// The edit overlay's body text changed.
    EditBodyChanged(String),
    /// The edit overlay's cancel control was clicked.
    EditCancelled,

    // Listing controls
    /// The "load more" control was activated.
    LoadMoreClicked,
    /// The average-rating summary was clicked.
    BreakdownToggled,
    /// A click landed inside the rating breakdown panel.
    BreakdownClicked,
}

/// Conditions surfaced to the reader or the embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageNotice {
    /// A deletion failed; the review is deletable again.
    DeleteFailed {
        /// Review whose deletion failed.
        review: ReviewId,
        /// Failure detail.
        message: String,
    },
    /// A flag failed; the review can be reported again.
    FlagFailed {
        /// Review whose flag failed.
        review: ReviewId,
        /// Failure detail.
        message: String,
    },
    /// Every review on the page is visible.
    ///
    /// This is the hook for fetching another page from the server; the
    /// controller itself performs no fetch.
    RevealExhausted {
        /// URL of the next server page, if the listing advertised one.
        next_page: Option<String>,
    },
}

impl PageNotice {
    /// Returns true when the reader can retry the failed action.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DeleteFailed { .. } | Self::FlagFailed { .. })
    }

    /// Returns a one-line description for display.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::DeleteFailed { review, message } => {
                format!("Could not delete review {review}: {message}")
            }
            Self::FlagFailed { review, message } => {
                format!("Could not report review {review}: {message}")
            }
            Self::RevealExhausted { next_page: Some(url) } => {
                format!("All reviews shown; more at {url}")
            }
            Self::RevealExhausted { next_page: None } => "All reviews shown".to_owned(),
        }
    }
}
