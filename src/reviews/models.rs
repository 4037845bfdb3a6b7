//! Review records and the per-review interaction markers.
//!
//! Reviews arrive from the server-rendered listing snapshot. The controller
//! mutates their markers in place (visibility, deletion, flag status) but
//! never removes a review from the listing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Stable identifier of a review within the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(u64);

impl ReviewId {
    /// Wraps a raw review identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ReviewId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: Self = Self(1);
    /// Highest accepted rating.
    pub const MAX: Self = Self(5);

    /// All ratings in ascending order.
    pub const ALL: [Self; 5] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Validates a raw rating value.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidRating`] when `value` is outside 1..=5.
    pub const fn new(value: u8) -> Result<Self, PageError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(PageError::InvalidRating { value })
        }
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = PageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a review is currently shown in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// The review is rendered.
    #[default]
    Visible,
    /// The review is rendered hidden, awaiting a "load more" reveal.
    Hidden,
}

impl Visibility {
    /// Returns true for [`Visibility::Hidden`].
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Deletion lifecycle of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionState {
    /// No deletion has been requested.
    #[default]
    Idle,
    /// The review is marked "deleting" while the request is in flight.
    PendingDelete,
    /// The server confirmed deletion; the review stays listed with a marker.
    Deleted,
}

impl DeletionState {
    /// Returns the visual marker applied to the review, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::PendingDelete => Some("deleting"),
            Self::Deleted => Some("deleted"),
        }
    }
}

/// State of a review's "report" action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagStatus {
    /// The report link is interactive.
    #[default]
    Available,
    /// A flag request is in flight.
    Sending,
    /// The review was flagged; the link is replaced with a static label.
    Flagged,
}

impl FlagStatus {
    /// Returns the text shown in the review's action area.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Report",
            Self::Sending => "Sending report...",
            Self::Flagged => "Flagged for review",
        }
    }

    /// Returns true while the report control still accepts clicks.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// A single review in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Stable identifier.
    pub id: ReviewId,
    /// Element identifier the view can jump to.
    #[serde(default)]
    pub anchor: Option<String>,
    /// Rich-text body as rendered by the server.
    pub body: String,
    /// Current star rating, if the author gave one.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Endpoint receiving flag submissions.
    pub flag_url: String,
    /// Endpoint receiving the edit form.
    pub edit_url: String,
    /// Endpoint receiving delete requests.
    pub delete_url: String,
    /// Whether the server rendered this review hidden.
    #[serde(default)]
    pub hidden: bool,
    /// Current visibility.
    #[serde(skip)]
    pub visibility: Visibility,
    /// Deletion lifecycle marker.
    #[serde(skip)]
    pub deletion: DeletionState,
    /// Report control status.
    #[serde(skip)]
    pub flag_status: FlagStatus,
}

impl Review {
    /// Creates a visible, idle review with the given identifier and body.
    ///
    /// URLs follow the site's `/reviews/<id>/<action>` layout.
    #[must_use]
    pub fn new(id: ReviewId, body: impl Into<String>) -> Self {
        Self {
            id,
            anchor: None,
            body: body.into(),
            rating: None,
            flag_url: format!("/reviews/{id}/flag"),
            edit_url: format!("/reviews/{id}/edit"),
            delete_url: format!("/reviews/{id}/delete"),
            hidden: false,
            visibility: Visibility::Visible,
            deletion: DeletionState::Idle,
            flag_status: FlagStatus::Available,
        }
    }

    /// Sets the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the jump-to anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Marks the review as rendered hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self.visibility = Visibility::Hidden;
        self
    }

    /// Applies the server-rendered `hidden` flag to the live visibility.
    pub(crate) const fn sync_visibility(&mut self) {
        self.visibility = if self.hidden {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}
