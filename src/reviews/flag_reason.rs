//! The enumerated reasons a reader can give when flagging a review.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Why a review is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagReason {
    /// Spam or otherwise non-review content.
    Spam,
    /// Inappropriate language or dialogue.
    Language,
    /// A misplaced bug report or support request.
    BugSupport,
    /// Anything else.
    Other,
}

impl FlagReason {
    /// Every reason, in the order the flag overlay lists them.
    pub const ALL: [Self; 4] = [Self::Spam, Self::Language, Self::BugSupport, Self::Other];

    /// Returns the code submitted in the `flag` form field.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spam => "review_flag_reason_spam",
            Self::Language => "review_flag_reason_language",
            Self::BugSupport => "review_flag_reason_bug_support",
            Self::Other => "review_flag_reason_other",
        }
    }

    /// Returns the short name used in configuration and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Language => "language",
            Self::BugSupport => "bug_support",
            Self::Other => "other",
        }
    }

    /// Returns the menu label shown in the flag overlay.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spam => "Spam or otherwise non-review content",
            Self::Language => "Inappropriate language/dialog",
            Self::BugSupport => "Misplaced bug report or support request",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlagReason {
    type Err = PageError;

    /// Accepts either the short name (`spam`) or the wire code.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|reason| {
                reason.name().eq_ignore_ascii_case(trimmed) || reason.code() == trimmed
            })
            .ok_or_else(|| PageError::UnknownFlagReason {
                value: value.to_owned(),
            })
    }
}
