//! Error types exposed by the review listing controller.

use thiserror::Error;

/// Errors surfaced while loading a listing or performing review actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    /// No listing snapshot path was configured.
    #[error("review listing path is required")]
    MissingListing,

    /// No review identifier was configured for an action that needs one.
    #[error("review identifier is required for action '{action}'")]
    MissingReview {
        /// The action that required a review target.
        action: String,
    },

    /// No action was configured.
    #[error("an action is required (delete, report, edit, load-more, breakdown)")]
    MissingAction,

    /// An unsupported CLI argument or configuration value was supplied.
    #[error("unrecognised argument: {argument}")]
    InvalidArgument {
        /// The value that could not be interpreted.
        argument: String,
    },

    /// The requested review is not present in the listing.
    #[error("review {id} is not in the listing")]
    UnknownReview {
        /// Identifier that failed to resolve.
        id: u64,
    },

    /// A flag reason did not match any known reason.
    #[error("unknown flag reason '{value}' (expected spam, language, bug_support or other)")]
    UnknownFlagReason {
        /// The rejected reason value.
        value: String,
    },

    /// A rating value fell outside the 1 to 5 range.
    #[error("rating must be between 1 and 5, got {value}")]
    InvalidRating {
        /// The rejected rating value.
        value: u8,
    },

    /// A review or site URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed while calling the site.
    #[error("network error talking to the site: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The site answered with a non-success status.
    #[error("site returned status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The site answered successfully but the body could not be decoded.
    #[error("unexpected response from site: {message}")]
    InvalidResponse {
        /// Decoding failure detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The edit overlay template failed to parse or render.
    #[error("edit template error: {message}")]
    Template {
        /// Human-readable message from `MiniJinja`.
        message: String,
    },
}
