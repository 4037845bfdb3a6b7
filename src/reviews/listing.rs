//! Server-rendered listing snapshot loading.
//!
//! The page's initial state is a JSON document describing the reviews in
//! display order, the URL of the next server page, and the maximum length of
//! a review body.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::files::read_utf8;

use super::models::Review;

/// The review listing as rendered by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewListing {
    /// Reviews in display order.
    pub reviews: Vec<Review>,
    /// URL of the next page of reviews, if the server has more.
    #[serde(default)]
    pub more_url: Option<String>,
    /// Maximum number of characters accepted in a review body.
    #[serde(default)]
    pub body_max_length: Option<usize>,
}

impl ReviewListing {
    /// Creates a listing with the given reviews and no further pages.
    #[must_use]
    pub const fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            more_url: None,
            body_max_length: None,
        }
    }

    /// Sets the next-page URL.
    #[must_use]
    pub fn with_more_url(mut self, url: impl Into<String>) -> Self {
        self.more_url = Some(url.into());
        self
    }

    /// Sets the maximum review body length.
    #[must_use]
    pub const fn with_body_max_length(mut self, max_length: usize) -> Self {
        self.body_max_length = Some(max_length);
        self
    }

    /// Reads a listing snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Io`] when the file cannot be opened, read, or
    /// parsed.
    pub fn read(path: &Utf8Path) -> Result<Self, PageError> {
        let content = read_utf8(path, "listing")?;

        serde_json::from_str(&content).map_err(|error| PageError::Io {
            message: format!("failed to parse listing '{path}': {error}"),
        })
    }
}

/// Resolves a configured listing path into a UTF-8 path.
#[must_use]
pub fn listing_path(raw: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::reviews::ReviewId;

    #[test]
    fn read_parses_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "reviews": [{{
                    "id": 3,
                    "anchor": "review-3",
                    "body": "Solid",
                    "rating": 5,
                    "flag_url": "/reviews/3/flag",
                    "edit_url": "/reviews/3/edit",
                    "delete_url": "/reviews/3/delete"
                }}],
                "more_url": "/reviews?page=2",
                "body_max_length": 150
            }}"#
        )
        .expect("write snapshot");

        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 path");
        let listing = ReviewListing::read(&path).expect("listing should load");

        assert_eq!(listing.reviews.len(), 1);
        assert_eq!(
            listing.reviews.first().map(|review| review.id),
            Some(ReviewId::new(3))
        );
        assert_eq!(listing.more_url.as_deref(), Some("/reviews?page=2"));
        assert_eq!(listing.body_max_length, Some(150));
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf-8 path");

        let result = ReviewListing::read(&path);

        assert!(
            matches!(result, Err(PageError::Io { .. })),
            "expected Io error, got {result:?}"
        );
    }
}
