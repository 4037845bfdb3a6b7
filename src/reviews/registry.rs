//! Ordered, page-scoped owner of the listed reviews.

use super::models::{Rating, Review, ReviewId};

/// The reviews on the page in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewRegistry {
    reviews: Vec<Review>,
}

impl ReviewRegistry {
    /// Builds a registry, applying each review's server-rendered visibility.
    #[must_use]
    pub fn new(mut reviews: Vec<Review>) -> Self {
        for review in &mut reviews {
            review.sync_visibility();
        }
        Self { reviews }
    }

    /// Returns the review with the given identifier.
    #[must_use]
    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == id)
    }

    /// Returns a mutable handle on the review with the given identifier.
    pub fn get_mut(&mut self, id: ReviewId) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|review| review.id == id)
    }

    /// Returns the reviews in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }

    /// Returns a mutable handle on the review at a display position.
    pub fn at_mut(&mut self, position: usize) -> Option<&mut Review> {
        self.reviews.get_mut(position)
    }

    /// Returns the number of reviews on the page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Returns true when the page lists no reviews.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Returns the number of reviews currently hidden.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.reviews
            .iter()
            .filter(|review| review.visibility.is_hidden())
            .count()
    }

    /// Returns the display position just after the last visible review.
    ///
    /// Hidden reviews before that position are never revealed by "load
    /// more"; the reveal always continues after the last visible entry.
    #[must_use]
    pub fn position_after_last_visible(&self) -> usize {
        self.reviews
            .iter()
            .rposition(|review| !review.visibility.is_hidden())
            .map_or(0, |index| index.saturating_add(1))
    }

    /// Returns the ratings of all reviews that carry one.
    pub fn ratings(&self) -> impl Iterator<Item = Rating> + '_ {
        self.reviews.iter().filter_map(|review| review.rating)
    }
}
