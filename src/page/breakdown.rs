//! Rating breakdown disclosure.
//!
//! Clicking the average-rating summary toggles the per-star breakdown panel.
//! Clicking anywhere inside the panel hides it again.

use crate::reviews::{Rating, ReviewRegistry};

/// Per-star counts shown in the breakdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingSummary {
    counts: [usize; 5],
}

impl RatingSummary {
    /// Counts the ratings of every review on the page.
    #[must_use]
    pub fn from_registry(registry: &ReviewRegistry) -> Self {
        let mut counts = [0_usize; 5];
        for rating in registry.ratings() {
            let index = usize::from(rating.value().saturating_sub(1));
            if let Some(count) = counts.get_mut(index) {
                *count = count.saturating_add(1);
            }
        }
        Self { counts }
    }

    /// Returns how many reviews gave `rating`.
    #[must_use]
    pub fn count(&self, rating: Rating) -> usize {
        let index = usize::from(rating.value().saturating_sub(1));
        self.counts.get(index).copied().unwrap_or_default()
    }

    /// Returns the number of rated reviews.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns the average rating in tenths of a star (e.g. 43 for 4.3).
    ///
    /// Returns `None` when no review carries a rating.
    #[must_use]
    pub fn average_tenths(&self) -> Option<usize> {
        let weighted: usize = Rating::ALL
            .into_iter()
            .map(|rating| self.count(rating).saturating_mul(usize::from(rating.value())))
            .sum();
        let total = self.total();
        let scaled = weighted.saturating_mul(10);
        // Round half up.
        scaled
            .saturating_add(total.checked_div(2)?)
            .checked_div(total)
    }

    /// Formats the average as `4.3`, or `-` when nothing is rated.
    #[must_use]
    pub fn average_label(&self) -> String {
        self.average_tenths().map_or_else(
            || "-".to_owned(),
            |tenths| {
                let (whole, fraction) = (tenths.checked_div(10), tenths.checked_rem(10));
                format!("{}.{}", whole.unwrap_or_default(), fraction.unwrap_or_default())
            },
        )
    }
}

/// Two-state disclosure of the breakdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingBreakdown {
    expanded: bool,
    summary: RatingSummary,
}

impl RatingBreakdown {
    /// Creates a collapsed breakdown for the page's reviews.
    #[must_use]
    pub fn new(registry: &ReviewRegistry) -> Self {
        Self {
            expanded: false,
            summary: RatingSummary::from_registry(registry),
        }
    }

    /// Returns true while the panel is shown.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the rating counts.
    #[must_use]
    pub const fn summary(&self) -> &RatingSummary {
        &self.summary
    }

    /// Shows the panel if hidden, hides it if shown.
    pub const fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Hides the panel in response to a click inside it.
    pub const fn dismiss(&mut self) {
        self.expanded = false;
    }
}
