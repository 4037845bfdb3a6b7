//! Star rating selector state.
//!
//! The edit form carries a plain `rating` select; the selector turns it into
//! a five-star control whose value can also be set programmatically.

use crate::reviews::Rating;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// One star in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarOption {
    /// The rating this star selects.
    pub rating: Rating,
    /// Whether the star is lit by the current selection.
    pub lit: bool,
}

/// A five-star rating control bound to a form's `rating` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingSelector {
    selected: Option<Rating>,
}

impl RatingSelector {
    /// Name of the form field the selector writes to.
    pub const FIELD_NAME: &'static str = "rating";

    /// Attaches an unrated selector to the form's rating control.
    #[must_use]
    pub const fn attach() -> Self {
        Self { selected: None }
    }

    /// Returns the selected rating, if any.
    #[must_use]
    pub const fn selected(self) -> Option<Rating> {
        self.selected
    }

    /// Selects a rating, as if its star was clicked.
    pub const fn select(&mut self, rating: Rating) {
        self.selected = Some(rating);
    }

    /// Selects the star whose value is `value`.
    ///
    /// Values without a matching star leave the selection unchanged and
    /// return false.
    pub fn select_value(&mut self, value: u8) -> bool {
        match Rating::new(value) {
            Ok(rating) => {
                self.select(rating);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the stars in ascending order with their lit state.
    pub fn options(self) -> impl Iterator<Item = StarOption> {
        Rating::ALL.into_iter().map(move |rating| StarOption {
            rating,
            lit: self.selected.is_some_and(|selected| rating <= selected),
        })
    }

    /// Renders the selector as a row of filled and empty stars.
    #[must_use]
    pub fn render(self) -> String {
        self.options()
            .map(|option| if option.lit { FILLED_STAR } else { EMPTY_STAR })
            .collect()
    }

    /// Returns the value submitted in the form field; empty when unrated.
    #[must_use]
    pub fn form_value(self) -> String {
        self.selected
            .map_or_else(String::new, |rating| rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn attached_selector_is_unrated() {
        let selector = RatingSelector::attach();

        assert_eq!(selector.selected(), None);
        assert_eq!(selector.render(), "☆☆☆☆☆");
        assert_eq!(selector.form_value(), "");
    }

    #[rstest]
    #[case(1, "★☆☆☆☆")]
    #[case(4, "★★★★☆")]
    #[case(5, "★★★★★")]
    fn select_value_lights_stars_up_to_value(#[case] value: u8, #[case] expected: &str) {
        let mut selector = RatingSelector::attach();

        assert!(selector.select_value(value));
        assert_eq!(selector.render(), expected);
        assert_eq!(selector.form_value(), value.to_string());
    }

    #[test]
    fn unknown_value_keeps_previous_selection() {
        let mut selector = RatingSelector::attach();
        assert!(selector.select_value(3));

        assert!(!selector.select_value(0));
        assert_eq!(selector.selected().map(Rating::value), Some(3));
    }
}
