//! Inline review editing.
//!
//! Opening the edit overlay renders the edit form template with the review's
//! edit URL and current body, attaches a [`RatingSelector`] to the form's
//! rating control and pre-selects the review's rating. Submission is a native
//! form post and is not intercepted; the draft only mirrors what the form
//! would send so the body counter and rating stay in step.

use minijinja::{AutoEscape, Environment, Value, context};

use crate::error::PageError;
use crate::reviews::{Rating, Review, ReviewId};

use super::overlay::{ActiveOverlay, OverlayKind, OverlayManager};
use super::rating_selector::RatingSelector;

/// Edit form markup used unless the page supplies its own template.
pub const DEFAULT_EDIT_TEMPLATE: &str = r##"<form method="post" action="{{ action }}" class="edit-review">
  <select name="rating">
    <option value="">Rate this app</option>
    <option value="1">1</option>
    <option value="2">2</option>
    <option value="3">3</option>
    <option value="4">4</option>
    <option value="5">5</option>
  </select>
  <textarea name="body">{{ body }}</textarea>
  <button type="submit">Update review</button>
  <a href="#" class="cancel">Cancel</a>
</form>"##;

/// The edit form's live state while the overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    target: ReviewId,
    action: String,
    body: String,
    rating: RatingSelector,
    max_length: Option<usize>,
}

impl EditDraft {
    /// Returns the review being edited.
    #[must_use]
    pub const fn target(&self) -> ReviewId {
        self.target
    }

    /// Returns the URL the form posts to.
    #[must_use]
    pub const fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Returns the current body text.
    #[must_use]
    pub const fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Returns the rating selector.
    #[must_use]
    pub const fn rating(&self) -> RatingSelector {
        self.rating
    }

    /// Returns the body length in Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }

    /// Returns the characters left before the body limit, when there is one.
    #[must_use]
    pub fn remaining_chars(&self) -> Option<usize> {
        self.max_length
            .map(|max_length| max_length.saturating_sub(self.char_count()))
    }

    /// Returns true when the body is longer than the limit.
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.max_length
            .is_some_and(|max_length| self.char_count() > max_length)
    }

    /// Returns the fields a native submission of the form carries.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("action", self.action.clone()),
            ("body", self.body.clone()),
            (RatingSelector::FIELD_NAME, self.rating.form_value()),
        ]
    }
}

/// Prepares the edit overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFlow {
    template: String,
    max_length: Option<usize>,
    draft: Option<EditDraft>,
}

impl Default for EditFlow {
    fn default() -> Self {
        Self::new(DEFAULT_EDIT_TEMPLATE)
    }
}

impl EditFlow {
    /// Creates a flow rendering `template`, which receives `action` and `body`.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            max_length: None,
            draft: None,
        }
    }

    /// Limits the body length reported by drafts.
    #[must_use]
    pub const fn with_body_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Returns the open draft, if the overlay is open.
    #[must_use]
    pub const fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Opens the edit overlay for `review`.
    ///
    /// Returns the overlay this one displaced.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] when the template cannot be rendered.
    /// Nothing is shown in that case.
    pub fn open(
        &mut self,
        review: &Review,
        overlays: &mut OverlayManager,
    ) -> Result<Option<ActiveOverlay>, PageError> {
        let markup = render_edit_form(&self.template, &review.edit_url, &review.body)?;

        let mut rating = RatingSelector::attach();
        if let Some(current) = review.rating {
            rating.select_value(current.value());
        }

        let displaced = overlays.show(OverlayKind::Edit, review.id);
        overlays.set_content(markup);
        self.draft = Some(EditDraft {
            target: review.id,
            action: review.edit_url.clone(),
            body: review.body.clone(),
            rating,
            max_length: self.max_length,
        });
        Ok(displaced)
    }

    /// Closes the overlay without side effects on the review.
    pub fn cancel(&mut self, overlays: &mut OverlayManager) {
        if overlays.is_showing(OverlayKind::Edit) {
            overlays.hide();
        }
        self.draft = None;
    }

    /// Drops the draft after another overlay replaced the edit overlay.
    pub fn abandon(&mut self) {
        self.draft = None;
    }

    /// Selects a rating in the open form.
    pub fn select_rating(&mut self, rating: Rating) {
        if let Some(draft) = self.draft.as_mut() {
            draft.rating.select(rating);
        }
    }

    /// Replaces the body text of the open form.
    pub fn update_body(&mut self, body: &str) {
        if let Some(draft) = self.draft.as_mut() {
            body.clone_into(&mut draft.body);
        }
    }
}

/// Renders the edit form with the review body inserted as markup.
///
/// The body is server-sanitised markup and is inserted as-is. Every other
/// value, including the form action, is HTML-escaped.
///
/// # Errors
///
/// Returns [`PageError::Template`] when `template_source` fails to parse or
/// render.
pub fn render_edit_form(
    template_source: &str,
    action: &str,
    body: &str,
) -> Result<String, PageError> {
    let mut environment = Environment::new();
    environment.set_auto_escape_callback(|_| AutoEscape::Html);

    environment
        .add_template("edit", template_source)
        .map_err(|error| PageError::Template {
            message: error.to_string(),
        })?;

    let template = environment
        .get_template("edit")
        .map_err(|error| PageError::Template {
            message: error.to_string(),
        })?;

    template
        .render(context! {
            action => action,
            body => Value::from_safe_string(body.to_owned()),
        })
        .map_err(|error| PageError::Template {
            message: error.to_string(),
        })
}
