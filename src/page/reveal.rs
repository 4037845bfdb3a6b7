//! Incremental "load more" reveal of hidden reviews.
//!
//! The controller keeps an index cursor over the listing's display order.
//! Each activation reveals up to [`REVEAL_BATCH_SIZE`] hidden reviews after
//! the cursor and advances it. Once no review on the page is hidden the
//! controller reports exhaustion on every activation; fetching another server
//! page is left to the caller.

use crate::reviews::{ReviewId, ReviewRegistry, Visibility};

/// Reviews revealed per "load more" activation.
pub const REVEAL_BATCH_SIZE: usize = 5;

/// Progress of the reveal within the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCursor {
    next: usize,
    visible: usize,
    hidden: usize,
    total: usize,
}

impl RevealCursor {
    fn observe(next: usize, registry: &ReviewRegistry) -> Self {
        let total = registry.len();
        let hidden = registry.hidden_count();
        Self {
            next,
            visible: total.saturating_sub(hidden),
            hidden,
            total,
        }
    }

    /// Returns the number of reviews currently visible.
    #[must_use]
    pub const fn visible(self) -> usize {
        self.visible
    }

    /// Returns the number of reviews still hidden.
    #[must_use]
    pub const fn hidden(self) -> usize {
        self.hidden
    }

    /// Returns the number of reviews known on the page.
    #[must_use]
    pub const fn total(self) -> usize {
        self.total
    }

    /// Returns the display position the next batch starts from.
    #[must_use]
    pub const fn next_position(self) -> usize {
        self.next
    }

    /// Returns true when no review on the page is hidden.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.hidden == 0
    }
}

/// What one "load more" activation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    /// Reviews made visible, in display order.
    pub revealed: Vec<ReviewId>,
    /// Anchor the view should jump to, from the first revealed review.
    pub jump_to: Option<String>,
    /// True when no hidden reviews remain after this activation.
    pub exhausted: bool,
}

/// Reveals hidden reviews in fixed-size batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealController {
    cursor: RevealCursor,
}

impl RevealController {
    /// Starts the cursor just after the last visible review.
    #[must_use]
    pub fn new(registry: &ReviewRegistry) -> Self {
        Self {
            cursor: RevealCursor::observe(registry.position_after_last_visible(), registry),
        }
    }

    /// Returns the cursor.
    #[must_use]
    pub const fn cursor(&self) -> RevealCursor {
        self.cursor
    }

    /// Reveals the next batch of hidden reviews.
    ///
    /// Calling this after exhaustion reveals nothing and reports exhaustion
    /// again.
    pub fn load_more(&mut self, registry: &mut ReviewRegistry) -> RevealOutcome {
        let mut position = self.cursor.next;
        let mut revealed = Vec::new();
        let mut jump_to = None;

        while revealed.len() < REVEAL_BATCH_SIZE {
            let Some(review) = registry.at_mut(position) else {
                break;
            };
            position = position.saturating_add(1);
            if !review.visibility.is_hidden() {
                continue;
            }
            review.visibility = Visibility::Visible;
            if revealed.is_empty() {
                jump_to.clone_from(&review.anchor);
            }
            revealed.push(review.id);
        }

        self.cursor = RevealCursor::observe(position, registry);

        RevealOutcome {
            revealed,
            jump_to,
            exhausted: self.cursor.is_exhausted(),
        }
    }
}
