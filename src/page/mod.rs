//! The review listing page controller.
//!
//! [`ReviewPage`] follows a message-driven update loop: every reader
//! interaction and every request completion arrives as a [`PageMsg`], is
//! applied synchronously by [`ReviewPage::handle_message`], and may yield a
//! [`Command`] for work that has to wait on the site.
//!
//! # Modules
//!
//! - [`router`]: maps action link tags to flows
//! - [`overlay`]: exclusive overlay bookkeeping
//! - [`deletion`], [`flag`], [`edit`]: the per-review action flows
//! - [`reveal`]: batched "load more"
//! - [`breakdown`]: the rating breakdown panel

use std::sync::Arc;

use crate::error::PageError;
use crate::gateway::ReviewActionGateway;
use crate::reviews::{Review, ReviewId, ReviewListing, ReviewRegistry};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod breakdown;
mod command;
pub mod deletion;
pub mod edit;
pub mod flag;
mod handlers;
mod messages;
pub mod overlay;
pub mod rating_selector;
pub mod reveal;
pub mod router;


pub use breakdown::{RatingBreakdown, RatingSummary};
pub use command::Command;
pub use deletion::DeletionFlow;
pub use edit::{DEFAULT_EDIT_TEMPLATE, EditDraft, EditFlow};
pub use flag::{FlagFlow, FlagPhase};
pub use messages::{PageMsg, PageNotice};
pub use overlay::{ActiveOverlay, OverlayKind, OverlayManager, OverlayState};
pub use rating_selector::RatingSelector;
pub use reveal::{REVEAL_BATCH_SIZE, RevealController, RevealCursor, RevealOutcome};
pub use router::{ActionTag, EventDisposition, Route};

/// Controller for one review listing page view.
pub struct ReviewPage {
    registry: ReviewRegistry,
    overlays: OverlayManager,
    deletion: DeletionFlow,
    flag: FlagFlow,
    edit: EditFlow,
    reveal: RevealController,
    breakdown: RatingBreakdown,
    more_url: Option<String>,
    body_max_length: Option<usize>,
    notices: Vec<PageNotice>,
    last_error: Option<PageError>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl ReviewPage {
    /// Creates a page for `listing`, issuing requests through `gateway`.
    #[must_use]
    pub fn new(listing: ReviewListing, gateway: Arc<dyn ReviewActionGateway>) -> Self {
        let ReviewListing {
            reviews,
            more_url,
            body_max_length,
        } = listing;
        let registry = ReviewRegistry::new(reviews);
        let reveal = RevealController::new(&registry);
        let breakdown = RatingBreakdown::new(&registry);
        Self {
            registry,
            overlays: OverlayManager::new(),
            deletion: DeletionFlow::new(Arc::clone(&gateway)),
            flag: FlagFlow::new(gateway),
            edit: EditFlow::default().with_body_max_length(body_max_length),
            reveal,
            breakdown,
            more_url,
            body_max_length,
            notices: Vec::new(),
            last_error: None,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Records telemetry events to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Renders the edit overlay with `template` instead of the default form.
    #[must_use]
    pub fn with_edit_template(mut self, template: impl Into<String>) -> Self {
        self.edit = EditFlow::new(template).with_body_max_length(self.body_max_length);
        self
    }

    /// Returns the reviews on the page.
    #[must_use]
    pub const fn registry(&self) -> &ReviewRegistry {
        &self.registry
    }

    /// Looks up a review by id.
    #[must_use]
    pub fn review(&self, id: ReviewId) -> Option<&Review> {
        self.registry.get(id)
    }

    /// Returns the overlay bookkeeping.
    #[must_use]
    pub const fn overlays(&self) -> &OverlayManager {
        &self.overlays
    }

    /// Returns the flag flow's phase.
    #[must_use]
    pub const fn flag_phase(&self) -> FlagPhase {
        self.flag.phase()
    }

    /// Returns the open edit draft.
    #[must_use]
    pub const fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit.draft()
    }

    /// Returns the reveal cursor.
    #[must_use]
    pub const fn reveal_cursor(&self) -> RevealCursor {
        self.reveal.cursor()
    }

    /// Returns the rating breakdown panel.
    #[must_use]
    pub const fn breakdown(&self) -> &RatingBreakdown {
        &self.breakdown
    }

    /// Returns the URL of the next server page, if the listing has one.
    #[must_use]
    pub fn more_url(&self) -> Option<&str> {
        self.more_url.as_deref()
    }

    /// Returns notices raised since they were last taken.
    #[must_use]
    pub fn notices(&self) -> &[PageNotice] {
        &self.notices
    }

    /// Drains the pending notices.
    pub fn take_notices(&mut self) -> Vec<PageNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Returns the last error raised while opening an overlay.
    #[must_use]
    pub const fn last_error(&self) -> Option<&PageError> {
        self.last_error.as_ref()
    }

    /// Handles a message and returns any follow-up command.
    pub fn handle_message(&mut self, msg: &PageMsg) -> Option<Command> {
        match msg {
            PageMsg::ActionClicked { review, tag } => {
                self.dispatch_action(*review, tag.as_deref()).1
            }
            PageMsg::DeleteSucceeded(review) => {
                self.handle_delete_succeeded(*review);
                None
            }
            PageMsg::DeleteFailed { review, message } => {
                self.handle_delete_failed(*review, message);
                None
            }
            PageMsg::FlagReasonChosen(reason) => {
                self.flag
                    .submit(*reason, &mut self.registry, &mut self.overlays)
            }
            PageMsg::FlagCancelled => {
                self.flag.cancel(&mut self.overlays);
                None
            }
            PageMsg::FlagSucceeded(review) => {
                self.handle_flag_succeeded(*review);
                None
            }
            PageMsg::FlagFailed { review, message } => {
                self.handle_flag_failed(*review, message);
                None
            }
            PageMsg::EditRatingSelected(rating) => {
                self.edit.select_rating(*rating);
                None
            }
            PageMsg::EditBodyChanged(body) => {
                self.edit.update_body(body);
                None
            }
            PageMsg::EditCancelled => {
                self.edit.cancel(&mut self.overlays);
                None
            }
            PageMsg::LoadMoreClicked => {
                self.load_more();
                None
            }
            PageMsg::BreakdownToggled => {
                self.breakdown.toggle();
                None
            }
            PageMsg::BreakdownClicked => {
                self.breakdown.dismiss();
                None
            }
        }
    }

    /// Handles `msg` and runs every resulting command to completion.
    pub async fn process(&mut self, msg: &PageMsg) {
        let mut next = self.handle_message(msg);
        while let Some(command) = next {
            let completion = command.resolve().await;
            next = self.handle_message(&completion);
        }
    }
}

impl std::fmt::Debug for ReviewPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewPage")
            .field("registry", &self.registry)
            .field("overlays", &self.overlays)
            .field("flag", &self.flag)
            .field("edit", &self.edit)
            .field("reveal", &self.reveal)
            .field("breakdown", &self.breakdown)
            .field("notices", &self.notices)
            .finish_non_exhaustive()
    }
}
