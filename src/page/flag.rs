//! Abuse flagging of reviews.
//!
//! The flow moves `Closed → Open → Submitting → Closed`. Submitting hides the
//! overlay at once and switches the review's report control to "Sending
//! report..." before the request resolves. Success replaces the control with
//! a static "Flagged for review" label; failure restores the control so the
//! reader can try again.

use std::sync::Arc;

use crate::gateway::ReviewActionGateway;
use crate::reviews::{FlagReason, FlagStatus, Review, ReviewId, ReviewRegistry};

use super::command::Command;
use super::messages::{PageMsg, PageNotice};
use super::overlay::{ActiveOverlay, OverlayKind, OverlayManager};

/// Where the flag flow is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagPhase {
    /// No flag interaction is in progress.
    #[default]
    Closed,
    /// The flag overlay is open for a review.
    Open {
        /// Review being reported.
        target: ReviewId,
    },
    /// A flag was submitted and the request has not resolved.
    Submitting {
        /// Review being reported.
        target: ReviewId,
        /// Reason sent to the site.
        reason: FlagReason,
    },
}

/// Drives the flag overlay and flag requests.
#[derive(Clone)]
pub struct FlagFlow {
    gateway: Arc<dyn ReviewActionGateway>,
    phase: FlagPhase,
    in_flight: Vec<(ReviewId, FlagReason)>,
}

impl FlagFlow {
    /// Creates a closed flow issuing requests through `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewActionGateway>) -> Self {
        Self {
            gateway,
            phase: FlagPhase::Closed,
            in_flight: Vec::new(),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> FlagPhase {
        self.phase
    }

    /// Opens the flag overlay for `review`.
    ///
    /// Any other overlay is closed first; an earlier open flag overlay for a
    /// different review is abandoned. Returns the displaced overlay. Reviews
    /// that were already flagged or are being flagged do not reopen.
    pub fn open(&mut self, review: &Review, overlays: &mut OverlayManager) -> Option<ActiveOverlay> {
        if !review.flag_status.is_interactive() {
            tracing::debug!(
                "review {} report control is not interactive ({:?})",
                review.id,
                review.flag_status
            );
            return None;
        }

        let displaced = overlays.show(OverlayKind::Flag, review.id);
        self.phase = FlagPhase::Open { target: review.id };
        displaced
    }

    /// Closes the overlay and discards the target. Only acts while open.
    pub fn cancel(&mut self, overlays: &mut OverlayManager) {
        if !matches!(self.phase, FlagPhase::Open { .. }) {
            return;
        }
        if overlays.is_showing(OverlayKind::Flag) {
            overlays.hide();
        }
        self.phase = FlagPhase::Closed;
    }

    /// Forgets an open overlay that another overlay replaced.
    pub const fn abandon(&mut self) {
        if let FlagPhase::Open { .. } = self.phase {
            self.phase = FlagPhase::Closed;
        }
    }

    /// Submits `reason` for the review the overlay is open for.
    ///
    /// Returns `None` when the overlay is not open or its target has left the
    /// listing.
    pub fn submit(
        &mut self,
        reason: FlagReason,
        registry: &mut ReviewRegistry,
        overlays: &mut OverlayManager,
    ) -> Option<Command> {
        let FlagPhase::Open { target } = self.phase else {
            tracing::debug!("flag reason {reason} chosen with no flag overlay open");
            return None;
        };

        overlays.select_reason(reason);
        overlays.hide();

        let Some(review) = registry.get_mut(target) else {
            self.phase = FlagPhase::Closed;
            return None;
        };
        review.flag_status = FlagStatus::Sending;
        self.phase = FlagPhase::Submitting { target, reason };
        self.in_flight.push((target, reason));

        let gateway = Arc::clone(&self.gateway);
        let flag_url = review.flag_url.clone();
        Some(Command::new(async move {
            match gateway.flag_review(&flag_url, reason).await {
                Ok(_) => PageMsg::FlagSucceeded(target),
                Err(error) => PageMsg::FlagFailed {
                    review: target,
                    message: error.to_string(),
                },
            }
        }))
    }

    /// Applies an accepted flag.
    ///
    /// Returns the reason that was submitted, or `None` when the review had
    /// no flag request in flight.
    pub fn succeed(&mut self, review: &mut Review) -> Option<FlagReason> {
        self.finish(review.id);
        let reason = self.take_in_flight(review.id)?;
        if review.flag_status == FlagStatus::Sending {
            review.flag_status = FlagStatus::Flagged;
        }
        Some(reason)
    }

    /// Restores the report control after a failed flag.
    pub fn fail(&mut self, review: &mut Review, message: &str) -> Option<PageNotice> {
        self.finish(review.id);
        self.take_in_flight(review.id)?;
        if review.flag_status != FlagStatus::Sending {
            return None;
        }
        tracing::warn!("flagging review {} failed: {message}", review.id);
        review.flag_status = FlagStatus::Available;
        Some(PageNotice::FlagFailed {
            review: review.id,
            message: message.to_owned(),
        })
    }

    /// Closes the submission phase if it belongs to `review`.
    const fn finish(&mut self, review: ReviewId) {
        if let FlagPhase::Submitting { target, .. } = self.phase
            && target.get() == review.get()
        {
            self.phase = FlagPhase::Closed;
        }
    }

    fn take_in_flight(&mut self, review: ReviewId) -> Option<FlagReason> {
        let index = self.in_flight.iter().position(|(id, _)| *id == review)?;
        Some(self.in_flight.remove(index).1)
    }
}

impl std::fmt::Debug for FlagFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagFlow")
            .field("phase", &self.phase)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
