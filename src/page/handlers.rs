//! Per-action handlers for [`ReviewPage`].
//!
//! These apply flow outcomes to the page: telemetry, notices and overlay
//! hand-over between the flag and edit flows.

use crate::reviews::ReviewId;
use crate::telemetry::TelemetryEvent;

use super::command::Command;
use super::deletion::DeletionFlow;
use super::messages::PageNotice;
use super::overlay::{ActiveOverlay, OverlayKind};
use super::reveal::RevealOutcome;
use super::router::{ActionTag, EventDisposition, route};
use super::ReviewPage;

impl ReviewPage {
    /// Routes a click on an action link inside `review`.
    ///
    /// Returns how the click event should be treated together with any
    /// request the action started. Links without a tag pass through; tagged
    /// links are always consumed, including unknown tags.
    pub fn dispatch_action(
        &mut self,
        review: ReviewId,
        tag: Option<&str>,
    ) -> (EventDisposition, Option<Command>) {
        let routed = route(tag);
        let command = match routed.action {
            Some(ActionTag::Delete) => self.start_delete(review),
            Some(ActionTag::Report) => {
                self.open_flag(review);
                None
            }
            Some(ActionTag::Edit) => {
                self.open_edit(review);
                None
            }
            None => None,
        };
        (routed.disposition, command)
    }

    /// Reveals the next batch of hidden reviews.
    pub fn load_more(&mut self) -> RevealOutcome {
        let outcome = self.reveal.load_more(&mut self.registry);
        let cursor = self.reveal.cursor();

        if !outcome.revealed.is_empty() {
            self.telemetry.record(TelemetryEvent::ReviewsRevealed {
                revealed: outcome.revealed.len(),
                visible: cursor.visible(),
                total: cursor.total(),
            });
        }
        if outcome.exhausted {
            tracing::debug!("all {} reviews are visible", cursor.total());
            self.telemetry.record(TelemetryEvent::RevealExhausted {
                total: cursor.total(),
            });
            self.notices.push(PageNotice::RevealExhausted {
                next_page: self.more_url.clone(),
            });
        }
        outcome
    }

    fn start_delete(&mut self, id: ReviewId) -> Option<Command> {
        let Some(review) = self.registry.get_mut(id) else {
            tracing::debug!("delete clicked for unknown review {id}");
            return None;
        };
        self.deletion.start(review)
    }

    fn open_flag(&mut self, id: ReviewId) {
        let Some(review) = self.registry.get(id) else {
            tracing::debug!("report clicked for unknown review {id}");
            return;
        };
        let displaced = self.flag.open(review, &mut self.overlays);
        self.release_displaced(displaced, OverlayKind::Flag);
    }

    fn open_edit(&mut self, id: ReviewId) {
        let Some(review) = self.registry.get(id) else {
            tracing::debug!("edit clicked for unknown review {id}");
            return;
        };
        match self.edit.open(review, &mut self.overlays) {
            Ok(displaced) => {
                self.last_error = None;
                self.release_displaced(displaced, OverlayKind::Edit);
            }
            Err(error) => {
                tracing::warn!("cannot open edit form for review {id}: {error}");
                self.last_error = Some(error);
            }
        }
    }

    /// Lets the flow whose overlay was replaced forget its state.
    fn release_displaced(&mut self, displaced: Option<ActiveOverlay>, shown: OverlayKind) {
        let Some(previous) = displaced else {
            return;
        };
        match (previous.kind, shown) {
            (OverlayKind::Flag, OverlayKind::Edit) => self.flag.abandon(),
            (OverlayKind::Edit, OverlayKind::Flag) => self.edit.abandon(),
            _ => {}
        }
    }

    pub(super) fn handle_delete_succeeded(&mut self, id: ReviewId) {
        let Some(review) = self.registry.get_mut(id) else {
            return;
        };
        if DeletionFlow::succeed(review) {
            self.telemetry
                .record(TelemetryEvent::ReviewDeleted { review_id: id.get() });
        }
    }

    pub(super) fn handle_delete_failed(&mut self, id: ReviewId, message: &str) {
        let Some(review) = self.registry.get_mut(id) else {
            return;
        };
        if let Some(notice) = DeletionFlow::fail(review, message) {
            self.telemetry.record(TelemetryEvent::ReviewDeleteFailed {
                review_id: id.get(),
                message: message.to_owned(),
            });
            self.notices.push(notice);
        }
    }

    pub(super) fn handle_flag_succeeded(&mut self, id: ReviewId) {
        let Some(review) = self.registry.get_mut(id) else {
            return;
        };
        if let Some(reason) = self.flag.succeed(review) {
            self.telemetry.record(TelemetryEvent::ReviewFlagged {
                review_id: id.get(),
                reason: reason.name().to_owned(),
            });
        }
    }

    pub(super) fn handle_flag_failed(&mut self, id: ReviewId, message: &str) {
        let Some(review) = self.registry.get_mut(id) else {
            return;
        };
        if let Some(notice) = self.flag.fail(review, message) {
            self.telemetry.record(TelemetryEvent::ReviewFlagFailed {
                review_id: id.get(),
                message: message.to_owned(),
            });
            self.notices.push(notice);
        }
    }
}
