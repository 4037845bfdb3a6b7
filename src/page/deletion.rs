//! Optimistic review deletion.
//!
//! A review moves `Idle → PendingDelete → Deleted`. The "deleting" marker is
//! applied before the request is issued. Deleted reviews stay in the listing
//! with a "deleted" marker so positions used by the reveal cursor never
//! shift. A failed request puts the review back to `Idle` and raises a
//! retryable notice.

use std::sync::Arc;

use crate::gateway::ReviewActionGateway;
use crate::reviews::{DeletionState, Review};

use super::command::Command;
use super::messages::{PageMsg, PageNotice};

/// Drives deletion requests for reviews on the page.
#[derive(Clone)]
pub struct DeletionFlow {
    gateway: Arc<dyn ReviewActionGateway>,
}

impl DeletionFlow {
    /// Creates a flow issuing requests through `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewActionGateway>) -> Self {
        Self { gateway }
    }

    /// Starts deleting `review`.
    ///
    /// Only valid from [`DeletionState::Idle`]; otherwise nothing happens and
    /// no request is issued.
    pub fn start(&self, review: &mut Review) -> Option<Command> {
        if review.deletion != DeletionState::Idle {
            tracing::debug!(
                "ignoring delete for review {} in state {:?}",
                review.id,
                review.deletion
            );
            return None;
        }

        review.deletion = DeletionState::PendingDelete;

        let gateway = Arc::clone(&self.gateway);
        let review_id = review.id;
        let delete_url = review.delete_url.clone();
        Some(Command::new(async move {
            match gateway.delete_review(&delete_url).await {
                Ok(()) => PageMsg::DeleteSucceeded(review_id),
                Err(error) => PageMsg::DeleteFailed {
                    review: review_id,
                    message: error.to_string(),
                },
            }
        }))
    }

    /// Applies a successful deletion.
    ///
    /// Returns false when the review was not awaiting deletion.
    pub fn succeed(review: &mut Review) -> bool {
        if review.deletion != DeletionState::PendingDelete {
            return false;
        }
        review.deletion = DeletionState::Deleted;
        true
    }

    /// Reverts a failed deletion and returns the notice to surface.
    pub fn fail(review: &mut Review, message: &str) -> Option<PageNotice> {
        if review.deletion != DeletionState::PendingDelete {
            return None;
        }
        tracing::warn!("deleting review {} failed: {message}", review.id);
        review.deletion = DeletionState::Idle;
        Some(PageNotice::DeleteFailed {
            review: review.id,
            message: message.to_owned(),
        })
    }
}

impl std::fmt::Debug for DeletionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionFlow").finish_non_exhaustive()
    }
}
