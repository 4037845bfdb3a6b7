//! Scenario state for review action BDD tests.

use std::sync::Arc;

use kudos::gateway::test_support::ScriptedGateway;
use kudos::{Command, Review, ReviewId, ReviewPage};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a review action scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ActionState {
    /// Runtime driving request commands.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Reviews staged before the page is built.
    pub(crate) reviews: Slot<Vec<Review>>,
    /// Gateway the page sends requests through.
    pub(crate) gateway: Slot<Arc<ScriptedGateway>>,
    /// The page controller under test.
    pub(crate) page: Slot<ReviewPage>,
    /// A request command that has not been resolved yet.
    pub(crate) pending: Slot<Command>,
}

/// Creates `count` visible reviews with sequential IDs starting from 1.
pub(crate) fn reviews(count: u64) -> Vec<Review> {
    (1..=count)
        .map(|id| Review::new(ReviewId::new(id), format!("Review {id}")))
        .collect()
}
