//! Behavioural tests for per-review actions on the listing page.

#[path = "review_actions_bdd/mod.rs"]
mod review_actions_bdd_support;
mod support;

use std::sync::Arc;

use kudos::gateway::test_support::{RecordedRequest, ScriptedGateway};
use kudos::page::FlagPhase;
use kudos::{
    DeletionState, FlagReason, OverlayKind, PageError, PageMsg, Rating, ReviewActionGateway,
    ReviewId, ReviewListing, ReviewPage,
};
use review_actions_bdd_support::{ActionState, reviews};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::runtime::ensure_runtime;

#[fixture]
fn action_state() -> ActionState {
    ActionState::default()
}

/// Builds the page from the staged reviews on first use.
#[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
fn ensure_page(state: &ActionState) {
    if state.page.with_ref(|_| ()).is_some() {
        return;
    }
    let gateway = state.gateway.get().expect("gateway not initialised");
    let staged = state.reviews.take().expect("reviews not staged");
    let page = ReviewPage::new(
        ReviewListing::new(staged),
        gateway as Arc<dyn ReviewActionGateway>,
    );
    state.page.set(page);
}

/// Sends `msg` to the page and runs any resulting request to completion.
#[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
fn process(state: &ActionState, msg: &PageMsg) {
    ensure_page(state);
    let runtime = ensure_runtime(&state.runtime).expect("runtime should start");
    let mut page = state.page.take().expect("page not initialised");
    runtime.block_on(page.process(msg));
    state.page.set(page);
}

fn click(review: u64, tag: &str) -> PageMsg {
    PageMsg::ActionClicked {
        review: ReviewId::new(review),
        tag: Some(tag.to_owned()),
    }
}

#[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
fn read_page<T>(state: &ActionState, f: impl FnOnce(&ReviewPage) -> T) -> T {
    state.page.with_ref(f).expect("page not initialised")
}

// Given steps

#[given("a listing with {count:u64} reviews")]
fn given_listing(action_state: &ActionState, count: u64) {
    action_state.reviews.set(reviews(count));
    action_state.gateway.set(Arc::new(ScriptedGateway::new()));
}

#[given("review {id:u64} is rated {rating:u8}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn given_review_rated(action_state: &ActionState, id: u64, rating: u8) {
    let value = Rating::new(rating).expect("rating should be valid");
    action_state
        .reviews
        .with_mut(|staged| {
            if let Some(review) = staged.iter_mut().find(|review| review.id.get() == id) {
                review.rating = Some(value);
            }
        })
        .expect("reviews not staged");
}

#[given("the site rejects the next delete")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn given_delete_rejected(action_state: &ActionState) {
    action_state
        .gateway
        .with_ref(|gateway| {
            gateway.push_delete_outcome(Err(PageError::Api {
                status: 500,
                message: "Internal Server Error".to_owned(),
            }));
        })
        .expect("gateway not initialised");
}

// When steps

#[when("the delete link of review {id:u64} is clicked")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_delete_clicked(action_state: &ActionState, id: u64) {
    ensure_page(action_state);
    let command = action_state
        .page
        .with_mut(|page| page.handle_message(&click(id, "delete")))
        .expect("page not initialised")
        .expect("delete should issue a request");
    action_state.pending.set(command);
}

#[when("the pending request completes")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_pending_completes(action_state: &ActionState) {
    let command = action_state.pending.take().expect("no pending request");
    let runtime = ensure_runtime(&action_state.runtime).expect("runtime should start");
    let completion = runtime.block_on(command.resolve());
    process(action_state, &completion);
}

#[when("review {id:u64} is deleted")]
fn when_review_deleted(action_state: &ActionState, id: u64) {
    process(action_state, &click(id, "delete"));
}

#[when("the report link of review {id:u64} is clicked")]
fn when_report_clicked(action_state: &ActionState, id: u64) {
    process(action_state, &click(id, "report"));
}

#[when("the edit link of review {id:u64} is clicked")]
fn when_edit_clicked(action_state: &ActionState, id: u64) {
    process(action_state, &click(id, "edit"));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("review {id:u64} is reported as {reason}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_review_reported(action_state: &ActionState, id: u64, reason: String) {
    let parsed: FlagReason = reason.parse().expect("reason should be known");
    process(action_state, &click(id, "report"));
    process(action_state, &PageMsg::FlagReasonChosen(parsed));
}

// Then steps

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("review {id:u64} shows the {marker} marker")]
fn then_review_marker(action_state: &ActionState, id: u64, marker: String) {
    let actual = read_page(action_state, |page| {
        page.review(ReviewId::new(id))
            .and_then(|review| review.deletion.marker())
    });

    assert_eq!(actual, Some(marker.as_str()), "review {id} marker mismatch");
}

#[then("review {id:u64} has no deletion marker")]
fn then_review_idle(action_state: &ActionState, id: u64) {
    let state = read_page(action_state, |page| {
        page.review(ReviewId::new(id)).map(|review| review.deletion)
    });

    assert_eq!(state, Some(DeletionState::Idle));
}

#[then("a retryable notice is raised")]
fn then_retryable_notice(action_state: &ActionState) {
    let retryable = read_page(action_state, |page| {
        page.notices().iter().any(|notice| notice.is_retryable())
    });

    assert!(retryable, "expected a retryable notice");
}

#[then("the flag overlay targets review {id:u64}")]
fn then_flag_overlay_targets(action_state: &ActionState, id: u64) {
    let (phase, target) = read_page(action_state, |page| {
        (
            page.flag_phase(),
            page.overlays().active().map(|overlay| overlay.target),
        )
    });

    assert_eq!(phase, FlagPhase::Open { target: ReviewId::new(id) });
    assert_eq!(target, Some(ReviewId::new(id)));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("review {id:u64} is labelled {label}")]
fn then_review_labelled(action_state: &ActionState, id: u64, label: String) {
    let actual = read_page(action_state, |page| {
        page.review(ReviewId::new(id))
            .map(|review| review.flag_status.label())
    });

    assert_eq!(actual, Some(label.as_str()));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the site received a {reason} flag for review {id:u64}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_site_received_flag(action_state: &ActionState, reason: String, id: u64) {
    let expected = RecordedRequest::Flag {
        url: format!("/reviews/{id}/flag"),
        reason: reason.parse().expect("reason should be known"),
    };
    let requests = action_state
        .gateway
        .with_ref(|gateway| gateway.requests())
        .expect("gateway not initialised");

    assert_eq!(requests, vec![expected]);
}

#[then("the edit form has rating {rating:u8} selected")]
fn then_edit_rating(action_state: &ActionState, rating: u8) {
    let selected = read_page(action_state, |page| {
        page.edit_draft()
            .and_then(|draft| draft.rating().selected())
            .map(Rating::value)
    });

    assert_eq!(selected, Some(rating));
}

#[then("the flag overlay is closed")]
fn then_flag_closed(action_state: &ActionState) {
    let phase = read_page(action_state, ReviewPage::flag_phase);

    assert_eq!(phase, FlagPhase::Closed);
}

#[then("the edit overlay is shown")]
fn then_edit_shown(action_state: &ActionState) {
    let kind = read_page(action_state, |page| page.overlays().active_kind());

    assert_eq!(kind, Some(OverlayKind::Edit));
}

// Scenario bindings

#[scenario(path = "tests/features/review_actions.feature", index = 0)]
fn delete_is_optimistic(action_state: ActionState) {
    let _ = action_state;
}

#[scenario(path = "tests/features/review_actions.feature", index = 1)]
fn failed_delete_is_retryable(action_state: ActionState) {
    let _ = action_state;
}

#[scenario(path = "tests/features/review_actions.feature", index = 2)]
fn flag_overlay_follows_latest_click(action_state: ActionState) {
    let _ = action_state;
}

#[scenario(path = "tests/features/review_actions.feature", index = 3)]
fn flag_labels_review(action_state: ActionState) {
    let _ = action_state;
}

#[scenario(path = "tests/features/review_actions.feature", index = 4)]
fn edit_preselects_rating(action_state: ActionState) {
    let _ = action_state;
}

#[scenario(path = "tests/features/review_actions.feature", index = 5)]
fn edit_replaces_flag_overlay(action_state: ActionState) {
    let _ = action_state;
}
