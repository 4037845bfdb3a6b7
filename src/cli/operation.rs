//! Runs a single configured operation against a review page.

use kudos::{PageError, PageMsg, PageOperation, ReviewId, ReviewPage, RevealOutcome};

/// What an operation acted on, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationReport {
    /// A per-review action (delete or report) ran to completion.
    Review(ReviewId),
    /// The edit overlay was opened for a review.
    Edit(ReviewId),
    /// A "load more" activation ran.
    Revealed(RevealOutcome),
    /// The rating breakdown panel was toggled.
    Breakdown,
}

/// Applies `operation` to `page`, awaiting any requests it issues.
///
/// # Errors
///
/// Returns [`PageError::UnknownReview`] when the operation names a review
/// that is not in the listing, or the page's error when the edit form cannot
/// be rendered.
pub async fn run_operation(
    page: &mut ReviewPage,
    operation: PageOperation,
) -> Result<OperationReport, PageError> {
    match operation {
        PageOperation::Delete(review) => {
            require_review(page, review)?;
            page.process(&action_click(review, "delete")).await;
            Ok(OperationReport::Review(review))
        }
        PageOperation::Report { review, reason } => {
            require_review(page, review)?;
            page.process(&action_click(review, "report")).await;
            page.process(&PageMsg::FlagReasonChosen(reason)).await;
            Ok(OperationReport::Review(review))
        }
        PageOperation::Edit(review) => {
            require_review(page, review)?;
            page.process(&action_click(review, "edit")).await;
            if let Some(error) = page.last_error() {
                return Err(error.clone());
            }
            Ok(OperationReport::Edit(review))
        }
        PageOperation::LoadMore => Ok(OperationReport::Revealed(page.load_more())),
        PageOperation::ToggleBreakdown => {
            page.process(&PageMsg::BreakdownToggled).await;
            Ok(OperationReport::Breakdown)
        }
    }
}

fn action_click(review: ReviewId, tag: &str) -> PageMsg {
    PageMsg::ActionClicked {
        review,
        tag: Some(tag.to_owned()),
    }
}

fn require_review(page: &ReviewPage, review: ReviewId) -> Result<(), PageError> {
    page.review(review)
        .map(|_| ())
        .ok_or(PageError::UnknownReview { id: review.get() })
}
