//! Output formatting for page operations.

use std::io::{self, Write};

use kudos::{PageError, Rating, RatingSelector, Review, ReviewId, ReviewPage};

use super::operation::OperationReport;

/// Writes the outcome of an operation to stdout.
pub fn write_report(page: &ReviewPage, report: &OperationReport) -> Result<(), PageError> {
    let mut stdout = io::stdout().lock();
    write_report_to(&mut stdout, page, report)
}

/// Writes the outcome of an operation to the given writer.
pub fn write_report_to<W: Write>(
    writer: &mut W,
    page: &ReviewPage,
    report: &OperationReport,
) -> Result<(), PageError> {
    match report {
        OperationReport::Review(id) => {
            if let Some(review) = page.review(*id) {
                write_review_line(writer, review)?;
            }
        }
        OperationReport::Edit(id) => write_edit_form(writer, page, *id)?,
        OperationReport::Revealed(outcome) => {
            let cursor = page.reveal_cursor();
            writeln!(
                writer,
                "Revealed {} reviews ({} of {} shown)",
                outcome.revealed.len(),
                cursor.visible(),
                cursor.total()
            )
            .map_err(|e| io_error(&e))?;
            for review in outcome
                .revealed
                .iter()
                .filter_map(|id| page.review(*id))
            {
                write_review_line(writer, review)?;
            }
            if let Some(anchor) = outcome.jump_to.as_deref() {
                writeln!(writer, "Jump to #{anchor}").map_err(|e| io_error(&e))?;
            }
        }
        OperationReport::Breakdown => write_breakdown(writer, page)?,
    }

    for notice in page.notices() {
        writeln!(writer, "! {}", notice.describe()).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn write_review_line<W: Write>(writer: &mut W, review: &Review) -> Result<(), PageError> {
    let stars = review.rating.map_or_else(String::new, |rating| {
        format!(" {}", stars_for(rating))
    });
    let marker = review
        .deletion
        .marker()
        .map_or_else(String::new, |marker| format!(" [{marker}]"));
    writeln!(
        writer,
        "  #{}{stars}{marker} {} ({})",
        review.id,
        review.body,
        review.flag_status.label()
    )
    .map_err(|e| io_error(&e))
}

fn write_edit_form<W: Write>(
    writer: &mut W,
    page: &ReviewPage,
    id: ReviewId,
) -> Result<(), PageError> {
    if let Some(markup) = page.overlays().content() {
        writeln!(writer, "{markup}").map_err(|e| io_error(&e))?;
    }
    let Some(draft) = page.edit_draft().filter(|draft| draft.target() == id) else {
        return Ok(());
    };

    writeln!(writer, "Rating: {}", draft.rating().render()).map_err(|e| io_error(&e))?;
    let counter = draft.remaining_chars().map_or_else(
        || format!("{} characters", draft.char_count()),
        |remaining| {
            format!(
                "{} characters, {remaining} remaining",
                draft.char_count()
            )
        },
    );
    writeln!(writer, "Body: {counter}").map_err(|e| io_error(&e))
}

fn write_breakdown<W: Write>(writer: &mut W, page: &ReviewPage) -> Result<(), PageError> {
    let breakdown = page.breakdown();
    let summary = breakdown.summary();
    writeln!(
        writer,
        "Average {} from {} ratings",
        summary.average_label(),
        summary.total()
    )
    .map_err(|e| io_error(&e))?;

    if !breakdown.is_expanded() {
        return Ok(());
    }
    for rating in Rating::ALL.into_iter().rev() {
        writeln!(writer, "  {} {}", stars_for(rating), summary.count(rating))
            .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn stars_for(rating: Rating) -> String {
    let mut selector = RatingSelector::attach();
    selector.select(rating);
    selector.render()
}

fn io_error(error: &io::Error) -> PageError {
    PageError::Io {
        message: error.to_string(),
    }
}
