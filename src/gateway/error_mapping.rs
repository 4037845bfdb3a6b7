//! Error mapping helpers for the HTTP review gateway.

use http::StatusCode;

use crate::error::PageError;

/// Longest slice of an error body quoted in a message.
const MAX_BODY_CHARS: usize = 160;

/// Maps a reqwest transport error into a [`PageError`].
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> PageError {
    if error.is_builder() {
        return PageError::InvalidUrl(format!("{operation}: {error}"));
    }

    if error.is_timeout() {
        return PageError::Network {
            message: format!("{operation} timed out: {error}"),
        };
    }

    PageError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success HTTP status into a [`PageError`].
pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> PageError {
    let detail = truncate_for_message(body.trim());
    let message = if detail.is_empty() {
        format!(
            "{operation} failed: {}",
            status.canonical_reason().unwrap_or("unknown status")
        )
    } else {
        format!("{operation} failed: {detail}")
    };

    PageError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Maps a body decoding failure into a [`PageError`].
pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> PageError {
    PageError::InvalidResponse {
        message: format!("{operation} response was not valid JSON: {error}"),
    }
}

fn truncate_for_message(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_CHARS {
        return body.to_owned();
    }
    let mut truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_uses_reason_phrase_for_empty_body() {
        let error = map_http_error("delete review", StatusCode::FORBIDDEN, "  ");

        assert_eq!(
            error,
            PageError::Api {
                status: 403,
                message: "delete review failed: Forbidden".to_owned(),
            }
        );
    }

    #[test]
    fn http_error_truncates_long_bodies() {
        let body = "x".repeat(500);

        let PageError::Api { message, .. } =
            map_http_error("flag review", StatusCode::INTERNAL_SERVER_ERROR, &body)
        else {
            panic!("expected Api error");
        };

        assert!(message.ends_with("..."), "message should be truncated");
        assert!(message.len() < 200, "message should be bounded");
    }
}
