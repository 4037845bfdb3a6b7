//! Command-line configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to highest
//! precedence:
//!
//! 1. **Defaults**
//! 2. **Configuration file**: `.kudos.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables**: `KUDOS_LISTING`, `KUDOS_BASE_URL`, ...
//! 4. **Command-line arguments**: `--listing`/`-l`, `--action`/`-a`, ...
//!
//! # Configuration File
//!
//! ```toml
//! listing = "reviews.json"
//! base_url = "https://apps.example.org"
//! csrf_token = "abc123"
//! request_timeout_secs = 10
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::gateway::HttpGatewayConfig;
use crate::reviews::{FlagReason, ReviewId};

/// The page operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOperation {
    /// Delete a review.
    Delete(ReviewId),
    /// Report a review for abuse.
    Report {
        /// Review to report.
        review: ReviewId,
        /// Reason sent with the report.
        reason: FlagReason,
    },
    /// Open the edit form for a review.
    Edit(ReviewId),
    /// Reveal the next batch of hidden reviews.
    LoadMore,
    /// Toggle the rating breakdown panel.
    ToggleBreakdown,
}

/// Configuration for the `kudos` command.
///
/// # Example
///
/// ```no_run
/// use kudos::KudosConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = KudosConfig::load().expect("failed to load configuration");
/// let operation = config.operation().expect("an action is required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "KUDOS",
    discovery(
        dotfile_name = ".kudos.toml",
        config_file_name = "kudos.toml",
        app_name = "kudos"
    )
)]
pub struct KudosConfig {
    /// Path to the JSON listing snapshot.
    ///
    /// Can be provided via:
    /// - CLI: `--listing <PATH>` or `-l <PATH>`
    /// - Environment: `KUDOS_LISTING`
    /// - Config file: `listing = "..."`
    #[ortho_config(cli_short = 'l')]
    pub listing: Option<String>,

    /// Action to perform: `delete`, `report`, `edit`, `load-more` or
    /// `breakdown`.
    #[ortho_config(cli_short = 'a')]
    pub action: Option<String>,

    /// Identifier of the review the action targets.
    #[ortho_config(cli_short = 'r')]
    pub review: Option<u64>,

    /// Flag reason for `report`, by name (`spam`) or code
    /// (`review_flag_reason_spam`).
    #[ortho_config()]
    pub reason: Option<String>,

    /// Site origin that relative review URLs resolve against.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `KUDOS_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: Option<String>,

    /// Anti-forgery token sent as `X-CSRFToken` on every POST.
    #[ortho_config()]
    pub csrf_token: Option<String>,

    /// Timeout applied to each request, in seconds.
    #[ortho_config()]
    pub request_timeout_secs: u64,

    /// Path to a template replacing the built-in edit form.
    #[ortho_config()]
    pub edit_template: Option<String>,

    /// Writes telemetry events to stderr as JSON lines.
    ///
    /// Not loaded from the environment, as `ortho_config` does not read
    /// booleans from there.
    #[ortho_config(cli_short = 'j')]
    pub telemetry: bool,
}

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

impl Default for KudosConfig {
    fn default() -> Self {
        Self {
            listing: None,
            action: None,
            review: None,
            reason: None,
            base_url: None,
            csrf_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            edit_template: None,
            telemetry: false,
        }
    }
}

impl KudosConfig {
    /// Returns the listing path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingListing`] when no path is configured.
    pub fn require_listing(&self) -> Result<&str, PageError> {
        self.listing
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .ok_or(PageError::MissingListing)
    }

    /// Builds the HTTP gateway settings.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Configuration`] when no base URL is configured,
    /// or [`PageError::InvalidUrl`] when it does not parse.
    pub fn gateway_config(&self) -> Result<HttpGatewayConfig, PageError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| PageError::Configuration {
                message: "site base URL is required (use --base-url or -b)".to_owned(),
            })?;

        let mut config = HttpGatewayConfig::new(base_url)?;
        if self.request_timeout_secs > 0 {
            config = config.with_timeout(Duration::from_secs(self.request_timeout_secs));
        }
        if let Some(token) = self.csrf_token.as_deref() {
            config = config.with_csrf_token(token);
        }
        Ok(config)
    }

    /// Interprets the configured action.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingAction`] when no action is configured,
    /// [`PageError::InvalidArgument`] for an unknown action,
    /// [`PageError::MissingReview`] when the action needs a review, and
    /// [`PageError::Configuration`] or [`PageError::UnknownFlagReason`] for a
    /// missing or bad reason.
    pub fn operation(&self) -> Result<PageOperation, PageError> {
        let action = self
            .action
            .as_deref()
            .map(|raw| raw.trim().to_ascii_lowercase())
            .filter(|raw| !raw.is_empty())
            .ok_or(PageError::MissingAction)?;

        match action.as_str() {
            "delete" => Ok(PageOperation::Delete(self.require_review(&action)?)),
            "edit" => Ok(PageOperation::Edit(self.require_review(&action)?)),
            "report" => {
                let review = self.require_review(&action)?;
                let reason = self
                    .reason
                    .as_deref()
                    .ok_or_else(|| PageError::Configuration {
                        message: "a flag reason is required for 'report' (use --reason)"
                            .to_owned(),
                    })?
                    .parse()?;
                Ok(PageOperation::Report { review, reason })
            }
            "load-more" | "load_more" => Ok(PageOperation::LoadMore),
            "breakdown" => Ok(PageOperation::ToggleBreakdown),
            _ => Err(PageError::InvalidArgument { argument: action }),
        }
    }

    fn require_review(&self, action: &str) -> Result<ReviewId, PageError> {
        self.review
            .map(ReviewId::new)
            .ok_or_else(|| PageError::MissingReview {
                action: action.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests;
