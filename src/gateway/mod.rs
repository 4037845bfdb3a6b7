//! Gateways for the site's review mutation endpoints.
//!
//! The controller never talks HTTP directly: deletion and flagging go
//! through [`ReviewActionGateway`], which tests replace with mocks or a
//! scripted gateway. [`HttpReviewGateway`] performs the
//! real requests with reqwest.

mod client;
mod error_mapping;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use client::{HttpGatewayConfig, HttpReviewGateway};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::reviews::FlagReason;

/// JSON body returned by the flag endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReceipt {
    /// Confirmation message from the site, when it sends one.
    #[serde(default)]
    pub msg: Option<String>,
}

/// Gateway that issues review mutations to the site.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewActionGateway: Send + Sync {
    /// POSTs to a review's deletion URL. The response body is ignored.
    async fn delete_review(&self, delete_url: &str) -> Result<(), PageError>;

    /// POSTs `flag=<reason code>` to a review's flag URL and decodes the JSON
    /// receipt.
    async fn flag_review(
        &self,
        flag_url: &str,
        reason: FlagReason,
    ) -> Result<FlagReceipt, PageError>;
}
