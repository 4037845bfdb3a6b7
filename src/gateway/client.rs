//! reqwest-backed implementation of [`ReviewActionGateway`].

use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::error::PageError;
use crate::reviews::FlagReason;

use super::error_mapping::{map_decode_error, map_http_error, map_transport_error};
use super::{FlagReceipt, ReviewActionGateway};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Header the site uses to recognise background requests.
const REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");
/// Header carrying the site's CSRF token.
const CSRF_TOKEN: HeaderName = HeaderName::from_static("x-csrftoken");

/// Configuration for [`HttpReviewGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGatewayConfig {
    /// Site origin that relative review URLs are resolved against.
    pub base_url: Url,
    /// CSRF token sent with every mutation, when the site requires one.
    pub csrf_token: Option<String>,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    /// Creates configuration for the given site origin with default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidUrl`] when `base_url` cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, PageError> {
        let parsed = Url::parse(base_url)
            .map_err(|error| PageError::InvalidUrl(format!("{base_url}: {error}")))?;
        Ok(Self {
            base_url: parsed,
            csrf_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the CSRF token.
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gateway that POSTs review mutations to the site.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    base_url: Url,
}

impl HttpReviewGateway {
    /// Builds the HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Configuration`] when the CSRF token is not a
    /// valid header value or the client cannot be constructed.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, PageError> {
        let mut headers = HeaderMap::new();
        headers.insert(REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.csrf_token.as_deref() {
            let value = HeaderValue::from_str(token).map_err(|error| PageError::Configuration {
                message: format!("CSRF token is not a valid header value: {error}"),
            })?;
            headers.insert(CSRF_TOKEN, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|error| PageError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Resolves a review URL, which may be relative to the site origin.
    fn resolve(&self, review_url: &str) -> Result<Url, PageError> {
        self.base_url
            .join(review_url)
            .map_err(|error| PageError::InvalidUrl(format!("{review_url}: {error}")))
    }

    /// Sends a POST and returns the body of a successful response.
    async fn post(
        &self,
        operation: &str,
        review_url: &str,
        form: &[(&str, &str)],
    ) -> Result<String, PageError> {
        let endpoint = self.resolve(review_url)?;
        tracing::debug!("{operation}: POST {endpoint}");

        let response = self
            .client
            .post(endpoint)
            .form(form)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        if !status.is_success() {
            return Err(map_http_error(operation, status, &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl ReviewActionGateway for HttpReviewGateway {
    async fn delete_review(&self, delete_url: &str) -> Result<(), PageError> {
        self.post("delete review", delete_url, &[]).await.map(|_| ())
    }

    async fn flag_review(
        &self,
        flag_url: &str,
        reason: FlagReason,
    ) -> Result<FlagReceipt, PageError> {
        let body = self
            .post("flag review", flag_url, &[("flag", reason.code())])
            .await?;
        serde_json::from_str(&body).map_err(|error| map_decode_error("flag review", &error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_unparseable_base_url() {
        let result = HttpGatewayConfig::new("not a url");

        assert!(
            matches!(result, Err(PageError::InvalidUrl(_))),
            "expected InvalidUrl, got {result:?}"
        );
    }

    #[test]
    fn relative_review_urls_resolve_against_site_origin() {
        let config = HttpGatewayConfig::new("https://market.example.org/app/")
            .expect("base URL should parse");
        let gateway = HttpReviewGateway::new(config).expect("client should build");

        let resolved = gateway
            .resolve("/reviews/12/delete")
            .expect("relative URL should resolve");

        assert_eq!(
            resolved.as_str(),
            "https://market.example.org/reviews/12/delete"
        );
    }

    #[test]
    fn csrf_token_must_be_a_header_value() {
        let config = HttpGatewayConfig::new("https://market.example.org")
            .expect("base URL should parse")
            .with_csrf_token("bad\ntoken");

        let result = HttpReviewGateway::new(config);

        assert!(
            matches!(result, Err(PageError::Configuration { .. })),
            "expected Configuration error, got {result:?}"
        );
    }
}
