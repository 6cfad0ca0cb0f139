//! reqwest-backed [`Gateway`] implementation.

use crate::{Gateway, Operation};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::error::Error as StdError;
use tracing::{info, warn};
use waproxy_core::config::GatewayConfig;
use waproxy_core::error::GatewayError;
use waproxy_core::message::Credentials;

/// Green API client sharing one connection pool across requests.
pub struct GreenApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GreenApiClient {
    /// Create a client from config.
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for `operation` on the given instance.
    ///
    /// The id and token are percent-encoded so they stay inside their path segment.
    pub fn endpoint(&self, credentials: &Credentials, operation: &Operation) -> String {
        format!(
            "{}/waInstance{}/{}/{}",
            self.base_url,
            urlencoding::encode(&credentials.id_instance),
            operation.name(),
            urlencoding::encode(&credentials.api_token_instance),
        )
    }

    async fn execute(
        &self,
        credentials: &Credentials,
        operation: &Operation,
    ) -> Result<String, GatewayError> {
        let body = operation.body()?;

        let mut builder = self
            .client
            .request(operation.method(), self.endpoint(credentials, operation))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder
            .build()
            .map_err(|e| GatewayError::Request(describe(e)))?;

        let resp = self
            .client
            .execute(request)
            .await
            .map_err(|e| GatewayError::Send(describe(e)))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| GatewayError::Read(describe(e)))?;

        info!(
            "gateway {} for instance {} -> {status} ({} bytes)",
            operation.name(),
            credentials.id_instance,
            text.len()
        );
        Ok(text)
    }
}

#[async_trait]
impl Gateway for GreenApiClient {
    async fn call(
        &self,
        credentials: &Credentials,
        operation: &Operation,
    ) -> Result<String, GatewayError> {
        self.execute(credentials, operation).await.inspect_err(|e| {
            warn!(
                "gateway {} for instance {} failed: {e}",
                operation.name(),
                credentials.id_instance
            );
        })
    }
}

/// Render a reqwest error with its source chain, minus the URL (it embeds the token).
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
