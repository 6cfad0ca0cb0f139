//! # waproxy-gateway
//!
//! Client for the Green API WhatsApp gateway.
//!
//! Every operation is one HTTP call to
//! `{base_url}/waInstance{idInstance}/{operation}/{apiTokenInstance}`.
//! Docs: <https://green-api.com/en/docs/api/>

mod client;
mod operation;


pub use client::GreenApiClient;
pub use operation::Operation;
pub use waproxy_core::error::GatewayError;

use async_trait::async_trait;
use waproxy_core::message::Credentials;

/// The messaging gateway seen from a request handler.
///
/// One call per incoming request; the whole response body comes back as text,
/// whatever its status code.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Perform `operation` on behalf of the instance in `credentials`.
    async fn call(
        &self,
        credentials: &Credentials,
        operation: &Operation,
    ) -> Result<String, GatewayError>;
}
