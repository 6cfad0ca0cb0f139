//! The four gateway operations and how each maps onto an HTTP request.

use reqwest::Method;
use waproxy_core::error::GatewayError;
use waproxy_core::message::{SendFileByUrl, SendMessage};

/// A single gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetSettings,
    GetStateInstance,
    SendMessage(SendMessage),
    SendFileByUrl(SendFileByUrl),
}

impl Operation {
    /// Method name as it appears in the gateway URL.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetSettings => "getSettings",
            Self::GetStateInstance => "getStateInstance",
            Self::SendMessage(_) => "sendMessage",
            Self::SendFileByUrl(_) => "sendFileByUrl",
        }
    }

    /// Reads are GET, writes are POST.
    pub fn method(&self) -> Method {
        match self {
            Self::GetSettings | Self::GetStateInstance => Method::GET,
            Self::SendMessage(_) | Self::SendFileByUrl(_) => Method::POST,
        }
    }

    /// JSON request body, `None` for reads.
    pub fn body(&self) -> Result<Option<Vec<u8>>, GatewayError> {
        let encoded = match self {
            Self::GetSettings | Self::GetStateInstance => return Ok(None),
            Self::SendMessage(payload) => serde_json::to_vec(payload),
            Self::SendFileByUrl(payload) => serde_json::to_vec(payload),
        };
        encoded
            .map(Some)
            .map_err(|e| GatewayError::Encode(e.to_string()))
    }
}
