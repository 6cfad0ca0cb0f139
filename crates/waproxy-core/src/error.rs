use thiserror::Error;

/// Top-level error type for waproxy.
#[derive(Debug, Error)]
pub enum WaProxyError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Page rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single gateway call.
///
/// The `Display` text is what the page shows in place of the gateway response.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The outbound payload could not be serialized.
    #[error("Error encoding JSON payload: {0}")]
    Encode(String),

    /// The outbound request could not be built.
    #[error("Error creating request: {0}")]
    Request(String),

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Error sending request: {0}")]
    Send(String),

    /// The response body could not be read.
    #[error("Error reading response: {0}")]
    Read(String),
}
