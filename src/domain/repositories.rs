/// Ports - contracts the use cases depend on, implemented in outer layers

use crate::domain::entities::{HttpRequest, HttpResponse};
use async_trait::async_trait;

/// Sends marshalled requests to the service endpoint
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the raw response, whatever its status code
    async fn send(
        &self,
        endpoint: &str,
        request: HttpRequest,
    ) -> Result<HttpResponse, CommunicationError>;
}

/// Transport errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunicationError {
    ConnectionFailed(String),
    SendFailed(String),
    ReceiveFailed(String),
    Timeout(String),
}

impl std::fmt::Display for CommunicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommunicationError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            CommunicationError::SendFailed(msg) => write!(f, "Send failed: {}", msg),
            CommunicationError::ReceiveFailed(msg) => write!(f, "Receive failed: {}", msg),
            CommunicationError::Timeout(msg) => write!(f, "Timeout: {}", msg),
        }
    }
}

impl std::error::Error for CommunicationError {}
