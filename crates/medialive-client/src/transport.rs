//! The seam between the client and whatever sends bytes to MediaLive.
//!
//! Request signing, connection handling and retries are the transport's
//! business; the client only marshals and unmarshals.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// Failure to obtain any HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub fn connect(msg: impl Into<String>) -> Self {
        Self::Connect(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Sends a marshalled request and returns the raw response.
///
/// Any response the service produced, including 4xx and 5xx, is `Ok`; errors
/// are reserved for requests that never got an answer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Teapot;

    #[async_trait]
    impl Transport for Teapot {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(418, ""))
        }
    }

    #[test]
    fn test_shared_transport_delegates() {
        let transport: Arc<dyn Transport> = Arc::new(Teapot);
        let request = HttpRequest {
            method: crate::http::Method::Get,
            url: url::Url::parse("http://localhost/prod/channels").unwrap(),
            headers: Vec::new(),
            body: None,
        };
        let response = tokio_test::block_on(transport.send(request)).unwrap();
        assert_eq!(response.status, 418);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransportError::timeout("30s elapsed").to_string(),
            "Request timed out: 30s elapsed"
        );
    }
}
