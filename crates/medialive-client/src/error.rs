//! Client error types.

use std::fmt;

use medialive_models::ModelError;
use thiserror::Error;

use crate::http::HttpResponse;
use crate::transport::TransportError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while calling MediaLive.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to configure MediaLive client: {0}")]
    ConfigError(String),

    #[error("{operation} requires member '{member}' to build its URI")]
    MissingUriMember {
        operation: &'static str,
        member: String,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ClientError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// The service error, when the call reached MediaLive and was rejected.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Error types MediaLive declares for its operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    BadGateway,
    BadRequest,
    Conflict,
    Forbidden,
    GatewayTimeout,
    InternalServerError,
    NotFound,
    TooManyRequests,
    UnprocessableEntity,
    /// Any other error code, kept verbatim.
    Unknown(String),
}

impl ServiceErrorKind {
    /// Maps an error code such as `NotFoundException`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "BadGatewayException" => Self::BadGateway,
            "BadRequestException" => Self::BadRequest,
            "ConflictException" => Self::Conflict,
            "ForbiddenException" => Self::Forbidden,
            "GatewayTimeoutException" => Self::GatewayTimeout,
            "InternalServerErrorException" => Self::InternalServerError,
            "NotFoundException" => Self::NotFound,
            "TooManyRequestsException" => Self::TooManyRequests,
            "UnprocessableEntityException" => Self::UnprocessableEntity,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Kind implied by an HTTP status when the response names no error code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            504 => Self::GatewayTimeout,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::BadGateway => "BadGatewayException",
            Self::BadRequest => "BadRequestException",
            Self::Conflict => "ConflictException",
            Self::Forbidden => "ForbiddenException",
            Self::GatewayTimeout => "GatewayTimeoutException",
            Self::InternalServerError => "InternalServerErrorException",
            Self::NotFound => "NotFoundException",
            Self::TooManyRequests => "TooManyRequestsException",
            Self::UnprocessableEntity => "UnprocessableEntityException",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An error response returned by MediaLive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("MediaLive {kind} (HTTP {status}){}", message_suffix(.message))]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub status: u16,
    pub message: Option<String>,
    /// Value of the `x-amzn-RequestId` header.
    pub request_id: Option<String>,
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {}", message))
        .unwrap_or_default()
}

impl ServiceError {
    /// Reads the error code and message from a non-2xx response.
    ///
    /// The code comes from the `x-amzn-ErrorType` header, then the body's
    /// `__type` or `code` member, then the status code.
    pub fn from_response(response: &HttpResponse) -> Self {
        let body: Option<serde_json::Value> = serde_json::from_str(&response.body).ok();
        let body_member = |names: &[&str]| {
            let body = body.as_ref()?;
            names
                .iter()
                .find_map(|name| body.get(*name).and_then(|value| value.as_str()))
                .map(str::to_string)
        };

        let code = response
            .header("x-amzn-ErrorType")
            .map(|header| header.split(':').next().unwrap_or(header).trim().to_string())
            .filter(|code| !code.is_empty())
            .or_else(|| body_member(&["__type", "code"]))
            .map(|code| match code.rsplit_once('#') {
                Some((_, name)) => name.to_string(),
                None => code,
            });

        let kind = match code {
            Some(code) => ServiceErrorKind::from_code(&code),
            None => ServiceErrorKind::from_status(response.status),
        };

        Self {
            kind,
            status: response.status,
            message: body_member(&["message", "Message"]),
            request_id: response.header("x-amzn-RequestId").map(str::to_string),
        }
    }

    /// Throttling and upstream failures that a caller may choose to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::TooManyRequests
                | ServiceErrorKind::BadGateway
                | ServiceErrorKind::GatewayTimeout
                | ServiceErrorKind::InternalServerError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_header_wins() {
        let response = HttpResponse::new(404, r#"{"__type":"ConflictException","message":"gone"}"#)
            .with_header("x-amzn-ErrorType", "NotFoundException:http://internal.amazon.com/");
        let err = ServiceError::from_response(&response);
        assert_eq!(err.kind, ServiceErrorKind::NotFound);
        assert_eq!(err.message.as_deref(), Some("gone"));
    }

    #[test]
    fn test_body_type_with_namespace() {
        let response = HttpResponse::new(
            422,
            r#"{"__type":"com.amazonaws.medialive#UnprocessableEntityException","Message":"bad settings"}"#,
        );
        let err = ServiceError::from_response(&response);
        assert_eq!(err.kind, ServiceErrorKind::UnprocessableEntity);
        assert_eq!(err.message.as_deref(), Some("bad settings"));
    }

    #[test]
    fn test_status_fallback() {
        let err = ServiceError::from_response(&HttpResponse::new(429, ""));
        assert_eq!(err.kind, ServiceErrorKind::TooManyRequests);
        assert!(err.is_retryable());
        assert!(err.message.is_none());

        let err = ServiceError::from_response(&HttpResponse::new(418, "not json"));
        assert_eq!(err.kind, ServiceErrorKind::Unknown("418".to_string()));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let response = HttpResponse::new(400, r#"{"code":"ThrottlingException"}"#);
        let err = ServiceError::from_response(&response);
        assert_eq!(err.kind.code(), "ThrottlingException");
        assert_eq!(err.to_string(), "MediaLive ThrottlingException (HTTP 400)");
    }

    #[test]
    fn test_display_appends_message() {
        let response = HttpResponse::new(404, r#"{"message":"Channel not found"}"#);
        let err = ServiceError::from_response(&response);
        assert_eq!(
            err.to_string(),
            "MediaLive NotFoundException (HTTP 404): Channel not found"
        );

        let client_err = ClientError::from(err);
        assert_eq!(
            client_err.to_string(),
            "MediaLive NotFoundException (HTTP 404): Channel not found"
        );
        assert!(std::error::Error::source(&client_err).is_none());
    }

    #[test]
    fn test_kind_code_round_trip() {
        for code in [
            "BadGatewayException",
            "BadRequestException",
            "ConflictException",
            "ForbiddenException",
            "GatewayTimeoutException",
            "InternalServerErrorException",
            "NotFoundException",
            "TooManyRequestsException",
            "UnprocessableEntityException",
        ] {
            let kind = ServiceErrorKind::from_code(code);
            assert!(!matches!(kind, ServiceErrorKind::Unknown(_)));
            assert_eq!(kind.code(), code);
        }
    }
}
