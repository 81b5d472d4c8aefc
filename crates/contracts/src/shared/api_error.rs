//! Failure taxonomy of calls against the rule engine service.

use super::notification::Notification;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str =
    "No response received from server. Please check your network connection.";

pub const UNEXPECTED_ERROR_REASON: &str = "Unexpected Error";

/// `status` part of the service error envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvelopeStatus {
    pub error_code: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub info_list: Vec<serde_json::Value>,
}

/// `response` part of the service error envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvelopeResponse {
    pub message: Option<String>,
    pub reason: Option<String>,
    pub error_code: Option<String>,
}

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    pub status: EnvelopeStatus,
    pub response: EnvelopeResponse,
}

/// A received non-2xx response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Option<ErrorEnvelope>,
}

impl ErrorResponse {
    /// Builds the response, keeping the body only if it parses as an envelope
    pub fn from_parts(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        let body = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .filter(|env| env.response.message.is_some() || env.response.reason.is_some());
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    #[error("unauthorized ({})", .0.status)]
    Unauthorized(ErrorResponse),
    #[error("server responded {} {}", .0.status, .0.status_text)]
    Server(ErrorResponse),
    #[error("No response received from server: {0}")]
    Network(String),
    #[error("Request setup error: {0}")]
    RequestSetup(String),
    #[error("Response decode error: {0}")]
    Decode(String),
}

impl ApiFailure {
    /// Sorts a non-2xx response into `Unauthorized` or `Server`
    pub fn from_response(response: ErrorResponse) -> Self {
        if response.is_unauthorized() {
            ApiFailure::Unauthorized(response)
        } else {
            ApiFailure::Server(response)
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiFailure::Unauthorized(_))
    }

    /// Toast for the error channel. `None` for 401, which redirects instead.
    pub fn to_notification(&self) -> Option<Notification> {
        let notification = match self {
            ApiFailure::Unauthorized(_) => return None,
            ApiFailure::Server(resp) => match &resp.body {
                Some(env) => {
                    let mut n = Notification::error(
                        "Error",
                        env.response.message.clone().unwrap_or_default(),
                    );
                    if let Some(reason) = &env.response.reason {
                        n = n.with_reason(reason.clone());
                    }
                    if let Some(code) = &env.response.error_code {
                        n = n.with_info(code.clone());
                    }
                    n
                }
                None => Notification::error(
                    "Error",
                    format!("{} {}", resp.status, resp.status_text),
                )
                .with_reason(UNEXPECTED_ERROR_REASON),
            },
            ApiFailure::Network(_) => Notification::error("Error", NETWORK_ERROR_MESSAGE),
            ApiFailure::RequestSetup(cause) => {
                Notification::error("Error", format!("Request setup error: {cause}"))
            }
            ApiFailure::Decode(cause) => {
                Notification::error("Error", format!("Response decode error: {cause}"))
            }
        };
        Some(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "status": {"errorCode": "400", "status": "BAD_REQUEST", "message": "failed", "infoList": []},
        "response": {"message": "Rule already exists", "reason": "Duplicate name", "errorCode": "RULE-409"}
    }"#;

    #[test]
    fn test_server_envelope_to_notification() {
        let failure = ApiFailure::from_response(ErrorResponse::from_parts(400, "Bad Request", ENVELOPE));
        let n = failure.to_notification().unwrap();
        assert_eq!(n.title, "Error");
        assert_eq!(n.content, "Rule already exists");
        assert_eq!(n.reason.as_deref(), Some("Duplicate name"));
        assert_eq!(n.info.as_deref(), Some("RULE-409"));
    }

    #[test]
    fn test_server_without_envelope() {
        let failure = ApiFailure::from_response(ErrorResponse::from_parts(
            502,
            "Bad Gateway",
            "<html>gateway</html>",
        ));
        let n = failure.to_notification().unwrap();
        assert_eq!(n.content, "502 Bad Gateway");
        assert_eq!(n.reason.as_deref(), Some("Unexpected Error"));
        assert_eq!(n.info, None);
    }

    #[test]
    fn test_unauthorized_is_not_notified() {
        let failure = ApiFailure::from_response(ErrorResponse::from_parts(401, "Unauthorized", ""));
        assert!(failure.is_unauthorized());
        assert_eq!(failure.to_notification(), None);
        match failure {
            ApiFailure::Unauthorized(resp) => assert_eq!(resp.status, 401),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_transport_failures() {
        let n = ApiFailure::Network("fetch failed".into()).to_notification().unwrap();
        assert_eq!(n.content, NETWORK_ERROR_MESSAGE);
        let n = ApiFailure::RequestSetup("bad header".into()).to_notification().unwrap();
        assert_eq!(n.content, "Request setup error: bad header");
        let n = ApiFailure::Decode("missing field".into()).to_notification().unwrap();
        assert_eq!(n.content, "Response decode error: missing field");
    }
}
