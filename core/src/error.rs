//! Error types for the IFPA API client.
//!
//! # Design
//! Each variant is one failure category a caller can branch on. The service
//! reports "no such player" as HTTP 200 with an empty payload, so
//! `MissingField` is by far the most common error in practice; it carries the
//! whole decoded document so callers can inspect what actually came back.

use serde_json::Value;
use thiserror::Error;

/// Errors returned by `RequestExecutor` and `IfpaClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not obtain any response (DNS, connect, TLS, ...).
    #[error("request failed: {reason}")]
    Transport { reason: String },

    /// A response arrived but its status was not 200. `body` is the raw,
    /// undecoded payload, e.g. `{"error":"API_KEY was not found"}`.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Status was 200 but the body is not a JSON object.
    #[error("failed to decode json: {body}")]
    MalformedResponse { body: String, reason: String },

    /// The JSON is valid but lacks what is needed to build the record.
    #[error("{message}: {data}")]
    MissingField { message: String, data: Value },
}

impl ApiError {
    pub(crate) fn missing(message: &str, data: Value) -> Self {
        ApiError::MissingField {
            message: message.to_string(),
            data,
        }
    }

    /// HTTP status code, for `HttpStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, for errors that received one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { body, .. } | ApiError::MalformedResponse { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }

    /// The offending decoded document, for `MissingField` errors.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiError::MissingField { data, .. } => Some(data),
            _ => None,
        }
    }
}

/// Raised by a `Transport` when no response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransportFailure {
    pub reason: String,
}

impl TransportFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<TransportFailure> for ApiError {
    fn from(failure: TransportFailure) -> Self {
        ApiError::Transport {
            reason: failure.reason,
        }
    }
}
