//! Request execution and response classification.
//!
//! # Design
//! `RequestExecutor::get` is three steps. `build_request` and
//! `parse_response` are pure and can be tested without a transport; only
//! `execute` drives one. The executor keeps no state between calls apart from
//! the connect timeout, which applies to every call made after it is set.
//!
//! Prefer `IfpaClient`, which maps the decoded documents into typed records.
//! The executor is public for endpoints the client does not wrap yet.

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HTTP_OK, USER_AGENT};
use crate::transport::{Transport, TransportFactory, TransportHandle};

/// A decoded response body. The service always answers with a JSON object.
pub type DecodedResponse = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct RequestExecutor<F> {
    api_key: String,
    base_url: String,
    timeout_seconds: u64,
    factory: F,
}

impl<F: TransportFactory> RequestExecutor<F> {
    pub fn new(config: &ClientConfig, factory: F) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds,
            factory,
        }
    }

    pub fn set_timeout_seconds(&mut self, timeout_seconds: u64) {
        self.timeout_seconds = timeout_seconds;
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    /// GET `<base_url>/<path_suffix>` with the api key and `params` appended
    /// to the query string, in order. Parameter keys and values are
    /// percent-encoded; the api key is not.
    pub fn get(&self, path_suffix: &str, params: &[(&str, &str)]) -> Result<DecodedResponse, ApiError> {
        let request = self.build_request(path_suffix, params);
        let response = self.execute(&request)?;
        parse_response(response)
    }

    pub fn build_request(&self, path_suffix: &str, params: &[(&str, &str)]) -> HttpRequest {
        let mut url = format!(
            "{}/{}?api_key={}",
            self.base_url,
            path_suffix.trim_start_matches('/'),
            self.api_key
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        HttpRequest {
            url,
            headers: vec![("User-Agent".to_string(), USER_AGENT.to_string())],
            connect_timeout_seconds: self.timeout_seconds,
        }
    }

    /// Run `request` through a fresh transport. The transport is released
    /// before this returns, whatever the outcome.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("GET {}", redact_api_key(&request.url));

        let mut transport = TransportHandle::new(self.factory.open(&request.url));
        for option in request.options() {
            transport.configure(option);
        }

        let body = transport.execute()?;
        let status = transport.status();
        debug!("received HTTP {status} ({} bytes)", body.len());

        Ok(HttpResponse { status, body })
    }
}

/// Classify a response: non-200 first, then anything that is not a JSON
/// object.
pub fn parse_response(response: HttpResponse) -> Result<DecodedResponse, ApiError> {
    if response.status != HTTP_OK {
        warn!("unexpected HTTP status {}", response.status);
        return Err(ApiError::HttpStatus {
            status: response.status,
            body: response.body,
        });
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => {
            warn!("response is not a JSON object");
            Err(ApiError::MalformedResponse {
                body: response.body,
                reason: format!("expected a JSON object, found {}", json_type(&other)),
            })
        }
        Err(e) => {
            warn!("failed to decode response body: {e}");
            Err(ApiError::MalformedResponse {
                body: response.body,
                reason: e.to_string(),
            })
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn redact_api_key(url: &str) -> String {
    let Some(start) = url.find("api_key=") else {
        return url.to_string();
    };
    let value_start = start + "api_key=".len();
    let value_end = url[value_start..]
        .find('&')
        .map_or(url.len(), |offset| value_start + offset);
    format!("{}***{}", &url[..value_start], &url[value_end..])
}
