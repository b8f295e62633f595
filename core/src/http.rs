//! HTTP request/response types exchanged with a `Transport`.
//!
//! # Design
//! Requests and responses are plain owned data. `RequestExecutor` builds an
//! `HttpRequest` without any I/O, hands it to a transport as a series of
//! `RequestOption`s, and classifies the resulting `HttpResponse` without I/O
//! either. Only the transport itself touches the network.

/// The only status the service uses for success.
pub const HTTP_OK: u16 = 200;

/// Sent on every request.
pub const USER_AGENT: &str = "IfpaClient/1.0";

/// A fully-resolved GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub connect_timeout_seconds: u64,
}

impl HttpRequest {
    /// The options every request applies to its transport, in order.
    pub fn options(&self) -> Vec<RequestOption> {
        vec![
            RequestOption::SuppressHeaderEcho(true),
            RequestOption::BufferResponse(true),
            RequestOption::Headers(
                self.headers
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect(),
            ),
            RequestOption::ConnectTimeout(self.connect_timeout_seconds),
        ]
    }
}

/// Per-request knobs a transport must understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Keep response headers out of the returned body.
    SuppressHeaderEcho(bool),
    /// Return the body as a buffered string rather than streaming it.
    BufferResponse(bool),
    /// Raw header lines, each `"Name: value"`.
    Headers(Vec<String>),
    /// Connect timeout in seconds.
    ConnectTimeout(u64),
}

/// A response obtained from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
