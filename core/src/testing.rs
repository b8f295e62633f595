//! In-memory transport for tests.
//!
//! `FakeTransportFactory` hands out transports that return a programmed
//! body (or failure) and status without touching the network. Every opened
//! transport is recorded, with its URL, the options it was configured with,
//! and whether it was released, so tests can assert on what the executor did.
//!
//! Only built for this crate's tests or with the `testing` feature.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::TransportFailure;
use crate::http::RequestOption;
use crate::transport::{Transport, TransportFactory};

/// What one opened transport saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub options: Vec<RequestOption>,
    pub executed: bool,
    pub released: bool,
}

impl RecordedRequest {
    /// Last value configured for the connect timeout.
    pub fn connect_timeout(&self) -> Option<u64> {
        self.options.iter().rev().find_map(|option| match option {
            RequestOption::ConnectTimeout(seconds) => Some(*seconds),
            _ => None,
        })
    }

    /// Last header lines configured.
    pub fn headers(&self) -> Option<&[String]> {
        self.options.iter().rev().find_map(|option| match option {
            RequestOption::Headers(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }
}

#[derive(Debug)]
struct Shared {
    result: Result<String, TransportFailure>,
    status: u16,
    requests: Vec<RecordedRequest>,
}

#[derive(Debug, Clone)]
pub struct FakeTransportFactory {
    shared: Arc<Mutex<Shared>>,
}

impl FakeTransportFactory {
    /// Every request gets `body` with `status`.
    pub fn new(body: &str, status: u16) -> Self {
        Self::with_result(Ok(body.to_string()), status)
    }

    /// Every request fails without obtaining a response.
    pub fn failing(reason: &str) -> Self {
        Self::with_result(Err(TransportFailure::new(reason)), 0)
    }

    fn with_result(result: Result<String, TransportFailure>, status: u16) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                result,
                status,
                requests: Vec::new(),
            })),
        }
    }

    /// Reprogram the response for subsequent requests.
    pub fn respond_with(&self, body: &str, status: u16) {
        let mut shared = self.lock();
        shared.result = Ok(body.to_string());
        shared.status = status;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // A panicking test thread must not hide the recording from others.
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransportFactory for FakeTransportFactory {
    type Transport = FakeTransport;

    fn open(&self, url: &str) -> FakeTransport {
        let mut shared = self.lock();
        shared.requests.push(RecordedRequest {
            url: url.to_string(),
            ..RecordedRequest::default()
        });
        FakeTransport {
            factory: self.clone(),
            index: shared.requests.len() - 1,
            status: 0,
        }
    }
}

#[derive(Debug)]
pub struct FakeTransport {
    factory: FakeTransportFactory,
    index: usize,
    status: u16,
}

impl FakeTransport {
    fn record(&self, update: impl FnOnce(&mut RecordedRequest)) {
        let mut shared = self.factory.lock();
        if let Some(request) = shared.requests.get_mut(self.index) {
            update(request);
        }
    }
}

impl Transport for FakeTransport {
    fn configure(&mut self, option: RequestOption) {
        self.record(|request| request.options.push(option));
    }

    fn execute(&mut self) -> Result<String, TransportFailure> {
        self.record(|request| request.executed = true);
        let shared = self.factory.lock();
        self.status = shared.status;
        shared.result.clone()
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn release(&mut self) {
        self.record(|request| request.released = true);
    }
}
