//! The transport capability: one HTTP GET per instance.
//!
//! # Design
//! A `TransportFactory` opens a fresh `Transport` for every request, the
//! executor configures it with `RequestOption`s, executes it once, reads the
//! status, and releases it. `TransportHandle` owns the transport for the
//! duration of a call and releases it on drop, so release happens on every
//! exit path including unwinding.
//!
//! Transports are not required to be reentrant. Factories are shared by the
//! executor and only need `&self` to open a new transport.

use std::ops::{Deref, DerefMut};

use crate::error::TransportFailure;
use crate::http::RequestOption;

pub trait Transport {
    fn configure(&mut self, option: RequestOption);

    /// Perform the request and return the buffered body.
    fn execute(&mut self) -> Result<String, TransportFailure>;

    /// Status of the last `execute`; 0 if none was obtained.
    fn status(&self) -> u16;

    fn release(&mut self);
}

pub trait TransportFactory {
    type Transport: Transport;

    fn open(&self, url: &str) -> Self::Transport;
}

/// Releases the wrapped transport when dropped.
pub(crate) struct TransportHandle<T: Transport> {
    inner: T,
}

impl<T: Transport> TransportHandle<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Transport> Deref for TransportHandle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Transport> DerefMut for TransportHandle<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Transport> Drop for TransportHandle<T> {
    fn drop(&mut self) {
        self.inner.release();
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::{UreqTransport, UreqTransportFactory};

#[cfg(feature = "ureq")]
mod ureq_transport {
    use std::time::Duration;

    use super::{Transport, TransportFactory};
    use crate::error::TransportFailure;
    use crate::http::RequestOption;

    /// Opens blocking `ureq` transports.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UreqTransportFactory;

    impl TransportFactory for UreqTransportFactory {
        type Transport = UreqTransport;

        fn open(&self, url: &str) -> UreqTransport {
            UreqTransport {
                url: url.to_string(),
                headers: Vec::new(),
                connect_timeout: None,
                status: 0,
            }
        }
    }

    /// A single blocking GET over `ureq`.
    ///
    /// Header echo and buffering need no configuration: `ureq` never mixes
    /// headers into the body and the body is always read fully into memory.
    #[derive(Debug)]
    pub struct UreqTransport {
        url: String,
        headers: Vec<(String, String)>,
        connect_timeout: Option<Duration>,
        status: u16,
    }

    impl Transport for UreqTransport {
        fn configure(&mut self, option: RequestOption) {
            match option {
                RequestOption::Headers(lines) => {
                    self.headers = lines
                        .iter()
                        .filter_map(|line| line.split_once(':'))
                        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                        .collect();
                }
                RequestOption::ConnectTimeout(seconds) => {
                    self.connect_timeout = Some(Duration::from_secs(seconds));
                }
                RequestOption::SuppressHeaderEcho(_) | RequestOption::BufferResponse(_) => {}
            }
        }

        fn execute(&mut self) -> Result<String, TransportFailure> {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .timeout_connect(self.connect_timeout)
                .build()
                .new_agent();

            let mut request = agent.get(&self.url);
            for (name, value) in &self.headers {
                request = request.header(name.as_str(), value.as_str());
            }

            let mut response = request
                .call()
                .map_err(|e| TransportFailure::new(e.to_string()))?;
            self.status = response.status().as_u16();
            response
                .body_mut()
                .read_to_string()
                .map_err(|e| TransportFailure::new(e.to_string()))
        }

        fn status(&self) -> u16 {
            self.status
        }

        fn release(&mut self) {
            self.headers.clear();
        }
    }

}
