//! Synchronous client for the IFPA pinball ranking API.
//!
//! # Overview
//! Calls the service's read-only player endpoints and turns its loosely
//! typed JSON into `Player` / `PlayerStats` records, normalizing the many
//! ways the service spells "missing" (`null`, `""`, `"Not Ranked"`,
//! `"No players found"`).
//!
//! # Design
//! - `transport` is the only place that does I/O. It is a trait so tests
//!   can substitute `testing::FakeTransportFactory` (feature `testing`); `ureq` backs it by
//!   default.
//! - `executor` builds the URL, drives one transport per call, and sorts
//!   failures into the `ApiError` categories.
//! - `mapper` converts decoded documents into records with explicit,
//!   per-field coercions.
//! - `IfpaClient` ties the two together and is the intended entry point.

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod mapper;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;
pub mod types;

pub use client::IfpaClient;
pub use config::ClientConfig;
pub use error::{ApiError, TransportFailure};
pub use executor::{DecodedResponse, RequestExecutor};
pub use http::{HttpRequest, HttpResponse, RequestOption};
pub use transport::{Transport, TransportFactory};
#[cfg(feature = "ureq")]
pub use transport::{UreqTransport, UreqTransportFactory};
pub use types::{Player, PlayerStats};
