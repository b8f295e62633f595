//! Typed client for the IFPA player endpoints.
//!
//! # Design
//! `IfpaClient` pairs a `RequestExecutor` with the mapper: one outbound call
//! per operation, then a strict conversion into domain records. Nothing is
//! cached or retried. Non-existent player ids come back from the service as
//! HTTP 200 with empty data, so they surface as `ApiError::MissingField`
//! rather than a dedicated not-found error.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::executor::RequestExecutor;
use crate::mapper::{map_id_list, map_player};
use crate::transport::TransportFactory;
use crate::types::Player;

#[derive(Debug, Clone)]
pub struct IfpaClient<F> {
    executor: RequestExecutor<F>,
}

#[cfg(feature = "ureq")]
impl IfpaClient<crate::transport::UreqTransportFactory> {
    /// Client backed by blocking `ureq` requests.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, crate::transport::UreqTransportFactory)
    }
}

impl<F: TransportFactory> IfpaClient<F> {
    pub fn with_transport(config: &ClientConfig, factory: F) -> Self {
        Self {
            executor: RequestExecutor::new(config, factory),
        }
    }

    /// Connect timeout, in seconds, for every subsequent request.
    pub fn set_timeout_seconds(&mut self, timeout_seconds: u64) {
        self.executor.set_timeout_seconds(timeout_seconds);
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.executor.timeout_seconds()
    }

    /// Raw access for endpoints this client does not wrap yet.
    pub fn executor(&self) -> &RequestExecutor<F> {
        &self.executor
    }

    /// Look up a player by id. String fields are whitespace-trimmed; the
    /// service pads many last names.
    pub fn get_player(&self, id: &str) -> Result<Player, ApiError> {
        let decoded = self.executor.get(&format!("player/{id}"), &[])?;
        map_player(&decoded)
    }

    /// Ids of players whose name contains `segment`.
    pub fn list_player_ids_by_name_segment(&self, segment: &str) -> Result<Vec<String>, ApiError> {
        let decoded = self.executor.get("player/search", &[("q", segment)])?;
        map_id_list(&decoded)
    }

    /// Ids of players registered with `email`.
    pub fn list_player_ids_by_email(&self, email: &str) -> Result<Vec<String>, ApiError> {
        let decoded = self.executor.get("player/search", &[("email", email)])?;
        map_id_list(&decoded)
    }
}
