//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use shareholders::outbound::persistence::MongoStore;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Option<MongoStore>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a configuration binding to `bind_addr` with no store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach the document store backing the shareholder repository.
    ///
    /// Without one the server keeps records in process memory.
    #[must_use]
    pub fn with_store(mut self, store: MongoStore) -> Self {
        self.store = Some(store);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
