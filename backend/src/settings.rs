//! Application settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `SHAREHOLDERS_*` environment variables and
//! configuration files. Everything is optional; accessors supply defaults.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{DEFAULT_COLLECTION, DEFAULT_DATABASE, StoreConfig};

const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at start-up.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHAREHOLDERS")]
pub struct AppSettings {
    /// MongoDB connection string. Without one, records are kept in memory.
    pub mongodb_url: Option<String>,
    /// Database holding the shareholder collection.
    pub database: Option<String>,
    /// Collection name.
    pub collection: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
}

impl AppSettings {
    /// Return the configured database, falling back to `company-x`.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Return the configured collection, falling back to `shareholders`.
    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }

    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Document store configuration, when a connection string is set.
    pub fn store_config(&self) -> Option<StoreConfig> {
        self.mongodb_url.as_ref().map(|uri| {
            StoreConfig::new(uri.clone())
                .with_database(self.database())
                .with_collection(self.collection())
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "SHAREHOLDERS_MONGODB_URL",
        "SHAREHOLDERS_DATABASE",
        "SHAREHOLDERS_COLLECTION",
        "SHAREHOLDERS_BIND_ADDR",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("shareholders")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert!(settings.mongodb_url.is_none());
        assert!(settings.store_config().is_none());
        assert_eq!(settings.database(), "company-x");
        assert_eq!(settings.collection(), "shareholders");
        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SHAREHOLDERS_MONGODB_URL",
                Some("mongodb://db.internal:27017".to_owned()),
            ),
            ("SHAREHOLDERS_DATABASE", Some("registry".to_owned())),
            ("SHAREHOLDERS_COLLECTION", Some("holders".to_owned())),
            ("SHAREHOLDERS_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let store = settings.store_config().expect("store configured");

        assert_eq!(
            settings.mongodb_url.as_deref(),
            Some("mongodb://db.internal:27017")
        );
        assert_eq!(store.database(), "registry");
        assert_eq!(store.collection(), "holders");
        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
    }
}
