//! Document-store connection handle.
//!
//! Wraps the `mongodb` client so the rest of the crate sees one explicitly
//! constructed handle with a defined lifecycle: [`MongoStore::connect`] at
//! process start, [`MongoStore::close`] at shutdown. The driver client is
//! internally pooled and safe to share across request tasks.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::info;

/// Errors raised while opening the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed.
    #[error("invalid document store connection string: {message}")]
    Options { message: String },

    /// The store did not answer the initial ping.
    #[error("failed to reach document store: {message}")]
    Connect { message: String },
}

impl StoreError {
    /// Create an options error with the given message.
    pub fn options(message: impl Into<String>) -> Self {
        Self::Options {
            message: message.into(),
        }
    }

    /// Create a connect error with the given message.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }
}

/// Default database holding the shareholder collection.
pub const DEFAULT_DATABASE: &str = "company-x";
/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "shareholders";

/// Configuration for the document store connection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use shareholders::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017")
///     .with_database("registry")
///     .with_server_selection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database(), "registry");
/// assert_eq!(config.collection(), "shareholders");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    collection: String,
    server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration for the given connection string.
    ///
    /// Defaults:
    /// - `database`: `company-x`
    /// - `collection`: `shareholders`
    /// - `server_selection_timeout`: 10 seconds
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    /// Set the database name.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Bound how long the driver waits for a usable server.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// Shared handle to the shareholder collection's database.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: String,
    collection: String,
}

impl MongoStore {
    /// Open the store and verify it answers a ping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Options`] for an unparsable connection string and
    /// [`StoreError::Connect`] when the server cannot be reached.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let StoreConfig {
            uri,
            database,
            collection,
            server_selection_timeout,
        } = config;

        let mut options = ClientOptions::parse(&uri)
            .await
            .map_err(|err| StoreError::options(err.to_string()))?;
        options.server_selection_timeout = Some(server_selection_timeout);
        options
            .app_name
            .get_or_insert_with(|| env!("CARGO_PKG_NAME").to_owned());

        let client =
            Client::with_options(options).map_err(|err| StoreError::connect(err.to_string()))?;
        client
            .database(&database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::connect(err.to_string()))?;

        info!(%database, %collection, "document store connected");
        Ok(Self {
            client,
            database,
            collection,
        })
    }

    /// Typed handle to the configured collection.
    pub fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.client
            .database(&self.database)
            .collection::<T>(&self.collection)
    }

    /// Close every pooled connection. Outstanding clones become unusable.
    pub async fn close(self) {
        self.client.shutdown().await;
        info!("document store closed");
    }
}
