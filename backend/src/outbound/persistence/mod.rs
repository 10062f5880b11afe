//! Shareholder persistence adapters.
//!
//! Concrete implementations of [`crate::domain::ports::ShareholderRepository`]:
//!
//! - [`MongoShareholderRepository`] stores one document per shareholder in a
//!   MongoDB collection, reached through a shared [`MongoStore`] handle.
//! - [`InMemoryShareholderRepository`] keeps records in process memory for
//!   local runs without a database and for HTTP tests.
//!
//! BSON document shapes (`shareholder_document`) are internal and never
//! reach the domain layer. Driver errors are mapped onto the port's error
//! categories in `mongo_error_mapping`.
//!
//! # Example
//!
//! ```no_run
//! use shareholders::outbound::persistence::{
//!     MongoShareholderRepository, MongoStore, StoreConfig,
//! };
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MongoStore::connect(StoreConfig::new("mongodb://localhost:27017")).await?;
//! let repo = MongoShareholderRepository::new(&store);
//! # drop(repo);
//! store.close().await;
//! # Ok(())
//! # }
//! ```

mod in_memory_shareholder_repository;
mod mongo_error_mapping;
mod mongo_shareholder_repository;
mod mongo_store;
mod shareholder_document;

pub use in_memory_shareholder_repository::InMemoryShareholderRepository;
pub use mongo_shareholder_repository::MongoShareholderRepository;
pub use mongo_store::{DEFAULT_COLLECTION, DEFAULT_DATABASE, MongoStore, StoreConfig, StoreError};
