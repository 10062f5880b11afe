//! Shareholder registry backend.
//!
//! Hexagonal layout: [`domain`] holds the model, ports and use cases;
//! [`inbound`] adapts HTTP onto the driving ports; [`outbound`] implements
//! the repository port against MongoDB or process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
