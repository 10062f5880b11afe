//! Extractor configuration turning malformed input into `invalid_request`.
//!
//! Without these handlers Actix answers bad JSON bodies and query strings
//! with plain-text errors that bypass the shared error payload.

use actix_web::web;
use tracing::debug;

use crate::domain::Error;

/// JSON body extractor config mapping payload errors to 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected request body");
        Error::invalid_request(format!("Invalid request body: {err}")).into()
    })
}

/// Query extractor config mapping parse errors to 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected query string");
        Error::invalid_request(format!("Invalid query string: {err}")).into()
    })
}
