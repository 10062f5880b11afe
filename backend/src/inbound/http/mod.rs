//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod request_config;
pub mod schemas;
pub mod shareholders;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register every route and the extractor configs on an app or scope.
///
/// Callers provide [`state::HttpState`] and [`health::HealthState`] as app
/// data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use shareholders::inbound::http::{configure, health::HealthState, state::HttpState};
/// use shareholders::outbound::persistence::InMemoryShareholderRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryShareholderRepository::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(request_config::json_config())
        .app_data(request_config::query_config())
        .service(health::root)
        .service(health::ready)
        .service(health::live)
        .service(shareholders::list_shareholders)
        .service(shareholders::create_shareholder)
        .service(shareholders::get_shareholder)
        .service(shareholders::update_shareholder)
        .service(shareholders::delete_shareholder)
        .service(shareholders::append_transaction);
}
