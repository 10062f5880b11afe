//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ShareholderService;
use crate::domain::ports::{ShareholderCommand, ShareholderQuery, ShareholderRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub shareholders: Arc<dyn ShareholderCommand>,
    pub shareholders_query: Arc<dyn ShareholderQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use shareholders::domain::ShareholderService;
    /// use shareholders::inbound::http::state::HttpState;
    /// use shareholders::outbound::persistence::InMemoryShareholderRepository;
    ///
    /// let service = Arc::new(ShareholderService::new(Arc::new(
    ///     InMemoryShareholderRepository::new(),
    /// )));
    /// let state = HttpState::new(service.clone(), service);
    /// let _data = actix_web::web::Data::new(state);
    /// ```
    pub fn new(
        shareholders: Arc<dyn ShareholderCommand>,
        shareholders_query: Arc<dyn ShareholderQuery>,
    ) -> Self {
        Self {
            shareholders,
            shareholders_query,
        }
    }

    /// Wire both ports to one [`ShareholderService`] over `repo`.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: ShareholderRepository + 'static,
    {
        let service = Arc::new(ShareholderService::new(repo));
        Self::new(service.clone(), service)
    }
}
