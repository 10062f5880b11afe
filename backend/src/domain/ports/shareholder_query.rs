//! Driving port for shareholder reads.

use async_trait::async_trait;

use crate::domain::{Error, Shareholder, ShareholderId};

/// Read-side use cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareholderQuery: Send + Sync {
    /// Fetch one shareholder; `NotFound` when the id matches nothing.
    async fn get_shareholder(&self, id: &ShareholderId) -> Result<Shareholder, Error>;

    /// Fetch every shareholder. An empty store yields an empty list.
    async fn list_shareholders(&self) -> Result<Vec<Shareholder>, Error>;
}
