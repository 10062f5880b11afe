//! Driving port for shareholder mutations.
//!
//! Each operation is a short linear sequence of repository calls with no
//! retries and no compensation: the first failing call ends the operation.

use async_trait::async_trait;

use crate::domain::{Error, NewShareholder, Shareholder, ShareholderId, ShareholderPatch};

/// Write-side use cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareholderCommand: Send + Sync {
    /// Insert a shareholder and return the stored record with its new id.
    async fn create_shareholder(&self, shareholder: NewShareholder) -> Result<Shareholder, Error>;

    /// Remove a shareholder; `NotFound` when nothing was deleted.
    async fn delete_shareholder(&self, id: &ShareholderId) -> Result<(), Error>;

    /// Apply a partial update and return the post-image.
    ///
    /// An empty patch performs no write and returns the record unchanged.
    async fn update_shareholder(
        &self,
        id: &ShareholderId,
        patch: ShareholderPatch,
    ) -> Result<Shareholder, Error>;

    /// Record a signed transaction and adjust `shares` by the same amount.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use shareholders::domain::{NewShareholder, ShareholderName, ShareholderService};
    /// # use shareholders::domain::ports::ShareholderCommand;
    /// # use shareholders::outbound::persistence::InMemoryShareholderRepository;
    /// # async fn example() -> Result<(), shareholders::domain::Error> {
    /// let service = ShareholderService::new(Arc::new(InMemoryShareholderRepository::new()));
    /// let alice = service
    ///     .create_shareholder(NewShareholder {
    ///         name: ShareholderName::new("Alice").expect("valid name"),
    ///         shares: 100,
    ///         transactions: vec![100],
    ///     })
    ///     .await?;
    /// let updated = service.append_transaction(alice.id(), -20).await?;
    /// assert_eq!(updated.shares(), 80);
    /// # Ok(())
    /// # }
    /// ```
    async fn append_transaction(
        &self,
        id: &ShareholderId,
        amount: i64,
    ) -> Result<Shareholder, Error>;
}
