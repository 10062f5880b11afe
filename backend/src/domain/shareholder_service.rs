//! Shareholder domain service.
//!
//! Implements the shareholder driving ports on top of a
//! [`ShareholderRepository`]. Each use case issues at most two repository
//! calls and maps adapter failures onto domain error codes.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    ShareholderCommand, ShareholderQuery, ShareholderRepository, ShareholderRepositoryError,
};
use crate::domain::{Error, NewShareholder, Shareholder, ShareholderId, ShareholderPatch};

/// Build the `NotFound` error reported for an id that matches no record.
///
/// Callers pass the raw id as received so malformed ids read the same as
/// well-formed ones that are simply absent.
pub fn shareholder_not_found(id: impl fmt::Display) -> Error {
    Error::not_found(format!("Shareholder {id} not found"))
}

fn map_repository_error(error: ShareholderRepositoryError) -> Error {
    match error {
        ShareholderRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("shareholder store unavailable: {message}"))
        }
        ShareholderRepositoryError::Query { message } => {
            Error::internal(format!("shareholder store error: {message}"))
        }
        ShareholderRepositoryError::Decode { message } => {
            Error::internal(format!("stored shareholder is malformed: {message}"))
        }
        ShareholderRepositoryError::Rejected { message } => Error::invalid_request(message),
    }
}

/// Shareholder service implementing both command and query driving ports.
#[derive(Clone)]
pub struct ShareholderService<R> {
    repo: Arc<R>,
}

impl<R> ShareholderService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ShareholderQuery for ShareholderService<R>
where
    R: ShareholderRepository,
{
    async fn get_shareholder(&self, id: &ShareholderId) -> Result<Shareholder, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| shareholder_not_found(id))
    }

    async fn list_shareholders(&self) -> Result<Vec<Shareholder>, Error> {
        self.repo.list_all().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> ShareholderCommand for ShareholderService<R>
where
    R: ShareholderRepository,
{
    async fn create_shareholder(&self, shareholder: NewShareholder) -> Result<Shareholder, Error> {
        let id = self
            .repo
            .insert(&shareholder)
            .await
            .map_err(map_repository_error)?;
        info!(shareholder_id = %id, "shareholder created");

        self.repo
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::internal(format!("shareholder {id} vanished after insert")))
    }

    async fn delete_shareholder(&self, id: &ShareholderId) -> Result<(), Error> {
        let deleted = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(shareholder_not_found(id));
        }
        info!(shareholder_id = %id, "shareholder deleted");
        Ok(())
    }

    async fn update_shareholder(
        &self,
        id: &ShareholderId,
        patch: ShareholderPatch,
    ) -> Result<Shareholder, Error> {
        if patch.is_empty() {
            debug!(shareholder_id = %id, "empty update; returning current record");
            return self.get_shareholder(id).await;
        }

        let fields = patch.present_fields();
        let updated = self
            .repo
            .update_fields(id, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| shareholder_not_found(id))?;
        info!(shareholder_id = %id, ?fields, "shareholder updated");
        Ok(updated)
    }

    async fn append_transaction(
        &self,
        id: &ShareholderId,
        amount: i64,
    ) -> Result<Shareholder, Error> {
        let updated = self
            .repo
            .append_transaction(id, amount)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| shareholder_not_found(id))?;
        info!(
            shareholder_id = %id,
            amount,
            shares = updated.shares(),
            "transaction appended"
        );
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "shareholder_service_tests.rs"]
mod tests;
