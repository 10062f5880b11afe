//! Process-local `ShareholderRepository` used when no document store is
//! configured, and by HTTP tests.
//!
//! Records live behind a single mutex. Every operation completes while
//! holding the lock, so appends are atomic exactly as they are against the
//! document store.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::shareholder_document::decode_object_id;
use crate::domain::ports::{ShareholderRepository, ShareholderRepositoryError};
use crate::domain::{NewShareholder, Shareholder, ShareholderId, ShareholderPatch};

/// In-memory shareholder store.
///
/// # Examples
/// ```
/// use shareholders::domain::ports::ShareholderRepository;
/// use shareholders::outbound::persistence::InMemoryShareholderRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryShareholderRepository::new();
/// assert!(repo.list_all().await.expect("list").is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryShareholderRepository {
    records: Mutex<Vec<Shareholder>>,
}

impl InMemoryShareholderRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<Shareholder>>, ShareholderRepositoryError> {
        self.records
            .lock()
            .map_err(|_| ShareholderRepositoryError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl ShareholderRepository for InMemoryShareholderRepository {
    async fn find_by_id(
        &self,
        id: &ShareholderId,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        let records = self.records()?;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Shareholder>, ShareholderRepositoryError> {
        Ok(self.records()?.clone())
    }

    async fn insert(
        &self,
        shareholder: &NewShareholder,
    ) -> Result<ShareholderId, ShareholderRepositoryError> {
        let id = decode_object_id(ObjectId::new())?;
        self.records()?
            .push(Shareholder::new(id.clone(), shareholder.clone()));
        Ok(id)
    }

    async fn delete_by_id(&self, id: &ShareholderId) -> Result<bool, ShareholderRepositoryError> {
        let mut records = self.records()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        Ok(records.len() < before)
    }

    async fn update_fields(
        &self,
        id: &ShareholderId,
        patch: &ShareholderPatch,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        let mut records = self.records()?;
        Ok(records
            .iter_mut()
            .find(|record| record.id() == id)
            .map(|record| {
                record.apply_patch(patch);
                record.clone()
            }))
    }

    async fn append_transaction(
        &self,
        id: &ShareholderId,
        amount: i64,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        let mut records = self.records()?;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        record
            .apply_transaction(amount)
            .map_err(|err| ShareholderRepositoryError::rejected(err.to_string()))?;
        Ok(Some(record.clone()))
    }
}
