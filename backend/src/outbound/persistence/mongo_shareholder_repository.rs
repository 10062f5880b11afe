//! MongoDB-backed `ShareholderRepository` implementation.
//!
//! Thin adapter: it translates between [`ShareholderDocument`] and domain
//! types and performs every mutation as a single-document server operation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;

use super::mongo_error_mapping::map_mongo_error;
use super::mongo_store::MongoStore;
use super::shareholder_document::{
    ShareholderDocument, append_update, decode_object_id, id_filter, patch_update,
};
use crate::domain::ports::{ShareholderRepository, ShareholderRepositoryError};
use crate::domain::{NewShareholder, Shareholder, ShareholderId, ShareholderPatch};

/// MongoDB implementation of the shareholder repository port.
#[derive(Clone)]
pub struct MongoShareholderRepository {
    collection: Collection<ShareholderDocument>,
}

impl MongoShareholderRepository {
    /// Create a repository over the store's configured collection.
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(),
        }
    }

    fn decode(
        document: Option<ShareholderDocument>,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        document.map(Shareholder::try_from).transpose()
    }
}

#[async_trait]
impl ShareholderRepository for MongoShareholderRepository {
    async fn find_by_id(
        &self,
        id: &ShareholderId,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        let document = self
            .collection
            .find_one(id_filter(id)?)
            .await
            .map_err(map_mongo_error)?;
        Self::decode(document)
    }

    async fn list_all(&self) -> Result<Vec<Shareholder>, ShareholderRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;
        let documents: Vec<ShareholderDocument> =
            cursor.try_collect().await.map_err(map_mongo_error)?;
        documents.into_iter().map(Shareholder::try_from).collect()
    }

    async fn insert(
        &self,
        shareholder: &NewShareholder,
    ) -> Result<ShareholderId, ShareholderRepositoryError> {
        let result = self
            .collection
            .insert_one(ShareholderDocument::from(shareholder))
            .await
            .map_err(map_mongo_error)?;
        let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
            ShareholderRepositoryError::decode("store assigned a non-ObjectId _id")
        })?;
        decode_object_id(object_id)
    }

    async fn delete_by_id(&self, id: &ShareholderId) -> Result<bool, ShareholderRepositoryError> {
        let result = self
            .collection
            .delete_one(id_filter(id)?)
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count == 1)
    }

    async fn update_fields(
        &self,
        id: &ShareholderId,
        patch: &ShareholderPatch,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        let document = self
            .collection
            .find_one_and_update(id_filter(id)?, patch_update(patch))
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?;
        Self::decode(document)
    }

    async fn append_transaction(
        &self,
        id: &ShareholderId,
        amount: i64,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError> {
        let document = self
            .collection
            .find_one_and_update(id_filter(id)?, append_update(amount))
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?;
        Self::decode(document)
    }
}
