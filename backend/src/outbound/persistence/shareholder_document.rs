//! BSON document shape for the shareholder collection.
//!
//! Internal to the persistence layer; never exposed to the domain. Missing
//! `shares` or `transactions` fields decode as `0` and `[]` so documents
//! written by other tools remain readable.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::ShareholderRepositoryError;
use crate::domain::{
    NewShareholder, Shareholder, ShareholderId, ShareholderName, ShareholderPatch,
};

/// Stored representation of a shareholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ShareholderDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub shares: i64,
    #[serde(default)]
    pub transactions: Vec<i64>,
}

impl From<&NewShareholder> for ShareholderDocument {
    fn from(value: &NewShareholder) -> Self {
        Self {
            id: None,
            name: value.name.as_ref().to_owned(),
            shares: value.shares,
            transactions: value.transactions.clone(),
        }
    }
}

impl TryFrom<ShareholderDocument> for Shareholder {
    type Error = ShareholderRepositoryError;

    fn try_from(value: ShareholderDocument) -> Result<Self, Self::Error> {
        let ShareholderDocument {
            id,
            name,
            shares,
            transactions,
        } = value;

        let object_id = id.ok_or_else(|| ShareholderRepositoryError::decode("document has no _id"))?;
        let id = decode_object_id(object_id)?;
        Ok(Shareholder::new(
            id,
            NewShareholder {
                name: ShareholderName::from_stored(name),
                shares,
                transactions,
            },
        ))
    }
}

/// Convert a store-assigned object id into the domain identifier.
pub(crate) fn decode_object_id(
    object_id: ObjectId,
) -> Result<ShareholderId, ShareholderRepositoryError> {
    ShareholderId::new(object_id.to_hex())
        .map_err(|err| ShareholderRepositoryError::decode(err.to_string()))
}

/// Filter matching exactly the document with the given id.
pub(crate) fn id_filter(id: &ShareholderId) -> Result<Document, ShareholderRepositoryError> {
    let object_id = ObjectId::parse_str(id.as_ref())
        .map_err(|err| ShareholderRepositoryError::query(format!("invalid object id: {err}")))?;
    Ok(doc! { "_id": object_id })
}

/// `$set` update carrying only the fields present in the patch.
pub(crate) fn patch_update(patch: &ShareholderPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.as_ref());
    }
    if let Some(shares) = patch.shares {
        set.insert("shares", shares);
    }
    if let Some(transactions) = &patch.transactions {
        set.insert("transactions", transactions.clone());
    }
    doc! { "$set": set }
}

/// Single-document update appending a transaction and adjusting the total.
///
/// `$push` and `$inc` apply atomically on the server, so concurrent appends
/// never overwrite each other.
pub(crate) fn append_update(amount: i64) -> Document {
    doc! {
        "$push": { "transactions": amount },
        "$inc": { "shares": amount },
    }
}
