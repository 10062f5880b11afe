//! Driven port for shareholder persistence and its errors.
//!
//! Every method maps to a single document-store call. Updates return the
//! post-image of the record, or `None` when no record matches the id.

use async_trait::async_trait;

use crate::domain::{NewShareholder, Shareholder, ShareholderId, ShareholderPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by shareholder repository adapters.
    pub enum ShareholderRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "shareholder repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "shareholder repository query failed: {message}",
        /// A stored document could not be turned into a domain record.
        Decode { message: String } =>
            "shareholder document could not be decoded: {message}",
        /// The store refused a mutation that would break a domain rule.
        Rejected { message: String } =>
            "shareholder update rejected: {message}",
    }
}

/// Port over the shareholder collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareholderRepository: Send + Sync {
    /// Fetch a shareholder by identifier.
    async fn find_by_id(
        &self,
        id: &ShareholderId,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError>;

    /// Fetch every shareholder in store order.
    async fn list_all(&self) -> Result<Vec<Shareholder>, ShareholderRepositoryError>;

    /// Insert a new record and return the identifier assigned by the store.
    async fn insert(
        &self,
        shareholder: &NewShareholder,
    ) -> Result<ShareholderId, ShareholderRepositoryError>;

    /// Delete a record. Returns `true` when exactly one record was removed.
    async fn delete_by_id(&self, id: &ShareholderId) -> Result<bool, ShareholderRepositoryError>;

    /// Atomically set the fields present in `patch` and return the post-image.
    async fn update_fields(
        &self,
        id: &ShareholderId,
        patch: &ShareholderPatch,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError>;

    /// Atomically push `amount` onto `transactions`, add it to `shares`, and
    /// return the post-image.
    async fn append_transaction(
        &self,
        id: &ShareholderId,
        amount: i64,
    ) -> Result<Option<Shareholder>, ShareholderRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ShareholderRepositoryError::connection("no primary"), "connection failed: no primary")]
    #[case(ShareholderRepositoryError::query("bad filter"), "query failed: bad filter")]
    #[case(ShareholderRepositoryError::decode("missing name"), "decoded: missing name")]
    #[case(ShareholderRepositoryError::rejected("overflow"), "rejected: overflow")]
    fn errors_format_their_message(
        #[case] error: ShareholderRepositoryError,
        #[case] fragment: &str,
    ) {
        assert!(error.to_string().contains(fragment), "{error}");
    }
}
