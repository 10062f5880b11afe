//! Shared MongoDB error mapping for repository adapters.

use mongodb::error::{CommandError, Error as MongoError, ErrorKind};
use tracing::debug;

use crate::domain::ports::ShareholderRepositoryError;

/// Server error code for an operand the server refuses to apply.
const BAD_VALUE: i32 = 2;

/// The server refuses an `$inc` whose result leaves the operand's range.
fn is_increment_overflow(command: &CommandError) -> bool {
    command.code == BAD_VALUE && command.message.contains("$inc")
}

/// Map a driver error onto the repository port's error categories.
///
/// Unreachable servers map to `Connection`, undecodable documents to
/// `Decode`, refused `$inc` updates to `Rejected`, and everything else to
/// `Query`.
pub(crate) fn map_mongo_error(error: MongoError) -> ShareholderRepositoryError {
    debug!(error = %error, "document store operation failed");

    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => ShareholderRepositoryError::connection(error.to_string()),
        ErrorKind::BsonDeserialization(_) => ShareholderRepositoryError::decode(error.to_string()),
        ErrorKind::Command(command) if is_increment_overflow(command) => {
            ShareholderRepositoryError::rejected("transaction would overflow the shares total")
        }
        _ => ShareholderRepositoryError::query(error.to_string()),
    }
}
