//! Domain primitives, ports, and services.
//!
//! Purpose: define the shareholder model and its use cases independently of
//! HTTP and of the document store. Inbound adapters depend on the driving
//! ports in [`ports`]; outbound adapters implement the driven repository port.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Shareholder, ShareholderId, ShareholderName, NewShareholder,
//!   ShareholderPatch: the record and its input shapes.
//! - ShareholderService: use-case implementation over a repository.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
mod shareholder;
mod shareholder_service;
mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::shareholder::{
    NewShareholder, SHAREHOLDER_ID_LEN, Shareholder, ShareholderId, ShareholderName,
    ShareholderPatch, ShareholderValidationError,
};
pub use self::shareholder_service::{ShareholderService, shareholder_not_found};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
