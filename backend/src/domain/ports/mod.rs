//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`ShareholderCommand`, `ShareholderQuery`) are consumed by
//! inbound adapters; the driven port (`ShareholderRepository`) is implemented
//! by outbound persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod shareholder_command;
mod shareholder_query;
mod shareholder_repository;

#[cfg(test)]
pub use shareholder_command::MockShareholderCommand;
pub use shareholder_command::ShareholderCommand;
#[cfg(test)]
pub use shareholder_query::MockShareholderQuery;
pub use shareholder_query::ShareholderQuery;
#[cfg(test)]
pub use shareholder_repository::MockShareholderRepository;
pub use shareholder_repository::{ShareholderRepository, ShareholderRepositoryError};
