//! Database layer: the SQLite gateway and the task repository.
//!
//! The gateway owns the single-connection lifecycle and the idempotent
//! schema setup; the repository translates task operations into SQL and
//! shields callers from raw storage errors.

pub mod db;
pub mod tasks;
