//! Audit trail for budget-easy
//!
//! Every create, update and delete performed through the services can be
//! recorded with before/after values in an append-only JSONL file.
//!
//! - `AuditEntry`: one recorded change
//! - `AuditLogger`: appends entries to the log and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
