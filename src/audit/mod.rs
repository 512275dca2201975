//! Audit logging
//!
//! Every party and entry created in a session can be recorded in an
//! append-only audit log, one JSON object per line (JSONL). The log is a
//! trail of what happened; it is never read back into the ledger.
//!
//! # Example
//!
//! ```rust,ignore
//! use party_ledger::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Party,
//!     party.id.to_string(),
//!     Some(party.name.clone()),
//!     &party,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
