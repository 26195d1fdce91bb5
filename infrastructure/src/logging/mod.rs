//! Logging infrastructure — structured audit logging.
//!
//! Provides [`JsonlAuditLogger`], a JSONL file writer that implements the
//! [`AuditLogger`](retroform_application::AuditLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAuditLogger;
