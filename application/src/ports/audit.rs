//! Port for structured audit logging.
//!
//! Defines the [`AuditLogger`] trait for recording administrative mutations
//! (member deletion, form deletion, review deletion) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable trail of who-deleted-what for later inspection.

use serde_json::Value;

/// A structured audit event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields; the adapter stamps the record time.
pub struct AuditEvent {
    /// Event type identifier (e.g., "member_deleted", "review_form_deleted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording audit events.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible to
/// avoid disrupting the main execution flow — logging failures must not
/// abort an admin operation.
pub trait AuditLogger: Send + Sync {
    /// Record an audit event.
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
