//! Service behavior configuration.

use serde::{Deserialize, Serialize};

/// Tunable behavior knobs for the use-case services.
///
/// Loaded from configuration files by the infrastructure layer; the
/// defaults are used when no file is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bounded retry count for allocating a unique form code.
    pub code_max_attempts: u32,
    /// Page size used when a caller does not specify one.
    pub default_page_size: usize,
    /// Hard upper bound on requested page sizes.
    pub max_page_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            code_max_attempts: 5,
            default_page_size: 10,
            max_page_size: 50,
        }
    }
}
