//! Configuration file schema.

use retroform_application::ServiceConfig;
use serde::{Deserialize, Serialize};

/// On-disk configuration, as read from `retroform.toml`.
///
/// ```toml
/// [codes]
/// max_attempts = 5
///
/// [pagination]
/// default_page_size = 10
/// max_page_size = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub codes: FileCodeConfig,
    pub pagination: FilePaginationConfig,
}

/// Form-code allocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCodeConfig {
    /// Bounded retry count for allocating a unique code.
    pub max_attempts: u32,
}

impl Default for FileCodeConfig {
    fn default() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            max_attempts: defaults.code_max_attempts,
        }
    }
}

/// Pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for FilePaginationConfig {
    fn default() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            default_page_size: defaults.default_page_size,
            max_page_size: defaults.max_page_size,
        }
    }
}

impl FileConfig {
    /// Collapse into the service-layer configuration.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            code_max_attempts: self.codes.max_attempts.max(1),
            default_page_size: self.pagination.default_page_size.max(1),
            max_page_size: self
                .pagination
                .max_page_size
                .max(self.pagination.default_page_size)
                .max(1),
        }
    }
}
