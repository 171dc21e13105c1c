//! Server host for transport-agnostic API exposure
//!
//! The host holds every collaborator the API needs. Exposures (only REST
//! today) consume it to build their routers.

use crate::core::auth::AuthProvider;
use crate::core::service::DataService;
use crate::entities::Teacher;
use std::sync::Arc;

/// Host context containing all application state
pub struct ServerHost {
    /// Data access for teacher records
    pub teacher_service: Arc<dyn DataService<Teacher>>,

    /// Resolves callers into principals
    pub auth_provider: Arc<dyn AuthProvider>,

    /// Mount point of the principal routes ("" mounts them at the root)
    pub principal_prefix: String,
}

impl ServerHost {
    pub fn new(
        teacher_service: Arc<dyn DataService<Teacher>>,
        auth_provider: Arc<dyn AuthProvider>,
        principal_prefix: impl Into<String>,
    ) -> Self {
        Self {
            teacher_service,
            auth_provider,
            principal_prefix: normalize_prefix(&principal_prefix.into()),
        }
    }
}

/// Strip trailing slashes and force a leading one; "/" and "" become ""
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
