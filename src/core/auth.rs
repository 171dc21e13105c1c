//! Authorization for the classroom API
//!
//! A request is authenticated by an [`AuthProvider`], which turns request
//! headers into an [`AuthPrincipal`]. A [`RoleGuard`] then checks that the
//! principal holds the [`Role`] a route family requires. The guard runs as
//! an explicit middleware ([`require_role`]) layered on the routes it
//! protects, and hands the principal to handlers through request extensions.

use crate::core::error::{ApiError, ApiResult, RequestError};
use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Header carrying the caller identity as JSON
pub const PRINCIPAL_HEADER: &str = "x-principal";

/// Identity of the caller, resolved once per request
///
/// A user may act as a student, a teacher, a principal, or any mix of
/// these; each role is present when its id is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthPrincipal {
    pub user_id: i64,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub principal_id: Option<i64>,
}

impl AuthPrincipal {
    pub fn is_student(&self) -> bool {
        self.student_id.is_some()
    }

    pub fn is_teacher(&self) -> bool {
        self.teacher_id.is_some()
    }

    pub fn is_principal(&self) -> bool {
        self.principal_id.is_some()
    }
}

/// Role a route family requires from its callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    Principal,
}

impl Role {
    /// Check if the principal holds this role
    pub fn check(&self, principal: &AuthPrincipal) -> bool {
        match self {
            Role::Student => principal.is_student(),
            Role::Teacher => principal.is_teacher(),
            Role::Principal => principal.is_principal(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Principal => "principal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the caller identity from request headers
    ///
    /// Fails with [`RequestError::Unauthorized`] when no credential is
    /// present and [`RequestError::InvalidHeader`] when it cannot be read.
    async fn extract_principal(&self, headers: &HeaderMap) -> ApiResult<AuthPrincipal>;
}

/// Provider reading the `X-Principal` JSON header
///
/// Token issuance and signature checks happen upstream; this provider
/// trusts the header as forwarded by the gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderAuthProvider;

#[async_trait]
impl AuthProvider for HeaderAuthProvider {
    async fn extract_principal(&self, headers: &HeaderMap) -> ApiResult<AuthPrincipal> {
        let raw = headers
            .get(PRINCIPAL_HEADER)
            .ok_or_else(|| RequestError::Unauthorized {
                message: "principal not found".to_string(),
            })?;

        let raw = raw.to_str().map_err(|e| RequestError::InvalidHeader {
            header: "X-Principal".to_string(),
            message: e.to_string(),
        })?;

        let principal = serde_json::from_str(raw).map_err(|e| RequestError::InvalidHeader {
            header: "X-Principal".to_string(),
            message: e.to_string(),
        })?;

        Ok(principal)
    }
}

/// Authentication plus role check for one route family
#[derive(Clone)]
pub struct RoleGuard {
    provider: Arc<dyn AuthProvider>,
    role: Role,
}

impl RoleGuard {
    pub fn new(provider: Arc<dyn AuthProvider>, role: Role) -> Self {
        Self { provider, role }
    }

    /// Resolve the principal and require the guarded role
    pub async fn authorize(&self, headers: &HeaderMap) -> ApiResult<AuthPrincipal> {
        let principal = self.provider.extract_principal(headers).await.inspect_err(|e| {
            tracing::warn!(role = %self.role, error = %e, "authentication failed");
        })?;

        if !self.role.check(&principal) {
            tracing::warn!(
                role = %self.role,
                user_id = principal.user_id,
                "requester lacks required role"
            );
            return Err(RequestError::Forbidden {
                message: format!("requester should be a {}", self.role),
            }
            .into());
        }

        Ok(principal)
    }
}

/// Middleware gating a router on a [`RoleGuard`]
///
/// On success the [`AuthPrincipal`] is stored in the request extensions,
/// where handlers take it with `Extension<AuthPrincipal>`. On failure the
/// inner handler never runs.
pub async fn require_role(
    State(guard): State<RoleGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = guard.authorize(req.headers()).await?;
    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}
