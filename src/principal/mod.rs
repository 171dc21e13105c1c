//! Principal-facing API
//!
//! Routes in this module require a caller holding the principal role.
//! The role check is a middleware layered on the matched routes only, so
//! unknown paths still fall through to the server's 404 handler.

pub mod handlers;
pub mod schema;

pub use handlers::{PrincipalState, list_teachers};
pub use schema::{PrincipalTeacherSchema, PrincipalTeacherView};

use crate::core::auth::{AuthProvider, Role, RoleGuard, require_role};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Build the principal routes
///
/// - GET /teachers - List all teachers
///
/// Paths are matched exactly; `/teachers/` is not an alias.
pub fn build_principal_routes(state: PrincipalState, auth: Arc<dyn AuthProvider>) -> Router {
    let guard = RoleGuard::new(auth, Role::Principal);

    Router::new()
        .route("/teachers", get(list_teachers))
        .route_layer(middleware::from_fn_with_state(guard, require_role))
        .with_state(state)
}
