//! HTTP handlers for the principal API

use axum::Extension;
use axum::extract::State;
use serde_json::Value;
use std::sync::Arc;

use super::schema::PrincipalTeacherSchema;
use crate::core::auth::AuthPrincipal;
use crate::core::error::ApiResult;
use crate::core::response::ApiResponse;
use crate::core::schema::Schema;
use crate::core::service::DataService;
use crate::entities::Teacher;

/// State shared by the principal handlers
#[derive(Clone)]
pub struct PrincipalState {
    pub teachers: Arc<dyn DataService<Teacher>>,
}

/// `GET /teachers`: every teacher, in store order, as principal views
///
/// Only reachable behind the principal [`RoleGuard`](crate::core::auth::RoleGuard).
/// `PrincipalTeacherView` holds only integers, strings and UTC timestamps, so
/// its encoding does not fail in practice; a failure would still surface as
/// a 500 `SERIALIZATION_ERROR` through `dump_json`.
pub async fn list_teachers(
    State(state): State<PrincipalState>,
    Extension(principal): Extension<AuthPrincipal>,
) -> ApiResult<ApiResponse<Value>> {
    let teachers = state.teachers.list().await?;

    tracing::debug!(
        principal_id = ?principal.principal_id,
        count = teachers.len(),
        "listing teachers"
    );

    let data = PrincipalTeacherSchema.dump_json(&teachers)?;
    Ok(ApiResponse::respond(data))
}
