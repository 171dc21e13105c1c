//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router`.

use super::super::host::ServerHost;
use crate::core::error::{ApiError, RequestError};
use crate::principal::{PrincipalState, build_principal_routes};
use axum::http::{Method, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Principal routes, under the host's prefix
    /// - Custom routes
    /// - A JSON 404 fallback
    /// - HTTP request tracing
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Router {
        let principal_state = PrincipalState {
            teachers: host.teacher_service.clone(),
        };
        let principal_routes =
            build_principal_routes(principal_state, host.auth_provider.clone());

        let mut app = Self::health_routes();

        app = if host.principal_prefix.is_empty() {
            app.merge(principal_routes)
        } else {
            app.nest(&host.principal_prefix, principal_routes)
        };

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.fallback(Self::not_found)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "classroom-api"
        }))
    }

    async fn not_found(method: Method, uri: Uri) -> ApiError {
        RequestError::RouteNotFound {
            method: method.to_string(),
            path: uri.path().to_string(),
        }
        .into()
    }
}
