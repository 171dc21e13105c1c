//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::core::auth::{AuthProvider, HeaderAuthProvider};
use crate::core::service::DataService;
use crate::entities::Teacher;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Default mount point of the principal routes
pub const DEFAULT_PRINCIPAL_PREFIX: &str = "/principal";

/// Builder for creating HTTP servers
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_teacher_service(InMemoryDataService::<Teacher>::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    teacher_service: Option<Arc<dyn DataService<Teacher>>>,
    auth_provider: Arc<dyn AuthProvider>,
    principal_prefix: String,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    ///
    /// Authentication defaults to [`HeaderAuthProvider`].
    pub fn new() -> Self {
        Self {
            teacher_service: None,
            auth_provider: Arc::new(HeaderAuthProvider),
            principal_prefix: DEFAULT_PRINCIPAL_PREFIX.to_string(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the teacher data service (required)
    pub fn with_teacher_service(mut self, service: impl DataService<Teacher> + 'static) -> Self {
        self.teacher_service = Some(Arc::new(service));
        self
    }

    /// Replace the authentication provider
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Arc::new(provider);
        self
    }

    /// Mount the principal routes under another prefix ("" for the root)
    pub fn with_principal_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.principal_prefix = prefix.into();
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes are not guarded; layer a
    /// [`RoleGuard`](crate::core::auth::RoleGuard) on them if they need one.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let teacher_service = self.teacher_service.take().ok_or_else(|| {
            anyhow::anyhow!("TeacherService is required. Call .with_teacher_service()")
        })?;

        Ok(ServerHost::new(
            teacher_service,
            self.auth_provider,
            self.principal_prefix,
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        Ok(RestExposure::build_router(host, custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
