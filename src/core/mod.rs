//! Core module containing fundamental traits and types

pub mod auth;
pub mod entity;
pub mod error;
pub mod response;
pub mod schema;
pub mod service;

pub use auth::{AuthPrincipal, AuthProvider, HeaderAuthProvider, Role, RoleGuard, require_role};
pub use entity::Entity;
pub use error::{ApiError, ApiResult, EntityError, RequestError, StorageError};
pub use response::ApiResponse;
pub use schema::Schema;
pub use service::DataService;
