//! # Classroom API
//!
//! Principal-facing REST API over the teachers of a classroom system.
//!
//! ## Features
//!
//! - **Role Guard**: `X-Principal` header resolved into an [`AuthPrincipal`](core::AuthPrincipal),
//!   checked by an explicit middleware before any handler runs
//! - **Whitelisting Schemas**: records are projected onto output views, so
//!   internal fields never reach a response
//! - **Uniform Envelopes**: `{"data": ...}` on success, `{"code", "message"}` on error
//! - **Pluggable Storage**: any [`DataService`](core::DataService) backs the API; an
//!   ordered in-memory store ships for development and tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use classroom::prelude::*;
//!
//! let teachers = InMemoryDataService::new();
//! teachers.create(Teacher::new(1, 10, "Ada", "ada@school.test")).await?;
//!
//! ServerBuilder::new()
//!     .with_teacher_service(teachers)
//!     .serve("127.0.0.1:7755")
//!     .await?;
//!
//! // curl -H 'X-Principal: {"user_id": 5, "principal_id": 1}' \
//! //      http://127.0.0.1:7755/principal/teachers
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod principal;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{AuthPrincipal, AuthProvider, HeaderAuthProvider, PRINCIPAL_HEADER, Role, RoleGuard},
        entity::Entity,
        error::{ApiError, ApiResult, EntityError, RequestError, StorageError},
        response::ApiResponse,
        schema::Schema,
        service::DataService,
    };

    // === Entities ===
    pub use crate::entities::Teacher;

    // === Principal API ===
    pub use crate::principal::{
        PrincipalState, PrincipalTeacherSchema, PrincipalTeacherView, build_principal_routes,
    };

    // === Storage ===
    pub use crate::storage::InMemoryDataService;

    // === Config ===
    pub use crate::config::{AppConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
