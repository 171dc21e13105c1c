//! Server module for building the HTTP server
//!
//! `ServerBuilder` collects the collaborators, `ServerHost` holds them, and
//! `RestExposure` turns the host into an Axum router.

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
