//! Employee directory backend.
//!
//! Hexagonal layout: `domain` holds the employee model, coded errors and the
//! service; `inbound::http` adapts it to actix-web; `outbound` provides the
//! PostgreSQL and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
