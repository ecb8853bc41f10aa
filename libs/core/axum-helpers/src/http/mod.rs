//! HTTP middleware module.
//!
//! - CORS allow-list enforcement
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_middleware, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn_with_state(Arc::new(cors_config), cors_middleware));
//! ```

pub mod cors;
pub mod security;

pub use cors::cors_middleware;
pub use security::security_headers;
