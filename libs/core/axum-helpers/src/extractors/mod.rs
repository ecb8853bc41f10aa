//! Custom extractors for Axum handlers.
//!
//! All extractors reject with [`AppError`](crate::errors::AppError) so every
//! malformed request gets the standard JSON error body.

pub mod id_path;
pub mod json_body;
pub mod query_params;

pub use id_path::{IdPath, NamedResource};
pub use json_body::JsonBody;
pub use query_params::QueryParams;
