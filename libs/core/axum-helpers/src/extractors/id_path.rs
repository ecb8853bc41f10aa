//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::marker::PhantomData;

/// A resource addressable by a positive integer id.
///
/// `NAME` is used in the rejection message, e.g. "Invalid product id".
pub trait NamedResource {
    const NAME: &'static str;
}

/// Extractor for a single positive integer path parameter.
///
/// Anything that is not an integer greater than zero is rejected with
/// `400 {"error": "Invalid <resource> id"}`.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::{IdPath, NamedResource};
///
/// struct Order;
/// impl NamedResource for Order {
///     const NAME: &'static str = "order";
/// }
///
/// async fn get_order(IdPath(id, _): IdPath<Order>) -> String {
///     format!("Order {}", id)
/// }
///
/// let app: Router = Router::new().route("/orders/{id}", get(get_order));
/// ```
pub struct IdPath<R>(pub i32, pub PhantomData<R>);

impl<R: NamedResource> IdPath<R> {
    /// Parses a raw path segment. Ids are `SERIAL` keys, so anything outside
    /// `1..=i32::MAX` is rejected.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdPath(id, PhantomData)),
            _ => Err(AppError::InvalidId(format!("Invalid {} id", R::NAME))),
        }
    }

    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl<S, R> FromRequestParts<S> for IdPath<R>
where
    S: Send + Sync,
    R: NamedResource + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidId(format!("Invalid {} id", R::NAME)))?;

        Self::parse(&raw)
    }
}
