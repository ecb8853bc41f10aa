//! Products API routes

use axum::Router;
use domain_products::{handlers, ImageStore, PgProductRepository, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let images = ImageStore::new(&state.config.upload_dir);
    handlers::router(ProductService::new(repository, images))
}
