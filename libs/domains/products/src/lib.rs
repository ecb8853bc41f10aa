//! Products Domain
//!
//! Product catalog backed by PostgreSQL through Sea-ORM, with an in-memory
//! repository for development and handler tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, multipart upload
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← List parameter parsing, validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌────────────┐
//! │ Repository  │     │ ImageStore │  ← Upload directory
//! └──────┬──────┘     └────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← Sea-ORM model for the products table
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, ImageStore, PgProductRepository, ProductService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://localhost/catalog").await?;
//!
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository, ImageStore::new("/static"));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod images;
pub mod models;
pub mod postgres;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use images::ImageStore;
pub use models::{ImageUpload, PRODUCT_TYPES, Product, ProductInput, ProductPage, ProductTypes};
pub use postgres::PgProductRepository;
pub use query::{ListProductsParams, ProductFilter, ProductQuery, SortField, SortOrder};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
