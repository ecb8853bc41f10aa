//! Product Service - Business logic layer

use observability::ProductMetrics;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::images::ImageStore;
use crate::models::{ImageUpload, Product, ProductInput, ProductPage, ProductTypes};
use crate::query::{ListProductsParams, ProductQuery};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service parses list parameters, validates new products, turns missing
/// rows into [`ProductError::NotFound`] and stores uploaded images.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    images: ImageStore,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository and image store
    pub fn new(repository: R, images: ImageStore) -> Self {
        Self {
            repository: Arc::new(repository),
            images,
        }
    }

    /// List products matching the parameters, with the unpaginated total
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ListProductsParams) -> ProductResult<ProductPage> {
        let query = ProductQuery::try_from(params)?;

        let total = self.repository.count(&query.filter).await?;
        let products = self.repository.find_page(&query).await?;

        ProductMetrics::record_list(products.len(), total);
        Ok(ProductPage { products, total })
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        let product = self.repository.insert(input).await?;
        ProductMetrics::record_created();
        Ok(product)
    }

    /// Replace every field of an existing product.
    ///
    /// Update bodies are stored as sent; the create rules are not applied.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let product = self.repository.update(input.into_product(id)).await?;
        ProductMetrics::record_updated();
        Ok(product)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        ProductMetrics::record_deleted();
        Ok(())
    }

    /// Fixed list of display product types
    pub fn product_types(&self) -> ProductTypes {
        ProductTypes::default()
    }

    /// Store an uploaded image and return where it was written
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_image(&self, filename: &str, bytes: &[u8]) -> ProductResult<ImageUpload> {
        let url = self.images.save(filename, bytes).await?;
        ProductMetrics::record_image_uploaded(bytes.len());
        Ok(ImageUpload { url })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            images: self.images.clone(),
        }
    }
}
