use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering as AtomicOrdering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::query::{ProductFilter, ProductQuery, SortField, SortOrder};

/// Repository trait for Product persistence
///
/// Implementations run single-statement operations against one products
/// table. Existence checks that turn into "not found" responses live in the
/// service, except for [`update`](ProductRepository::update) which reports a
/// missing row itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Count products matching a filter
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64>;

    /// One sorted page of products matching the query's filter
    async fn find_page(&self, query: &ProductQuery) -> ProductResult<Vec<Product>>;

    /// Insert a new product; storage assigns the id
    async fn insert(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Delete a product by ID. Deleting a missing row is not an error.
    async fn delete_by_id(&self, id: i32) -> ProductResult<()>;

    /// Replace every column of the row with `product.id`
    async fn update(&self, product: Product) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids come from a monotonically increasing counter and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Type => a.product_type.cmp(&b.product_type),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Description => a.description.cmp(&b.description),
        SortField::ImagePath => a.image_path.cmp(&b.image_path),
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn find_page(&self, query: &ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| query.filter.matches(p))
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort_by);
            match query.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(result
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size as usize)
            .collect())
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let product = input.into_product(id);
        products.insert(id, product.clone());

        tracing::info!(product_id = %id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let slot = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *slot = product.clone();

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }
}
