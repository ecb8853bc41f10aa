use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    query::{ProductFilter, ProductQuery, SortField, SortOrder},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository using Sea-ORM
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filtered(filter: &ProductFilter) -> Select<entity::Entity> {
        let mut query = entity::Entity::find();

        if let Some(name) = &filter.name {
            query = query.filter(entity::Column::Name.contains(name));
        }
        if let Some(product_type) = &filter.product_type {
            query = query.filter(entity::Column::ProductType.contains(product_type));
        }
        if let Some(min) = filter.price_min {
            query = query.filter(entity::Column::Price.gte(min));
        }
        if let Some(max) = filter.price_max {
            query = query.filter(entity::Column::Price.lte(max));
        }

        query
    }
}

fn column(field: SortField) -> entity::Column {
    match field {
        SortField::Id => entity::Column::Id,
        SortField::Name => entity::Column::Name,
        SortField::Type => entity::Column::ProductType,
        SortField::Price => entity::Column::Price,
        SortField::Description => entity::Column::Description,
        SortField::ImagePath => entity::Column::ImagePath,
    }
}

fn order(sort_order: SortOrder) -> Order {
    match sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64> {
        Ok(Self::filtered(filter).count(&self.db).await?)
    }

    async fn find_page(&self, query: &ProductQuery) -> ProductResult<Vec<Product>> {
        let models = Self::filtered(&query.filter)
            .order_by(column(query.sort_by), order(query.sort_order))
            .limit(query.page_size)
            .offset(query.offset())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ProductError::NotFound(id),
            other => ProductError::Database(other),
        })?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(model.into())
    }
}
