use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr, Order};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    pagination::{Direction, Page, PageRequest},
    query::ProductQuery,
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Column behind a sortable JSON property
fn sort_column(property: &str) -> Option<entity::Column> {
    match property {
        "id" => Some(entity::Column::Id),
        "code" => Some(entity::Column::Code),
        "name" => Some(entity::Column::Name),
        "price" => Some(entity::Column::Price),
        "quantity" => Some(entity::Column::Quantity),
        "inventoryStatus" => Some(entity::Column::InventoryStatus),
        "category" => Some(entity::Column::Category),
        "rating" => Some(entity::Column::Rating),
        _ => None,
    }
}

/// `%`, `_` and `\` in user input match literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn filter_contains(
    select: Select<entity::Entity>,
    column: entity::Column,
    needle: &str,
) -> Select<entity::Entity> {
    let pattern = format!("%{}%", escape_like(needle));
    select.filter(Expr::col((entity::Entity, column)).ilike(LikeExpr::new(pattern).escape('\\')))
}

fn active_products(query: &ProductQuery) -> Select<entity::Entity> {
    let mut select = entity::Entity::find().filter(entity::Column::Deleted.eq(false));

    if let Some(code) = query.code() {
        select = filter_contains(select, entity::Column::Code, code);
    }
    if let Some(name) = query.name() {
        select = filter_contains(select, entity::Column::Name, name);
    }

    select
}

/// A unique violation on save means another product took the code in between
/// the existence check and the write.
fn map_save_error(err: DbErr, product: &Product, is_update: bool) -> ProductError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) if is_update => ProductError::CodeAlreadyTaken,
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ProductError::DuplicateCode(product.code.clone())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_active_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id)
            .filter(entity::Column::Deleted.eq(false))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_active(
        &self,
        query: ProductQuery,
        page: PageRequest,
    ) -> ProductResult<Page<Product>> {
        let mut select = active_products(&query);

        // Past the largest OFFSET Postgres takes, only the count is meaningful
        if page.checked_offset().is_none() {
            let total = select.count(&self.db).await?;
            tracing::debug!(?query, page = page.page, size = page.size, total, "Page out of range");
            return Ok(Page::new(Vec::new(), &page, total));
        }

        for order in &page.sort {
            if let Some(column) = sort_column(&order.property) {
                let direction = match order.direction {
                    Direction::Asc => Order::Asc,
                    Direction::Desc => Order::Desc,
                };
                select = select.order_by(column, direction);
            }
        }
        select = select.order_by_asc(entity::Column::Id);

        let paginator = select.paginate(&self.db, page.size);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page).await?;

        tracing::debug!(?query, page = page.page, size = page.size, total, "Listed products");
        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            &page,
            total,
        ))
    }

    async fn exists_by_code(&self, code: &str) -> ProductResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::Code.eq(code))
            .one(&self.db)
            .await?
            .is_some();

        Ok(exists)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let is_update = entity::Entity::find_by_id(product.id)
            .one(&self.db)
            .await?
            .is_some();

        let active_model: entity::ActiveModel = product.clone().into();
        let result = if is_update {
            active_model.update(&self.db).await
        } else {
            active_model.insert(&self.db).await
        };
        let model = result.map_err(|e| map_save_error(e, &product, is_update))?;

        if is_update {
            tracing::info!(product_id = %model.id, deleted = model.deleted, "Updated product");
        } else {
            tracing::info!(product_id = %model.id, code = %model.code, "Created product");
        }
        Ok(model.into())
    }
}
