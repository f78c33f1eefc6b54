use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, ProductInput};
use crate::pagination::{self, Page, PageRequest};
use crate::query::ProductQuery;
use crate::repository::ProductRepository;
use crate::validation;

/// Properties a listing may be sorted on
pub const ALLOWED_SORT_FIELDS: [&str; 8] = [
    "id",
    "code",
    "name",
    "price",
    "quantity",
    "inventoryStatus",
    "category",
    "rating",
];

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Active products matching the optional filters, one page at a time.
    /// Sort terms on unsupported properties are dropped.
    pub async fn list_products(
        &self,
        code: Option<String>,
        name: Option<String>,
        page: Option<PageRequest>,
    ) -> ProductResult<Page<Product>> {
        let page = pagination::normalize(page, &ALLOWED_SORT_FIELDS);
        let query = ProductQuery::select(code, name);

        self.repository.find_active(query, page).await
    }

    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_active_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Mandatory fields, then ranges, then code uniqueness over every
    /// product ever saved.
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let new_product = NewProduct::try_from(input)?;

        if self.repository.exists_by_code(&new_product.code).await? {
            return Err(ProductError::DuplicateCode(new_product.code));
        }

        let product = self.repository.save(Product::new(new_product)).await?;
        tracing::info!(product_id = %product.id, code = %product.code, "Product created");
        Ok(product)
    }

    /// Partial update: absent fields keep their value.
    pub async fn update_product(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;

        validation::check_numeric_ranges(&input)?;

        if let Some(code) = input.code.as_deref() {
            if code != product.code && self.repository.exists_by_code(code).await? {
                return Err(ProductError::CodeAlreadyTaken);
            }
        }

        product.apply_patch(input);
        let product = self.repository.save(product).await?;
        tracing::info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Soft delete; the code stays reserved.
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        let mut product = self.get_product(id).await?;

        product.mark_deleted();
        self.repository.save(product).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
