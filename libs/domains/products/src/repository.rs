use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;
use crate::pagination::{Direction, Page, PageRequest, SortOrder};
use crate::query::ProductQuery;

/// Repository trait for Product persistence
///
/// Reads only ever see products that are not soft-deleted; `exists_by_code`
/// is the exception and covers the whole table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_active_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// One page of the products matching `query`, in `page.sort` order with
    /// `id` as the final tiebreak
    async fn find_active(&self, query: ProductQuery, page: PageRequest)
    -> ProductResult<Page<Product>>;

    /// Whether any product, deleted or not, has this exact code
    async fn exists_by_code(&self, code: &str) -> ProductResult<bool>;

    /// Insert or full update, keyed by `product.id`
    async fn save(&self, product: Product) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

/// Text order close to a linguistic collation: case-insensitive first, byte
/// order only between strings that differ in case alone.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compares on one JSON property; unknown properties compare equal.
/// Missing ratings sort last, as Postgres does for NULL in ascending order.
fn compare_by(a: &Product, b: &Product, property: &str) -> Ordering {
    match property {
        "id" => a.id.cmp(&b.id),
        "code" => compare_text(&a.code, &b.code),
        "name" => compare_text(&a.name, &b.name),
        "price" => a.price.total_cmp(&b.price),
        "quantity" => a.quantity.cmp(&b.quantity),
        "inventoryStatus" => a.inventory_status.cmp(&b.inventory_status),
        "category" => a.category.cmp(&b.category),
        "rating" => match (a.rating, b.rating) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

fn compare(a: &Product, b: &Product, sort: &[SortOrder]) -> Ordering {
    sort.iter()
        .map(|order| {
            let ordering = compare_by(a, b, &order.property);
            match order.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_active_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).filter(|p| !p.deleted).cloned())
    }

    async fn find_active(
        &self,
        query: ProductQuery,
        page: PageRequest,
    ) -> ProductResult<Page<Product>> {
        let products = self.products.read().await;

        let mut matching: Vec<&Product> = products.values().filter(|p| query.matches(p)).collect();
        matching.sort_by(|a, b| compare(a, b, &page.sort));

        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size).unwrap_or(usize::MAX);
        let content = matching
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, &page, total))
    }

    async fn exists_by_code(&self, code: &str) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.values().any(|p| p.code == code))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, code = %product.code, "Saved product");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewProduct};

    fn product(code: &str, name: &str, price: f64, rating: Option<f64>) -> Product {
        Product::new(NewProduct {
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            price,
            quantity: 5,
            category: Category::Clothing,
            image: None,
            rating,
        })
    }

    async fn seeded() -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new();
        repo.save(product("c-1", "Blue T-Shirt", 29.0, Some(5.0)))
            .await
            .unwrap();
        repo.save(product("c-2", "Black Jacket", 89.0, None))
            .await
            .unwrap();
        repo.save(product("c-3", "Blue Band", 79.0, Some(3.0)))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryProductRepository::new();
        let saved = repo
            .save(product("c-1", "Blue T-Shirt", 29.0, None))
            .await
            .unwrap();

        let found = repo.find_active_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_deleted_is_invisible_but_code_still_exists() {
        let repo = InMemoryProductRepository::new();
        let mut saved = repo
            .save(product("c-1", "Blue T-Shirt", 29.0, None))
            .await
            .unwrap();

        saved.mark_deleted();
        repo.save(saved.clone()).await.unwrap();

        assert!(repo.find_active_by_id(saved.id).await.unwrap().is_none());
        assert!(repo.exists_by_code("c-1").await.unwrap());
        assert!(!repo.exists_by_code("C-1").await.unwrap());

        let page = repo
            .find_active(ProductQuery::Active, PageRequest::default())
            .await
            .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.page.total_elements, 0);
    }

    #[tokio::test]
    async fn test_find_active_sorts_and_paginates() {
        let repo = seeded().await;

        let request = PageRequest::new(0, 2).with_sort(vec![SortOrder::desc("price")]);
        let page = repo.find_active(ProductQuery::Active, request).await.unwrap();

        let codes: Vec<_> = page.content.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["c-2", "c-3"]);
        assert_eq!(page.page.total_elements, 3);
        assert_eq!(page.page.total_pages, 2);

        let request = PageRequest::new(1, 2).with_sort(vec![SortOrder::desc("price")]);
        let page = repo.find_active(ProductQuery::Active, request).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].code, "c-1");
    }

    #[tokio::test]
    async fn test_find_active_rating_nulls_last() {
        let repo = seeded().await;

        let request = PageRequest::default().with_sort(vec![SortOrder::asc("rating")]);
        let page = repo.find_active(ProductQuery::Active, request).await.unwrap();

        let codes: Vec<_> = page.content.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["c-3", "c-1", "c-2"]);
    }

    #[tokio::test]
    async fn test_find_active_name_sort_ignores_case() {
        let repo = InMemoryProductRepository::new();
        for (code, name) in [("c-1", "cherry"), ("c-2", "Banana"), ("c-3", "apple")] {
            repo.save(product(code, name, 1.0, None)).await.unwrap();
        }

        let request = PageRequest::default().with_sort(vec![SortOrder::asc("name")]);
        let page = repo.find_active(ProductQuery::Active, request).await.unwrap();

        let names: Vec<_> = page.content.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_compare_text_breaks_case_ties() {
        assert_eq!(compare_text("abc", "ABD"), Ordering::Less);
        assert_eq!(compare_text("Abc", "abc"), Ordering::Less);
        assert_eq!(compare_text("abc", "abc"), Ordering::Equal);
    }

    #[tokio::test]
    async fn test_find_active_page_far_past_the_end() {
        let repo = seeded().await;

        let request = PageRequest::new(u64::MAX / 10, 2000);
        let page = repo.find_active(ProductQuery::Active, request).await.unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.page.total_elements, 3);
    }

    #[tokio::test]
    async fn test_find_active_filters() {
        let repo = seeded().await;

        let page = repo
            .find_active(
                ProductQuery::select(None, Some("blue".into())),
                PageRequest::default().with_sort(vec![SortOrder::asc("code")]),
            )
            .await
            .unwrap();

        let codes: Vec<_> = page.content.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["c-1", "c-3"]);
    }
}
