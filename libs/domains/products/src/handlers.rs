use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody, QueryParams, UuidPath,
    errors::responses::{
        BadRequestQueryResponse, BadRequestResponse, BadRequestUuidResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::ProductResult;
use crate::models::{Category, InventoryStatus, Product, ProductInput};
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageRequest, SortOrder};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const PRODUCTS_TAG: &str = "products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, Category, InventoryStatus),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters of the listing endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Case-insensitive substring of the product code
    pub code: Option<String>,
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
    /// Zero-based page number, defaults to 0
    pub page: Option<u64>,
    /// Page size, defaults to 10, at most 2000
    pub size: Option<u64>,
    /// `property[,property...][,asc|desc]`, repeatable
    #[serde(default)]
    pub sort: Vec<String>,
}

impl ListParams {
    /// Without any `sort`, results come in `id` order.
    pub fn page_request(&self) -> PageRequest {
        let size = match self.size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };

        let mut sort: Vec<SortOrder> = self.sort.iter().flat_map(|s| SortOrder::parse(s)).collect();
        if sort.is_empty() {
            sort.push(SortOrder::asc("id"));
        }

        PageRequest::new(self.page.unwrap_or(0), size).with_sort(sort)
    }

    /// URL of page `page` under `path` with the same filters and sort
    pub fn href(&self, path: &str, page: u64, size: u64) -> String {
        let mut query = Vec::new();
        if let Some(code) = &self.code {
            query.push(format!("code={}", urlencoding::encode(code)));
        }
        if let Some(name) = &self.name {
            query.push(format!("name={}", urlencoding::encode(name)));
        }
        query.push(format!("page={}", page));
        query.push(format!("size={}", size));
        for sort in &self.sort {
            query.push(format!("sort={}", urlencoding::encode(sort)));
        }

        format!("{}?{}", path, query.join("&"))
    }
}

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .patch(update_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List active products, optionally filtered by code and name
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCTS_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "One page of products", body = Page<Product>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    QueryParams(params): QueryParams<ListParams>,
) -> ProductResult<Json<Page<Product>>> {
    let page = params.page_request();
    let size = page.size;
    let products = service
        .list_products(params.code.clone(), params.name.clone(), Some(page))
        .await?;

    let path = uri.path();
    Ok(Json(products.with_links(|number| params.href(path, number, size))))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCTS_TAG,
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get an active product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Partially update a product; absent fields are left unchanged
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
