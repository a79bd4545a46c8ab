//! Product API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{DomainError, NewProduct, Product};
use crate::infrastructure::AppState;

/// Request DTO for creating a product
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Map a domain failure to its JSON error response. Storage failures are
/// logged and answered with `failure` so backing-store details stay private.
fn domain_error_response(err: DomainError, failure: &str) -> Response {
    if !err.is_client_error() {
        tracing::error!("{}: {}", failure, err);
    }

    match err {
        DomainError::NotFound => error_response(StatusCode::NOT_FOUND, "Product not found"),
        DomainError::Validation(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        DomainError::Database(_) | DomainError::Internal(_) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created"),
        (status = 400, description = "Malformed body or invalid field values"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!("Rejected product payload: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid input");
        }
    };

    let input = NewProduct::new(payload.name);
    if let Err(e) = input.validate() {
        return domain_error_response(e.into(), "Failed to save product");
    }

    match state.product_repo.save(input).await {
        Ok(product) => (
            StatusCode::OK,
            Json(json!({
                "message": "Product created successfully",
                "product": product
            })),
        )
            .into_response(),
        Err(e) => domain_error_response(e, "Failed to save product"),
    }
}

// List all products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    match state.product_repo.find_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => domain_error_response(e, "Failed to retrieve products"),
    }
}

/// Parse a path id. `None` unless it is a non-negative integer; ids beyond
/// `i32::MAX` are well formed but can never match a stored product.
fn parse_product_id(raw: &str) -> Option<Result<i32, DomainError>> {
    let id = raw.parse::<u64>().ok()?;
    Some(i32::try_from(id).map_err(|_| DomainError::NotFound))
}

// Get a single product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Id is not a non-negative integer"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let Some(id) = parse_product_id(&id) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid product ID");
    };

    let product = match id {
        Ok(id) => state
            .product_repo
            .find_by_id(id)
            .await
            .and_then(|product| product.ok_or(DomainError::NotFound)),
        Err(e) => Err(e),
    };

    match product {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => domain_error_response(e, "Failed to retrieve product"),
    }
}
