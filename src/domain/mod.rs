//! Domain layer - Pure business abstractions
//!
//! This layer has no HTTP framework dependency (no Axum). SeaORM appears
//! only in the `DbErr` conversion of `DomainError`, and utoipa only as the
//! `ToSchema` derive on `Product` for the OpenAPI document.
//! Only the product entity, its validation, the repository contract and
//! domain error types.

pub mod errors;
pub mod product;
pub mod repositories;

pub use errors::DomainError;
pub use product::{NewProduct, Product, ValidationError};
pub use repositories::*;
