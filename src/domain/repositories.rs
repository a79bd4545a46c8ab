//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, NewProduct, Product};

/// Repository trait for Product entity
///
/// A missing product is reported as `Ok(None)`; errors are reserved for
/// failures of the backing store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Validate and store a new product, returning it with its assigned id
    async fn save(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// Find all live products
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;
}
