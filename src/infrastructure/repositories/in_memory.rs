//! In-memory implementation of ProductRepository
//!
//! Products live in an ordered `Vec` behind an async `RwLock`, so concurrent
//! writers are serialized. Nothing survives a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, NewProduct, Product, ProductRepository};
use crate::seed::sample_products;

struct Store {
    products: Vec<Product>,
    next_id: i32,
}

impl Store {
    fn push(&mut self, product: NewProduct) -> Result<Product, DomainError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("product id space exhausted".to_string()))?;

        let product = Product {
            id,
            name: product.name,
            created_at: None,
            updated_at: None,
        };
        self.products.push(product.clone());
        Ok(product)
    }
}

pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    /// An empty store; the first saved product gets id 1
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store pre-filled with the sample catalogue
    pub fn seeded() -> Self {
        Self::with_products(sample_products())
    }

    /// A store pre-filled with `products`, ids assigned in order.
    /// Entries that fail validation are skipped.
    pub fn with_products(products: Vec<NewProduct>) -> Self {
        let mut store = Store {
            products: Vec::with_capacity(products.len()),
            next_id: 1,
        };

        for product in products {
            if let Err(e) = product.validate() {
                tracing::warn!("Skipping invalid seed product '{}': {}", product.name, e);
                continue;
            }
            if let Err(e) = store.push(product) {
                tracing::warn!("Stopped seeding: {}", e);
                break;
            }
        }

        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: NewProduct) -> Result<Product, DomainError> {
        product.validate()?;

        let mut store = self.store.write().await;
        store.push(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.store.read().await.products.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let store = self.store.read().await;
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_holds_sample_products() {
        let repo = InMemoryProductRepository::seeded();
        let products = repo.find_all().await.unwrap();

        let expected: Vec<String> = sample_products().into_iter().map(|p| p.name).collect();
        let names: Vec<String> = products.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, expected);

        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=expected.len() as i32).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_save_continues_after_seeded_ids() {
        let repo = InMemoryProductRepository::seeded();
        let seeded = repo.find_all().await.unwrap().len() as i32;

        let product = repo.save(NewProduct::new("Product A")).await.unwrap();
        assert_eq!(product.id, seeded + 1);
    }

    #[tokio::test]
    async fn test_invalid_seed_entries_are_skipped() {
        let repo = InMemoryProductRepository::with_products(vec![
            NewProduct::new("ok product"),
            NewProduct::new("no"),
            NewProduct::new("another one"),
        ]);

        let products = repo.find_all().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].name, "another one");
    }

    #[tokio::test]
    async fn test_exhausted_id_space_is_an_error() {
        let repo = InMemoryProductRepository {
            store: RwLock::new(Store {
                products: Vec::new(),
                next_id: i32::MAX,
            }),
        };

        let err = repo.save(NewProduct::new("Last One")).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_ids() {
        let repo = std::sync::Arc::new(InMemoryProductRepository::new());

        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.save(NewProduct::new(format!("Product {}", i)))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
