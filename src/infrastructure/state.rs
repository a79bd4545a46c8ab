//! Application state containing the product repository

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::db;
use crate::domain::{DomainError, ProductRepository};
use crate::infrastructure::{InMemoryProductRepository, SeaOrmProductRepository};
use crate::seed;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Product repository
    pub product_repo: Arc<dyn ProductRepository>,
    storage: StorageBackend,
}

impl AppState {
    pub fn new(product_repo: Arc<dyn ProductRepository>, storage: StorageBackend) -> Self {
        Self {
            product_repo,
            storage,
        }
    }

    /// State backed by the seeded in-memory store
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProductRepository::seeded()),
            StorageBackend::Memory,
        )
    }

    /// State backed by a SQLite database
    pub fn sqlite(db: sea_orm::DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmProductRepository::new(db)),
            StorageBackend::Sqlite,
        )
    }

    /// Build the repository selected by `config`, migrating and optionally
    /// seeding the database
    pub async fn from_config(config: &Config) -> Result<Self, DomainError> {
        let state = match config.storage {
            StorageBackend::Memory => Self::in_memory(),
            StorageBackend::Sqlite => {
                let db = db::init_db(&config.database_url).await?;
                let state = Self::sqlite(db);

                if config.seed_demo {
                    state.seed_demo().await;
                }
                state
            }
        };

        tracing::info!("Using {} product storage", state.storage.as_str());
        Ok(state)
    }

    /// Seed the sample catalogue. A failed seed is logged and the service
    /// keeps running with whatever the store holds. Returns the number of
    /// products inserted.
    pub async fn seed_demo(&self) -> usize {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(self.product_repo.as_ref()).await {
            Ok(inserted) => {
                tracing::info!("Demo data seeded ({} products).", inserted);
                inserted
            }
            Err(e) => {
                tracing::error!("Failed to seed data: {}", e);
                0
            }
        }
    }

    pub fn storage(&self) -> StorageBackend {
        self.storage
    }
}
