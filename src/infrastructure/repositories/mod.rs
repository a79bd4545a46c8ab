//! Repository implementations: SeaORM (SQLite) and in-memory

pub mod in_memory;
pub mod product_repository;

pub use in_memory::InMemoryProductRepository;
pub use product_repository::SeaOrmProductRepository;
