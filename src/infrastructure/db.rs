use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::models::product;

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    Ok(db)
}

/// Create missing tables from the entity definitions
async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut products = schema.create_table_from_entity(product::Entity);
    products.if_not_exists();
    db.execute(backend.build(&products)).await?;

    tracing::debug!("Schema up to date");
    Ok(())
}
