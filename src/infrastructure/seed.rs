use crate::domain::{DomainError, NewProduct, ProductRepository};

/// The sample catalogue used to pre-fill a fresh store
pub fn sample_products() -> Vec<NewProduct> {
    ["Laptop", "Smartphone", "Wireless Headphones"]
        .into_iter()
        .map(NewProduct::new)
        .collect()
}

/// Save the sample catalogue through `repo` unless it already holds products.
/// Returns the number of products inserted.
pub async fn seed_demo_data(repo: &dyn ProductRepository) -> Result<usize, DomainError> {
    if !repo.find_all().await?.is_empty() {
        tracing::info!("Store already has products, skipping demo seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for product in sample_products() {
        repo.save(product).await?;
        inserted += 1;
    }

    Ok(inserted)
}
