use crate::api;
use crate::domain::Product;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::products::create_product,
        api::products::list_products,
        api::products::get_product,
    ),
    components(
        schemas(
            Product,
            api::products::CreateProductRequest,
        )
    ),
    tags(
        (name = "product-store", description = "Product Store API")
    )
)]
pub struct ApiDoc;
