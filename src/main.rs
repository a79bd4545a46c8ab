use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_store::config::Config;
use product_store::infrastructure::AppState;
use product_store::server;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Select and initialize the product store
    let state = AppState::from_config(&config)
        .await
        .expect("Failed to initialize product storage");

    let app = server::build_router(state, &config.cors_allowed_origins);

    server::serve(app, config.port)
        .await
        .expect("Failed to start server");
}
