use std::sync::Arc;

use storefront_inventory_api::app;

#[tokio::main]
async fn main() {
    storefront_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::warn!("BIND_ADDR not set; using 0.0.0.0:8082");
        "0.0.0.0:8082".to_string()
    });

    let services = Arc::new(
        app::services::build_services()
            .await
            .expect("failed to build inventory services"),
    );

    app::services::seed_if_empty(&services)
        .await
        .expect("failed to seed sku store");

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
