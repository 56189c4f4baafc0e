use std::sync::Arc;

use storefront_order_api::app;

#[tokio::main]
async fn main() {
    storefront_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::warn!("BIND_ADDR not set; using 0.0.0.0:8083");
        "0.0.0.0:8083".to_string()
    });

    let services = Arc::new(
        app::services::build_services()
            .await
            .expect("failed to build order services"),
    );

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
