use std::sync::Arc;

use reqwest::StatusCode;

use storefront_infra::{InMemorySkuStore, SkuStore};
use storefront_inventory::SkuRecord;
use storefront_inventory_api::app::{self, services::AppServices};

struct TestServer {
    base_url: String,
    services: Arc<AppServices>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let services = Arc::new(AppServices::new(Arc::new(InMemorySkuStore::new())));
        let app = app::build_app(services.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            services,
            handle,
        }
    }

    async fn seed(&self, records: Vec<SkuRecord>) {
        self.services.sku_store().save_all(records).await.unwrap();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn lookup_url(base_url: &str, sku_codes: &[&str]) -> String {
    let mut url = format!("{}/api/v1/inventory", base_url);
    for (i, sku) in sku_codes.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str("skuCode=");
        url.push_str(sku);
    }
    url
}

#[tokio::test]
async fn empty_sku_code_set_is_a_client_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(lookup_url(&srv.base_url, &[]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn zero_quantity_reports_out_of_stock() {
    let srv = TestServer::spawn().await;
    srv.seed(vec![SkuRecord::new("AAA111", 0).unwrap()]).await;

    let client = reqwest::Client::new();
    let res = client
        .get(lookup_url(&srv.base_url, &["AAA111"]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!([{ "skuCode": "AAA111", "isInStock": false }])
    );
}

#[tokio::test]
async fn positive_quantity_reports_in_stock() {
    let srv = TestServer::spawn().await;
    srv.seed(vec![SkuRecord::new("AAA111", 1).unwrap()]).await;

    let client = reqwest::Client::new();
    let res = client
        .get(lookup_url(&srv.base_url, &["AAA111"]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!([{ "skuCode": "AAA111", "isInStock": true }])
    );
}

#[tokio::test]
async fn unknown_sku_is_omitted_not_an_error() {
    let srv = TestServer::spawn().await;
    srv.seed(vec![SkuRecord::new("AAA111", 1).unwrap()]).await;

    let client = reqwest::Client::new();
    let res = client
        .get(lookup_url(&srv.base_url, &["invalid_sku_code"]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn multiple_skus_resolve_in_one_call() {
    let srv = TestServer::spawn().await;
    srv.seed(vec![
        SkuRecord::new("AAA111", 1).unwrap(),
        SkuRecord::new("CCC333", 6).unwrap(),
    ])
    .await;

    let client = reqwest::Client::new();
    let res = client
        .get(lookup_url(&srv.base_url, &["AAA111", "CCC333"]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(body.len(), 2);
    for entry in &body {
        assert_eq!(entry["isInStock"], true);
    }
}

#[tokio::test]
async fn seeding_loads_demo_skus_once() {
    let srv = TestServer::spawn().await;

    storefront_inventory_api::app::services::seed_if_empty(&srv.services)
        .await
        .unwrap();
    // Second call is a no-op on a non-empty store.
    storefront_inventory_api::app::services::seed_if_empty(&srv.services)
        .await
        .unwrap();

    let all = srv.services.sku_store().find_all().await.unwrap();
    assert_eq!(all.len(), 3);

    let client = reqwest::Client::new();
    let res = client
        .get(lookup_url(&srv.base_url, &["AAA111", "BBB222", "CCC333"]))
        .send()
        .await
        .unwrap();

    let body: Vec<serde_json::Value> = res.json().await.unwrap();
    let in_stock: Vec<bool> = body
        .iter()
        .map(|e| e["isInStock"].as_bool().unwrap())
        .collect();
    assert_eq!(in_stock.iter().filter(|b| **b).count(), 2);
}
