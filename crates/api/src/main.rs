#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let service = std::sync::Arc::new(stockroom_store::InventoryService::new());

    if let Ok(raw) = std::env::var("STOCKROOM_SEED") {
        match raw.parse::<usize>() {
            Ok(count) if count > 0 => {
                let today = chrono::Utc::now().date_naive();
                let seeded = stockroom_store::seed_products(&service, count, today)
                    .expect("failed to seed sample products");
                tracing::info!(count = seeded, "seeded sample products");
            }
            _ => tracing::warn!(value = %raw, "ignoring STOCKROOM_SEED; expected a positive integer"),
        }
    }

    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = stockroom_api::app::build_app(service);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
