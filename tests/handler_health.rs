mod common;

use axum_test::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_ok() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::app(state, common::CLIENT_ADDR)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
