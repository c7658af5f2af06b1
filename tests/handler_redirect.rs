mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::setup_pool().await;
    common::insert_mapping(&pool, "abc", "http://example.com/target", "tok").await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(common::app(state, common::CLIENT_ADDR)).unwrap();

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "http://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::app(state, common::CLIENT_ADDR)).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_records_first_visit() {
    let pool = common::setup_pool().await;
    common::insert_mapping(&pool, "abc", "http://example.com", "tok").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::app(state, "1.2.3.4:40000")).unwrap();

    server.get("/abc").await;

    assert_eq!(common::visit_count(&pool, "abc", "1.2.3.4").await, Some(1));
}

#[tokio::test]
async fn test_repeat_redirects_count_each_visit() {
    let pool = common::setup_pool().await;
    common::insert_mapping(&pool, "abc", "http://example.com", "tok").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::app(state, "1.2.3.4:40000")).unwrap();

    for _ in 0..5 {
        let response = server.get("/abc").await;
        assert_eq!(response.status_code(), 301);
    }

    assert_eq!(common::visit_count(&pool, "abc", "1.2.3.4").await, Some(5));
}

#[tokio::test]
async fn test_distinct_clients_get_independent_counters() {
    let pool = common::setup_pool().await;
    common::insert_mapping(&pool, "abc", "http://example.com", "tok").await;

    let state = common::create_test_state(pool.clone());
    let server_a = TestServer::new(common::app(state.clone(), "1.2.3.4:40000")).unwrap();
    let server_b = TestServer::new(common::app(state, "5.6.7.8:40000")).unwrap();

    server_a.get("/abc").await;
    server_a.get("/abc").await;
    server_b.get("/abc").await;

    assert_eq!(common::visit_count(&pool, "abc", "1.2.3.4").await, Some(2));
    assert_eq!(common::visit_count(&pool, "abc", "5.6.7.8").await, Some(1));
}

#[tokio::test]
async fn test_failed_redirect_leaves_no_visit_record() {
    let pool = common::setup_pool().await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::app(state, "1.2.3.4:40000")).unwrap();

    server.get("/missing").await;

    assert_eq!(common::visit_count(&pool, "missing", "1.2.3.4").await, None);
}
