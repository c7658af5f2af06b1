#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use axum::extract::ConnectInfo;
use axum::routing::{get, post};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use shorturl::api::handlers::{
    create_handler, delete_handler, health_handler, redirect_handler, stats_handler,
};
use shorturl::config::IdPolicy;
use shorturl::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";
pub const CLIENT_ADDR: &str = "127.0.0.1:12345";

/// One-connection in-memory pool with migrations applied.
///
/// A single connection keeps every handle on the same in-memory database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!().run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, BASE_URL.to_string(), IdPolicy::default())
}

/// Full route set with a fixed peer address injected for `ConnectInfo`.
pub fn app(state: AppState, client_addr: &str) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/create", post(create_handler))
        .route("/{id}", get(redirect_handler).delete(delete_handler))
        .route("/{id}/stats", get(stats_handler))
        .layer(MockConnectInfoLayer::new(client_addr))
        .with_state(state)
}

pub async fn insert_mapping(pool: &SqlitePool, id: &str, url: &str, token: &str) {
    sqlx::query("INSERT INTO urls (id, url, auth_token) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(url)
        .bind(token)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_visit(pool: &SqlitePool, id: &str, ip: &str, count: i64) {
    sqlx::query("INSERT INTO stats (id, ip, count) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(ip)
        .bind(count)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn visit_count(pool: &SqlitePool, id: &str, ip: &str) -> Option<i64> {
    sqlx::query_scalar("SELECT count FROM stats WHERE id = ?1 AND ip = ?2")
        .bind(id)
        .bind(ip)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn mapping_row(pool: &SqlitePool, id: &str) -> Option<(String, String)> {
    sqlx::query_as("SELECT url, auth_token FROM urls WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

/// Injects a fixed `ConnectInfo` peer address, standing in for the real
/// socket info the production server attaches per connection.
#[derive(Clone)]
pub struct MockConnectInfoLayer {
    addr: SocketAddr,
}

impl MockConnectInfoLayer {
    pub fn new(addr: &str) -> Self {
        Self {
            addr: addr.parse().unwrap(),
        }
    }
}

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.addr,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
