use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, MappingService, RedirectService};
use crate::config::IdPolicy;
use crate::infrastructure::persistence::{SqliteMappingRepository, SqliteVisitRepository};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<SqliteMappingRepository>>,
    pub mapping_service: Arc<MappingService<SqliteMappingRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteMappingRepository, SqliteVisitRepository>>,
    pub db: SqlitePool,
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services over one shared pool.
    pub fn new(pool: SqlitePool, base_url: String, policy: IdPolicy) -> Self {
        let pool_arc = Arc::new(pool.clone());

        let mapping_repository = Arc::new(SqliteMappingRepository::new(pool_arc.clone()));
        let visit_repository = Arc::new(SqliteVisitRepository::new(pool_arc));

        let auth_service = Arc::new(AuthService::new(mapping_repository.clone()));
        let mapping_service = Arc::new(MappingService::new(
            mapping_repository.clone(),
            auth_service.clone(),
            policy,
        ));
        let redirect_service = Arc::new(RedirectService::new(mapping_repository, visit_repository));

        Self {
            auth_service,
            mapping_service,
            redirect_service,
            db: pool,
            base_url,
        }
    }
}
