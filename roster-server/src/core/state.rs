use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use shared::AppResult;

/// Server state shared across request handlers
///
/// Cheap to clone; the pool is internally reference counted.
#[derive(Clone)]
pub struct ServerState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Initialize all services from configuration
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self { pool: db.pool })
    }
}
