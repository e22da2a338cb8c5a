//! roster-server — employee record management service
//!
//! Long-running service that owns the employee table and exposes
//! CRUD over HTTP+JSON for the roster console.

use roster_server::utils::logger;
use roster_server::{Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    logger::init_logger();

    let config = Config::from_env();
    tracing::info!("Starting roster-server (env: {})", config.environment);

    Server::new(config).run().await
}
