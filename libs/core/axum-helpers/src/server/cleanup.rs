use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Closes the pool explicitly so shutdown logs whether it went cleanly.
///
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "catalog").await;
/// ```
pub async fn close_postgres(db: DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
