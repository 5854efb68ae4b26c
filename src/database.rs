use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::equipment::{EquipmentRepository, SqliteEquipmentRepository, SqliteEquipmentStore};

/// Database manager owning the SQLite pool
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Initialize database, creating the file and running migrations as configured
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        // Create database if it doesn't exist
        if !sqlx::Sqlite::database_exists(&config.url).await? {
            info!("Creating database at {}", config.url);
            sqlx::Sqlite::create_database(&config.url).await?;
        }

        // Connect to database
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect(&config.url)
            .await?;

        // Run migrations if enabled
        if config.auto_migrate {
            info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Database migrations completed");
        }

        Ok(Self { pool })
    }

    /// Get database pool for queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Equipment repository sharing this manager's pool
    pub fn equipment_repository(&self) -> SqliteEquipmentRepository {
        EquipmentRepository::new(SqliteEquipmentStore::new(self.pool.clone()))
    }

    /// Close database connections gracefully
    pub async fn shutdown(&self) {
        info!("Shutting down database connections...");
        self.pool.close().await;
        info!("Database connections closed");
    }
}
