//! Conexión a PostgreSQL

use anyhow::Result;
use sqlx::PgPool;

use crate::config::database::DatabaseConfig;

/// Conexión a la base de datos con su pool asociado
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear la conexión usando la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> Result<Self> {
        let config = DatabaseConfig::from_env()?;
        let pool = config.create_pool().await?;

        // Verificación mínima de que el pool responde
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
