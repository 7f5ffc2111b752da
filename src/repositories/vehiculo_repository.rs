//! Repositorio de vehículos

use sqlx::PgPool;

use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::AppError;

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos = sqlx::query_as::<_, Vehiculo>(
            "SELECT id, numero_interno, patente, kilometro FROM vehiculos ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehiculos)
    }

    pub async fn create(
        &self,
        numero_interno: &str,
        patente: &str,
        kilometro: i64,
    ) -> Result<i32, AppError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO vehiculos (numero_interno, patente, kilometro)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(numero_interno)
        .bind(patente)
        .bind(kilometro)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(
        &self,
        id: i32,
        numero_interno: &str,
        patente: &str,
        kilometro: i64,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehiculos
            SET numero_interno = $1, patente = $2, kilometro = $3
            WHERE id = $4
            "#,
        )
        .bind(numero_interno)
        .bind(patente)
        .bind(kilometro)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Inspecciones que referencian al vehículo. La integridad referencial
    /// se verifica en la capa de aplicación antes de eliminar.
    pub async fn count_inspecciones(&self, vehiculo_id: i32) -> Result<i64, AppError> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM inspecciones WHERE vehiculo_id = $1")
                .bind(vehiculo_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }
}
