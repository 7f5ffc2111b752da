//! Repositorio de mantenciones
//!
//! Igual que las inspecciones, la mantención y sus ítems se escriben en
//! una sola transacción.

use sqlx::PgPool;

use crate::dto::mantencion_dto::{MantencionItemPayload, MantencionResumen};
use crate::models::mantencion::{Mantencion, MantencionItem};
use crate::utils::errors::AppError;

pub struct MantencionRepository {
    pool: PgPool,
}

impl MantencionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<MantencionResumen>, AppError> {
        let rows = sqlx::query_as::<_, MantencionResumen>(
            r#"
            SELECT
                m.id, m.tipo, m.fecha, m.observacion, m.costo,
                v.patente AS vehiculo_patente, v.numero_interno,
                u.nombre AS responsable
            FROM mantenciones m
            JOIN vehiculos v ON v.id = m.vehiculo_id
            LEFT JOIN usuarios u ON u.id = m.usuario_id
            ORDER BY m.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Mantencion>, AppError> {
        let mantencion = sqlx::query_as::<_, Mantencion>(
            "SELECT * FROM mantenciones WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mantencion)
    }

    pub async fn items_for(&self, mantencion_id: i32) -> Result<Vec<MantencionItem>, AppError> {
        let items = sqlx::query_as::<_, MantencionItem>(
            "SELECT * FROM mantencion_items WHERE mantencion_id = $1 ORDER BY id",
        )
        .bind(mantencion_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Crear la mantención con sus ítems en una transacción
    pub async fn create_with_items(
        &self,
        vehiculo_id: i32,
        usuario_id: Option<i32>,
        tipo: &str,
        observacion: &str,
        costo: i64,
        items: &[MantencionItemPayload],
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        let (mantencion_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO mantenciones (vehiculo_id, usuario_id, tipo, observacion, costo, fecha)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id
            "#,
        )
        .bind(vehiculo_id)
        .bind(usuario_id)
        .bind(tipo)
        .bind(observacion)
        .bind(costo)
        .fetch_one(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO mantencion_items (mantencion_id, item, tipo, cantidad, costo_unitario)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(mantencion_id)
            .bind(&item.item)
            .bind(item.tipo.as_deref().unwrap_or("Tarea"))
            .bind(item.cantidad.unwrap_or(1))
            .bind(item.costo_unitario.unwrap_or(0))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(mantencion_id)
    }

    /// Actualizar la mantención reemplazando todos sus ítems en una transacción
    pub async fn update_with_items(
        &self,
        id: i32,
        vehiculo_id: i32,
        usuario_id: Option<i32>,
        tipo: &str,
        observacion: &str,
        costo: i64,
        items: &[MantencionItemPayload],
    ) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE mantenciones
            SET vehiculo_id = $1, usuario_id = $2, tipo = $3, observacion = $4, costo = $5
            WHERE id = $6
            "#,
        )
        .bind(vehiculo_id)
        .bind(usuario_id)
        .bind(tipo)
        .bind(observacion)
        .bind(costo)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM mantencion_items WHERE mantencion_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO mantencion_items (mantencion_id, item, tipo, cantidad, costo_unitario)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(id)
            .bind(&item.item)
            .bind(item.tipo.as_deref().unwrap_or("Tarea"))
            .bind(item.cantidad.unwrap_or(1))
            .bind(item.costo_unitario.unwrap_or(0))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM mantenciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
