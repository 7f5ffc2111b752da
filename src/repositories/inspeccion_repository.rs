//! Repositorio de inspecciones
//!
//! La creación escribe el registro padre y todos sus ítems dentro de una
//! única transacción: el commit es el único punto de visibilidad. Si
//! cualquier insert falla, la transacción completa se revierte al soltar
//! el guard, y la conexión vuelve al pool en todos los caminos de salida.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::dto::inspeccion_dto::InspeccionResumen;
use crate::models::inspeccion::{InspeccionItem, NuevoInspeccionItem};
use crate::utils::errors::AppError;

/// Datos de una inspección unidos con su conductor y vehículo,
/// tal como los necesita el reporte
#[derive(Debug, Clone, FromRow)]
pub struct InspeccionReporte {
    pub id: i32,
    pub observacion: String,
    pub estado: String,
    pub foto: Option<String>,
    pub created_at: DateTime<Utc>,
    pub conductor: String,
    pub rut_conductor: String,
    pub direccion_conductor: String,
    pub telefono_conductor: String,
    pub licencia_conductor: String,
    pub vehiculo: String,
}

pub struct InspeccionRepository {
    pool: PgPool,
}

impl InspeccionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear la inspección y todos sus ítems como unidad atómica.
    /// Devuelve el id generado. Cero ítems es un estado válido.
    pub async fn create_with_items(
        &self,
        usuario_id: i32,
        vehiculo_id: i32,
        observacion: &str,
        estado: &str,
        foto: Option<&str>,
        items: &[NuevoInspeccionItem],
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        // El padre se inserta primero: los ítems referencian su id generado
        let (inspeccion_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO inspecciones (usuario_id, vehiculo_id, observacion, estado, foto)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(usuario_id)
        .bind(vehiculo_id)
        .bind(observacion)
        .bind(estado)
        .bind(foto)
        .fetch_one(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO inspeccion_items (inspeccion_id, item_key, existe, estado, obs)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(inspeccion_id)
            .bind(&item.item_key)
            .bind(item.existe.as_str())
            .bind(item.estado.as_str())
            .bind(&item.obs)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(inspeccion_id)
    }

    /// Listar inspecciones con nombre del conductor y patente del vehículo.
    /// Con `solo_usuario` se restringe a las inspecciones de ese usuario.
    pub async fn list(&self, solo_usuario: Option<i32>) -> Result<Vec<InspeccionResumen>, AppError> {
        let base = r#"
            SELECT
                i.id,
                i.created_at AS fecha,
                u.nombre AS conductor_nombre,
                u.id AS usuario_id,
                v.patente AS vehiculo_patente,
                v.id AS vehiculo_id,
                COALESCE(i.estado, 'OK') AS estado,
                i.observacion
            FROM inspecciones i
            JOIN usuarios u ON u.id = i.usuario_id
            JOIN vehiculos v ON v.id = i.vehiculo_id
            WHERE LOWER(COALESCE(u.rol, '')) = 'conductor'
        "#;

        let rows = match solo_usuario {
            Some(usuario_id) => {
                sqlx::query_as::<_, InspeccionResumen>(&format!(
                    "{base} AND i.usuario_id = $1 ORDER BY i.id DESC"
                ))
                .bind(usuario_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, InspeccionResumen>(&format!("{base} ORDER BY i.id DESC"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Dueño (usuario_id) de una inspección, si existe
    pub async fn owner_of(&self, inspeccion_id: i32) -> Result<Option<i32>, AppError> {
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT usuario_id FROM inspecciones WHERE id = $1")
                .bind(inspeccion_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(usuario_id,)| usuario_id))
    }

    /// Ítems almacenados de una inspección
    pub async fn items_for(&self, inspeccion_id: i32) -> Result<Vec<InspeccionItem>, AppError> {
        let items = sqlx::query_as::<_, InspeccionItem>(
            r#"
            SELECT item_key, existe, estado, obs
            FROM inspeccion_items
            WHERE inspeccion_id = $1
            "#,
        )
        .bind(inspeccion_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Inspección unida con conductor y vehículo para el reporte PDF
    pub async fn find_for_report(
        &self,
        inspeccion_id: i32,
    ) -> Result<Option<InspeccionReporte>, AppError> {
        let row = sqlx::query_as::<_, InspeccionReporte>(
            r#"
            SELECT
                i.id, i.observacion, COALESCE(i.estado, 'OK') AS estado, i.foto, i.created_at,
                u.nombre AS conductor, u.rut AS rut_conductor,
                u.direccion AS direccion_conductor, u.telefono AS telefono_conductor,
                u.licencia AS licencia_conductor,
                v.patente AS vehiculo
            FROM inspecciones i
            JOIN usuarios u ON u.id = i.usuario_id
            JOIN vehiculos v ON v.id = i.vehiculo_id
            WHERE i.id = $1
            "#,
        )
        .bind(inspeccion_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
