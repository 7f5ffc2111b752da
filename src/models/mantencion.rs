//! Modelo de Mantención

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mantención - mapea a la tabla mantenciones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mantencion {
    pub id: i32,
    pub vehiculo_id: i32,
    pub usuario_id: Option<i32>,
    pub tipo: String,
    pub observacion: String,
    pub costo: i64,
    pub fecha: DateTime<Utc>,
}

/// Ítem de una mantención (repuesto o tarea)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MantencionItem {
    pub id: i32,
    pub mantencion_id: i32,
    pub item: String,
    pub tipo: String,
    pub cantidad: i32,
    pub costo_unitario: i64,
}
