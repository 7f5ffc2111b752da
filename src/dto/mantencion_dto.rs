use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::mantencion::{Mantencion, MantencionItem};

/// Ítem de mantención tal como lo envía el cliente
#[derive(Debug, Clone, Deserialize)]
pub struct MantencionItemPayload {
    pub item: String,
    pub tipo: Option<String>,
    pub cantidad: Option<i32>,
    pub costo_unitario: Option<i64>,
}

// Request para crear una mantención con sus ítems
#[derive(Debug, Deserialize)]
pub struct CreateMantencionRequest {
    pub vehiculo_id: Option<i32>,
    pub usuario_id: Option<i32>,
    pub tipo: Option<String>,
    pub observacion: Option<String>,
    pub costo: Option<i64>,
    #[serde(default)]
    pub items: Vec<MantencionItemPayload>,
}

/// Fila del listado de mantenciones con datos del vehículo y responsable
#[derive(Debug, Serialize, FromRow)]
pub struct MantencionResumen {
    pub id: i32,
    pub tipo: String,
    pub fecha: DateTime<Utc>,
    pub observacion: String,
    pub costo: i64,
    pub vehiculo_patente: String,
    pub numero_interno: String,
    pub responsable: Option<String>,
}

/// Detalle de una mantención con sus ítems
#[derive(Debug, Serialize)]
pub struct MantencionDetalle {
    #[serde(flatten)]
    pub mantencion: Mantencion,
    pub items: Vec<MantencionItem>,
}
