//! Modelo de Vehículo

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo - mapea a la tabla vehiculos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehiculo {
    pub id: i32,
    pub numero_interno: String,
    /// Patente normalizada en mayúsculas, única en la flota
    pub patente: String,
    pub kilometro: i64,
}
