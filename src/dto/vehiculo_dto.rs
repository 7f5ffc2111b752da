use serde::{Deserialize, Serialize};

use crate::models::vehiculo::Vehiculo;

// Request para crear un vehículo
#[derive(Debug, Deserialize)]
pub struct CreateVehiculoRequest {
    pub numero_interno: String,
    pub patente: String,
    pub kilometro: Option<i64>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateVehiculoRequest {
    pub numero_interno: String,
    pub patente: String,
    pub kilometro: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
    pub id: i32,
    pub numero_interno: String,
    pub patente: String,
    pub kilometro: i64,
}

impl From<Vehiculo> for VehiculoResponse {
    fn from(v: Vehiculo) -> Self {
        Self {
            id: v.id,
            numero_interno: v.numero_interno,
            patente: v.patente,
            kilometro: v.kilometro,
        }
    }
}
