//! DTOs de inspecciones
//!
//! El mapa de ítems llega como JSON laxo desde el formulario; aquí se
//! convierte en registros tipados con defaults aplicados antes de tocar
//! la transacción.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::inspeccion::NuevoInspeccionItem;

/// Valores de un ítem tal como los envía el cliente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPayload {
    pub existe: Option<String>,
    pub estado: Option<String>,
    pub obs: Option<String>,
}

/// Request para crear una inspección
#[derive(Debug, Deserialize)]
pub struct CreateInspeccionRequest {
    pub usuario_id: Option<i32>,
    pub vehiculo_id: Option<i32>,
    pub observacion: Option<String>,
    pub estado: Option<String>,
    pub items: Option<HashMap<String, ItemPayload>>,
    /// Foto opcional como data URL base64
    pub foto: Option<String>,
}

impl CreateInspeccionRequest {
    /// Convertir el mapa laxo de ítems en registros tipados con defaults.
    /// Cada clave enviada produce exactamente un registro.
    pub fn typed_items(&self) -> Vec<NuevoInspeccionItem> {
        self.items
            .as_ref()
            .map(|items| {
                items
                    .iter()
                    .map(|(key, val)| {
                        NuevoInspeccionItem::new(
                            key.clone(),
                            val.existe.as_deref(),
                            val.estado.as_deref(),
                            val.obs.as_deref(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Response de creación: id generado y cantidad de ítems persistidos
#[derive(Debug, Serialize)]
pub struct InspeccionCreada {
    pub id: i32,
    pub items: usize,
}

/// Fila del listado de inspecciones, con datos del conductor y vehículo
#[derive(Debug, Serialize, FromRow)]
pub struct InspeccionResumen {
    pub id: i32,
    pub fecha: DateTime<Utc>,
    pub conductor_nombre: String,
    pub usuario_id: i32,
    pub vehiculo_patente: String,
    pub vehiculo_id: i32,
    pub estado: String,
    pub observacion: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inspeccion::{Condicion, Existencia};

    fn request_with_items(items: HashMap<String, ItemPayload>) -> CreateInspeccionRequest {
        CreateInspeccionRequest {
            usuario_id: Some(1),
            vehiculo_id: Some(1),
            observacion: None,
            estado: None,
            items: Some(items),
            foto: None,
        }
    }

    #[test]
    fn test_typed_items_empty_when_missing() {
        let req = CreateInspeccionRequest {
            usuario_id: Some(1),
            vehiculo_id: Some(1),
            observacion: None,
            estado: None,
            items: None,
            foto: None,
        };
        assert!(req.typed_items().is_empty());
    }

    #[test]
    fn test_typed_items_one_record_per_key() {
        let mut items = HashMap::new();
        items.insert("Freno de mano".to_string(), ItemPayload::default());
        items.insert(
            "Luces bajas".to_string(),
            ItemPayload {
                existe: Some("NO".to_string()),
                estado: Some("Malo".to_string()),
                obs: Some("ampolleta quemada".to_string()),
            },
        );

        let typed = request_with_items(items).typed_items();
        assert_eq!(typed.len(), 2);

        let luces = typed.iter().find(|i| i.item_key == "Luces bajas").unwrap();
        assert_eq!(luces.existe, Existencia::No);
        assert_eq!(luces.estado, Condicion::Malo);
        assert_eq!(luces.obs, "ampolleta quemada");

        let freno = typed.iter().find(|i| i.item_key == "Freno de mano").unwrap();
        assert_eq!(freno.existe, Existencia::Si);
        assert_eq!(freno.estado, Condicion::Bueno);
    }

    #[test]
    fn test_typed_items_obs_truncated() {
        let mut items = HashMap::new();
        items.insert(
            "Extintor".to_string(),
            ItemPayload {
                existe: None,
                estado: Some("cualquier cosa".to_string()),
                obs: Some("x".repeat(600)),
            },
        );

        let typed = request_with_items(items).typed_items();
        assert_eq!(typed[0].estado, Condicion::Bueno);
        assert_eq!(typed[0].obs.chars().count(), 255);
    }
}
