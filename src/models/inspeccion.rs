//! Modelo de Inspección
//!
//! Una inspección registra la revisión de seguridad de un vehículo hecha
//! por un conductor. El registro padre y sus ítems se escriben siempre como
//! unidad atómica; una vez creada, la inspección es inmutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Largo máximo almacenado para la observación de un ítem
pub const MAX_OBS_ITEM: usize = 255;

/// Inspección - mapea a la tabla inspecciones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inspeccion {
    pub id: i32,
    pub usuario_id: i32,
    pub vehiculo_id: i32,
    pub observacion: String,
    pub estado: String,
    /// Foto opcional como data URL base64
    pub foto: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Ítem de inspección tal como está almacenado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InspeccionItem {
    pub item_key: String,
    pub existe: String,
    pub estado: String,
    pub obs: String,
}

/// Existencia del componente inspeccionado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existencia {
    Si,
    No,
}

impl Existencia {
    /// Solo "NO" explícito marca ausencia; cualquier otro valor (incluida
    /// la omisión) se interpreta como presente.
    pub fn coerce(value: Option<&str>) -> Self {
        match value {
            Some("NO") => Existencia::No,
            _ => Existencia::Si,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Existencia::Si => "SI",
            Existencia::No => "NO",
        }
    }
}

/// Condición del componente inspeccionado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condicion {
    Bueno,
    Regular,
    Malo,
}

impl Condicion {
    /// Valores no reconocidos se fuerzan a Bueno, nunca se rechazan.
    pub fn coerce(value: Option<&str>) -> Self {
        match value {
            Some("Regular") => Condicion::Regular,
            Some("Malo") => Condicion::Malo,
            _ => Condicion::Bueno,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condicion::Bueno => "Bueno",
            Condicion::Regular => "Regular",
            Condicion::Malo => "Malo",
        }
    }
}

/// Ítem validado y con defaults aplicados, listo para persistir
#[derive(Debug, Clone)]
pub struct NuevoInspeccionItem {
    pub item_key: String,
    pub existe: Existencia,
    pub estado: Condicion,
    pub obs: String,
}

impl NuevoInspeccionItem {
    pub fn new(
        item_key: String,
        existe: Option<&str>,
        estado: Option<&str>,
        obs: Option<&str>,
    ) -> Self {
        Self {
            item_key,
            existe: Existencia::coerce(existe),
            estado: Condicion::coerce(estado),
            obs: truncate_obs(obs.unwrap_or("")),
        }
    }
}

/// Truncar la observación al largo máximo almacenable, respetando
/// límites de caracteres
pub fn truncate_obs(obs: &str) -> String {
    obs.chars().take(MAX_OBS_ITEM).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existencia_defaults_to_si() {
        assert_eq!(Existencia::coerce(None), Existencia::Si);
        assert_eq!(Existencia::coerce(Some("SI")), Existencia::Si);
        assert_eq!(Existencia::coerce(Some("no")), Existencia::Si);
        assert_eq!(Existencia::coerce(Some("cualquiera")), Existencia::Si);
        assert_eq!(Existencia::coerce(Some("NO")), Existencia::No);
    }

    #[test]
    fn test_condicion_coerces_unknown_to_bueno() {
        assert_eq!(Condicion::coerce(None), Condicion::Bueno);
        assert_eq!(Condicion::coerce(Some("Bueno")), Condicion::Bueno);
        assert_eq!(Condicion::coerce(Some("Regular")), Condicion::Regular);
        assert_eq!(Condicion::coerce(Some("Malo")), Condicion::Malo);
        assert_eq!(Condicion::coerce(Some("regular")), Condicion::Bueno);
        assert_eq!(Condicion::coerce(Some("Pésimo")), Condicion::Bueno);
    }

    #[test]
    fn test_truncate_obs_exact_limit() {
        let long = "a".repeat(400);
        assert_eq!(truncate_obs(&long).chars().count(), MAX_OBS_ITEM);

        let short = "todo en orden";
        assert_eq!(truncate_obs(short), short);
    }

    #[test]
    fn test_truncate_obs_multibyte_boundary() {
        let acentos = "á".repeat(300);
        let truncated = truncate_obs(&acentos);
        assert_eq!(truncated.chars().count(), MAX_OBS_ITEM);
        assert!(truncated.chars().all(|c| c == 'á'));
    }

    #[test]
    fn test_nuevo_item_applies_defaults() {
        let item = NuevoInspeccionItem::new("Freno de mano".to_string(), None, None, None);
        assert_eq!(item.existe, Existencia::Si);
        assert_eq!(item.estado, Condicion::Bueno);
        assert_eq!(item.obs, "");
    }
}
