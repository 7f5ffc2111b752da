//! Catálogo de ítems de inspección
//!
//! Lista fija y ordenada de los componentes inspeccionables, agrupada por
//! subsistema. El orden es significativo: el formulario y la tabla del
//! reporte lo preservan siempre.

use crate::models::inspeccion::InspeccionItem;

pub const CATALOGO_ITEMS: &[&str] = &[
    // 1 - Sistema de luces
    "Luces de estacionamiento",
    "Luces bajas",
    "Luces altas",
    "Luz de freno (incluye tercera luz)",
    "Luz de marcha atrás",
    "Luz de viraje derecho",
    "Luz de viraje izquierdo",
    "Luz de emergencia",
    "Luz de patente",
    "Baliza",
    // 2 - Sistema de freno
    "Freno de mano",
    "Freno de pedal",
    "Freno otros",
    // 3 - Neumáticos
    "Neumático delantero derecho",
    "Neumático delantero izquierdo",
    "Neumático trasero derecho",
    "Neumático trasero izquierdo",
    "Neumático de repuesto",
    "Neumáticos otros",
    // 4 - Niveles / motor
    "Aceite de motor",
    "Agua del radiador",
    "Líquido de freno",
    "Correas",
    "Agua de batería",
    // 5 - Accesorios y documentos
    "Extintor",
    "Botiquín",
    "Gata",
    "Llave de ruedas",
    "Triángulos",
    "Chaleco reflectante",
    "Limpia parabrisas",
    "Herramientas",
    "Cinturón de seguridad",
    "Espejos laterales",
    "Espejo interior",
    "Radiotransmisor",
    "Bocina de retroceso",
    "Antena",
    "Permiso de circulación",
    "Revisión técnica",
    "Seguro obligatorio",
    // 6 - Estado general y remolque
    "Techo",
    "Capot",
    "Puertas",
    "Vidrios",
    "Tapabarros",
    "Pick-up",
    "Parachoques",
    "Tubo de escape",
    "Aseo de cabina",
    "Sanitización COVID-19",
];

/// Fila ya reconciliada de la tabla del reporte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilaChecklist {
    pub nombre: &'static str,
    pub existe: String,
    pub estado: String,
    pub obs: String,
}

/// Reconciliar los ítems almacenados con el catálogo completo.
///
/// La tabla resultante tiene exactamente una fila por entrada del catálogo,
/// en el orden del catálogo. Las entradas sin registro almacenado se
/// sintetizan con los defaults (SI / Bueno / sin observación); las claves
/// almacenadas que no están en el catálogo se ignoran.
pub fn merge_con_catalogo(items: &[InspeccionItem]) -> Vec<FilaChecklist> {
    CATALOGO_ITEMS
        .iter()
        .map(|&nombre| {
            let registrado = items.iter().find(|i| i.item_key == nombre);
            FilaChecklist {
                nombre,
                existe: registrado.map(|i| i.existe.clone()).unwrap_or_else(|| "SI".to_string()),
                estado: registrado
                    .map(|i| i.estado.clone())
                    .unwrap_or_else(|| "Bueno".to_string()),
                obs: registrado.map(|i| i.obs.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, existe: &str, estado: &str, obs: &str) -> InspeccionItem {
        InspeccionItem {
            item_key: key.to_string(),
            existe: existe.to_string(),
            estado: estado.to_string(),
            obs: obs.to_string(),
        }
    }

    #[test]
    fn test_catalogo_size_and_order() {
        assert_eq!(CATALOGO_ITEMS.len(), 51);
        assert_eq!(CATALOGO_ITEMS[0], "Luces de estacionamiento");
        assert_eq!(CATALOGO_ITEMS[10], "Freno de mano");
        assert_eq!(CATALOGO_ITEMS[CATALOGO_ITEMS.len() - 1], "Sanitización COVID-19");
    }

    #[test]
    fn test_merge_with_no_items_defaults_everything() {
        let filas = merge_con_catalogo(&[]);
        assert_eq!(filas.len(), CATALOGO_ITEMS.len());
        for (fila, nombre) in filas.iter().zip(CATALOGO_ITEMS) {
            assert_eq!(fila.nombre, *nombre);
            assert_eq!(fila.existe, "SI");
            assert_eq!(fila.estado, "Bueno");
            assert_eq!(fila.obs, "");
        }
    }

    #[test]
    fn test_merge_uses_stored_values() {
        let items = vec![
            item("Freno de mano", "NO", "Malo", "sin tensión"),
            item("Extintor", "SI", "Regular", ""),
        ];
        let filas = merge_con_catalogo(&items);

        let freno = filas.iter().find(|f| f.nombre == "Freno de mano").unwrap();
        assert_eq!(freno.existe, "NO");
        assert_eq!(freno.estado, "Malo");
        assert_eq!(freno.obs, "sin tensión");

        let extintor = filas.iter().find(|f| f.nombre == "Extintor").unwrap();
        assert_eq!(extintor.estado, "Regular");

        // el resto queda en default
        let baliza = filas.iter().find(|f| f.nombre == "Baliza").unwrap();
        assert_eq!(baliza.estado, "Bueno");
    }

    #[test]
    fn test_merge_ignores_stray_keys() {
        let items = vec![item("Motor de dilitio", "NO", "Malo", "")];
        let filas = merge_con_catalogo(&items);
        assert_eq!(filas.len(), CATALOGO_ITEMS.len());
        assert!(filas.iter().all(|f| f.nombre != "Motor de dilitio"));
    }

    #[test]
    fn test_merge_preserves_catalog_order() {
        // Ítems enviados en orden inverso no alteran el orden de la tabla
        let items: Vec<InspeccionItem> = CATALOGO_ITEMS
            .iter()
            .rev()
            .map(|k| item(k, "SI", "Regular", ""))
            .collect();
        let filas = merge_con_catalogo(&items);
        let nombres: Vec<&str> = filas.iter().map(|f| f.nombre).collect();
        assert_eq!(nombres, CATALOGO_ITEMS.to_vec());
    }
}
