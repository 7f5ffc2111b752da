//! Utilidades de validación
//!
//! Funciones helper de validación compartidas por los controladores.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar una patente: sin espacios en los extremos y en mayúsculas
pub fn normalize_patente(value: &str) -> String {
    value.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("abc").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_normalize_patente() {
        assert_eq!(normalize_patente("  ab-cd 12 "), "AB-CD 12");
        assert_eq!(normalize_patente("hjkl99"), "HJKL99");
    }
}
