//! Modelo de Usuario
//!
//! Usuarios del sistema: personal municipal y conductores. El hash de la
//! contraseña nunca sale hacia los clientes (ver los DTO de respuesta).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Usuario - mapea a la tabla usuarios
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i32,
    pub username: String,
    pub nombre: String,
    pub correo: String,
    pub rut: String,
    pub direccion: String,
    pub telefono: String,
    pub licencia: String,
    pub departamento: String,
    pub rol: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub activo: i32,
}

/// Roles reconocidos del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rol {
    Usuario,
    Conductor,
    Supervisor,
    Admin,
}

impl Rol {
    /// Interpretar el rol almacenado, sin distinguir mayúsculas.
    /// Cualquier valor no reconocido se trata como Usuario.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "conductor" => Rol::Conductor,
            "supervisor" => Rol::Supervisor,
            "admin" | "administrador" => Rol::Admin,
            _ => Rol::Usuario,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Usuario => "Usuario",
            Rol::Conductor => "Conductor",
            Rol::Supervisor => "Supervisor",
            Rol::Admin => "Admin",
        }
    }

    /// Los conductores solo pueden operar sobre sus propias inspecciones
    pub fn is_conductor(&self) -> bool {
        matches!(self, Rol::Conductor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rol_case_insensitive() {
        assert_eq!(Rol::parse("conductor"), Rol::Conductor);
        assert_eq!(Rol::parse("CONDUCTOR"), Rol::Conductor);
        assert_eq!(Rol::parse("Conductor "), Rol::Conductor);
        assert_eq!(Rol::parse("Supervisor"), Rol::Supervisor);
        assert_eq!(Rol::parse("admin"), Rol::Admin);
    }

    #[test]
    fn test_parse_rol_unknown_defaults_to_usuario() {
        assert_eq!(Rol::parse(""), Rol::Usuario);
        assert_eq!(Rol::parse("otro"), Rol::Usuario);
    }

    #[test]
    fn test_is_conductor() {
        assert!(Rol::Conductor.is_conductor());
        assert!(!Rol::Supervisor.is_conductor());
        assert!(!Rol::Admin.is_conductor());
    }
}
