use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usuario::Usuario;

// Request para crear un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    #[validate(
        length(max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub username: String,

    #[validate(length(min = 4, max = 100))]
    pub password: String,

    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub rut: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub licencia: Option<String>,
    pub departamento: Option<String>,
    pub rol: Option<String>,
}

// Request para actualizar un usuario (sin credenciales)
#[derive(Debug, Deserialize)]
pub struct UpdateUsuarioRequest {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub rut: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub licencia: Option<String>,
    pub departamento: Option<String>,
    pub rol: Option<String>,
    pub activo: Option<bool>,
}

// Request para cambiar la contraseña
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 4, max = 100))]
    pub password: String,
}

// Response de usuario (sin hash de contraseña)
#[derive(Debug, Serialize)]
pub struct UsuarioResponse {
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
    pub activo: i32,
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            username: u.username,
            nombre: u.nombre,
            correo: u.correo,
            rut: u.rut,
            direccion: u.direccion,
            telefono: u.telefono,
            licencia: u.licencia,
            departamento: u.departamento,
            rol: u.rol,
            activo: u.activo,
        }
    }
}
