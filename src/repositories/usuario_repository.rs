//! Repositorio de usuarios

use sqlx::PgPool;

use crate::models::usuario::Usuario;
use crate::utils::errors::AppError;

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(usuarios)
    }

    /// Conductores activos, ordenados por nombre
    pub async fn list_conductores(&self) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT * FROM usuarios
            WHERE LOWER(rol) = 'conductor' AND activo = 1
            ORDER BY nombre ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(usuarios)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        username: &str,
        nombre: &str,
        correo: &str,
        rut: &str,
        direccion: &str,
        telefono: &str,
        licencia: &str,
        departamento: &str,
        rol: &str,
        password_hash: &str,
    ) -> Result<i32, AppError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO usuarios (
                username, nombre, correo, rut, direccion, telefono, licencia,
                departamento, rol, password_hash, activo
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 1)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(nombre)
        .bind(correo)
        .bind(rut)
        .bind(direccion)
        .bind(telefono)
        .bind(licencia)
        .bind(departamento)
        .bind(rol)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i32,
        nombre: &str,
        correo: &str,
        rut: &str,
        direccion: &str,
        telefono: &str,
        licencia: &str,
        departamento: &str,
        rol: &str,
        activo: i32,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE usuarios SET
                nombre = $1, correo = $2, rut = $3, direccion = $4, telefono = $5,
                licencia = $6, departamento = $7, rol = $8, activo = $9
            WHERE id = $10
            "#,
        )
        .bind(nombre)
        .bind(correo)
        .bind(rut)
        .bind(direccion)
        .bind(telefono)
        .bind(licencia)
        .bind(departamento)
        .bind(rol)
        .bind(activo)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn update_password(&self, id: i32, password_hash: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE usuarios SET password_hash = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
