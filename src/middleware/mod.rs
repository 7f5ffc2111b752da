//! Middleware HTTP
//!
//! Autenticación JWT y configuración CORS.

pub mod auth;
pub mod cors;
