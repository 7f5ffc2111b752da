//! Repositorios de acceso a datos
//!
//! Cada repositorio es dueño de su SQL y de los alcances transaccionales.

pub mod inspeccion_repository;
pub mod mantencion_repository;
pub mod usuario_repository;
pub mod vehiculo_repository;
