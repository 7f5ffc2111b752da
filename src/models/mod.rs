//! Modelos de dominio
//!
//! Structs que mapean a las tablas del esquema y los enums de dominio.

pub mod inspeccion;
pub mod mantencion;
pub mod usuario;
pub mod vehiculo;
