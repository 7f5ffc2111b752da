//! Controladores
//!
//! Validación, autorización y orquestación entre DTOs y repositorios.

pub mod auth_controller;
pub mod inspeccion_controller;
pub mod mantencion_controller;
pub mod reporte_controller;
pub mod usuario_controller;
pub mod vehiculo_controller;
