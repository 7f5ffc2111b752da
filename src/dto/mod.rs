//! DTOs de la API
//!
//! Tipos de request/response serde. Los requests aplican la validación y
//! los defaults en el borde, antes de llegar a la lógica transaccional.

pub mod auth_dto;
pub mod inspeccion_dto;
pub mod mantencion_dto;
pub mod usuario_dto;
pub mod vehiculo_dto;
