//! Generación de reportes PDF
//!
//! Catálogo fijo del checklist, geometría de página y el renderer del
//! informe de inspección.

pub mod catalog;
pub mod inspeccion_pdf;
pub mod layout;
