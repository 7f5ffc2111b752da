pub mod auth_routes;
pub mod inspeccion_routes;
pub mod mantencion_routes;
pub mod reporte_routes;
pub mod usuario_routes;
pub mod vehiculo_routes;
