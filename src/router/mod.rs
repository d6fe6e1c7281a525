// ============================================================================
// ROUTER - Tabla de rutas + history API
// ============================================================================

pub mod routes;
pub mod history;

pub use routes::*;
pub use history::*;
