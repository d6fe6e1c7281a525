// ============================================================================
// RIDER MAP PWA - Rust puro (wasm-bindgen + web-sys)
// ============================================================================
// - Router: tabla de rutas cliente / repartidor / jefe
// - State: estado de mapa compartido (ubicación, destino, ruta)
// - Maps: loader único del SDK de Google Maps
// - Views: funciones que renderizan DOM
// ============================================================================

pub mod config;
pub mod models;
pub mod state;
pub mod router;
pub mod maps;
pub mod dom;
pub mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App (hilo principal del navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Rider Map - Rust puro");

    if !CONFIG.has_maps_api_key() {
        log::warn!("⚠️ GOOGLE_MAPS_API_KEY no configurada");
    }

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: un re-render pedido durante otro render se ignora
        match app_cell.try_borrow_mut() {
            Ok(mut slot) => match slot.as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se ignora"),
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Ruta actual (debug desde la consola)
#[wasm_bindgen]
pub fn current_route_name() -> Option<String> {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .and_then(|app| app.state().current_route().record)
            .map(|record| record.name.to_string())
    })
}
