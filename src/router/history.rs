// ============================================================================
// HISTORY - Navegación con la History API del navegador
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PopStateEvent;
use crate::router::{href, Page};
use crate::state::AppState;

thread_local! {
    // El listener de popstate es global: solo se registra una vez
    static POPSTATE_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Path actual del navegador (`location.pathname`)
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Navegar a una página: pushState + actualizar estado (que dispara re-render)
pub fn navigate(page: Page, state: &AppState) -> Result<(), JsValue> {
    let target = href(page);
    if current_path() != target {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&target))?;
    }
    log::info!("🧭 [ROUTER] Navegando a {} ({})", target, page.name());
    state.set_route_from_path(&target);
    Ok(())
}

/// Escuchar back/forward del navegador
pub fn listen_popstate(state: &AppState) -> Result<(), JsValue> {
    if POPSTATE_REGISTERED.with(|flag| flag.replace(true)) {
        log::warn!("⚠️ [ROUTER] listen_popstate ya registrado, ignorando");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |_e: PopStateEvent| {
        let path = current_path();
        log::info!("↩️ [ROUTER] popstate -> {}", path);
        state.set_route_from_path(&path);
    }) as Box<dyn FnMut(PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Listener global registrado una sola vez: forget() no acumula closures
    closure.forget();
    Ok(())
}
