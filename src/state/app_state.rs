// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::router::{resolve, RouteRecord};
use crate::state::{MapState, ReactiveState};

/// Ruta actual: el path pedido y lo que resolvió (None = no encontrada)
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentRoute {
    pub path: String,
    pub record: Option<&'static RouteRecord>,
}

impl CurrentRoute {
    pub fn from_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            record: resolve(path),
        }
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub map: MapState,
    pub route: ReactiveState<CurrentRoute>,
    // UI State
    pub directions_loading: ReactiveState<bool>,
    pub last_error: ReactiveState<Option<String>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(initial_path: &str) -> Self {
        Self {
            map: MapState::new(),
            route: ReactiveState::new(CurrentRoute::from_path(initial_path)),
            directions_loading: ReactiveState::new(false),
            last_error: ReactiveState::new(None),
        }
    }

    /// Actualizar ruta (no notifica si no cambió)
    pub fn set_route_from_path(&self, path: &str) {
        let next = CurrentRoute::from_path(path);
        if self.route.value() == next {
            return;
        }
        if next.record.is_none() {
            log::warn!("⚠️ [ROUTER] Ruta no encontrada: {}", path);
        }
        self.route.set(next);
    }

    pub fn current_route(&self) -> CurrentRoute {
        self.route.value()
    }

    pub fn set_directions_loading(&self, loading: bool) {
        self.directions_loading.set(loading);
    }

    pub fn is_directions_loading(&self) -> bool {
        self.directions_loading.value()
    }

    pub fn set_error(&self, error: Option<String>) {
        self.last_error.set(error);
    }

    pub fn error(&self) -> Option<String> {
        self.last_error.value()
    }

    /// Suscribirse a cualquier cambio (mapa, ruta o UI)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = std::rc::Rc::new(callback);
        let cb = callback.clone();
        self.map.subscribe(move || cb());
        let cb = callback.clone();
        self.route.subscribe(move || cb());
        let cb = callback.clone();
        self.directions_loading.subscribe(move || cb());
        self.last_error.subscribe(move || callback());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Page;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_initial_route_is_resolved() {
        let state = AppState::new("/customer");
        let route = state.current_route();
        assert_eq!(route.path, "/customer");
        assert_eq!(route.record.map(|r| r.page), Some(Page::Customer));
    }

    #[test]
    fn test_unknown_route_keeps_path() {
        let state = AppState::new("/nowhere");
        let route = state.current_route();
        assert_eq!(route.path, "/nowhere");
        assert!(route.record.is_none());
    }

    #[test]
    fn test_route_change_notifies_once() {
        let state = AppState::new("/");
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe_to_changes(move || hits_clone.set(hits_clone.get() + 1));

        state.set_route_from_path("/boss");
        state.set_route_from_path("/boss");
        assert_eq!(hits.get(), 1);
        assert_eq!(state.current_route().record.map(|r| r.page), Some(Page::Boss));
    }

    #[test]
    fn test_map_changes_reach_app_subscribers() {
        let state = AppState::new("/");
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe_to_changes(move || hits_clone.set(hits_clone.get() + 1));

        state.map.set_destination(None);
        state.set_error(Some("boom".to_string()));
        assert_eq!(hits.get(), 2);
        assert_eq!(state.error().as_deref(), Some("boom"));
    }
}
