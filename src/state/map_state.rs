// ============================================================================
// MAP STATE - Estado compartido de la sesión de mapa
// ============================================================================
// Ubicación actual, destino y direcciones. Cada setter reemplaza su campo
// entero y notifica; los otros dos campos no se tocan.
// ============================================================================

use serde::Serialize;
use crate::models::{CurrentLocation, Directions, Location};
use crate::state::ReactiveState;

/// Copia serializable de los tres campos
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapSnapshot {
    pub current_location: CurrentLocation,
    pub destination: Option<Location>,
    pub directions: Option<Directions>,
}

/// Contenedor del estado de mapa. Clonar comparte los mismos valores.
#[derive(Clone, Default)]
pub struct MapState {
    current_location: ReactiveState<CurrentLocation>,
    destination: ReactiveState<Option<Location>>,
    directions: ReactiveState<Option<Directions>>,
}

impl MapState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_location(&self, location: CurrentLocation) {
        log::debug!("📍 [MAP] current_location = {:?}", location);
        self.current_location.set(location);
    }

    pub fn set_destination(&self, location: Option<Location>) {
        log::debug!("🏁 [MAP] destination = {:?}", location);
        self.destination.set(location);
    }

    pub fn set_directions(&self, directions: Option<Directions>) {
        log::debug!(
            "🧭 [MAP] directions = {} ruta(s)",
            directions.as_ref().map(|d| d.route_count()).unwrap_or(0)
        );
        self.directions.set(directions);
    }

    pub fn current_location(&self) -> CurrentLocation {
        self.current_location.value()
    }

    pub fn destination(&self) -> Option<Location> {
        self.destination.value()
    }

    pub fn directions(&self) -> Option<Directions> {
        self.directions.value()
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            current_location: self.current_location(),
            destination: self.destination(),
            directions: self.directions(),
        }
    }

    /// El callback se ejecuta después de cada setter
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = std::rc::Rc::new(callback);
        let cb = callback.clone();
        self.current_location.subscribe(move || cb());
        let cb = callback.clone();
        self.destination.subscribe(move || cb());
        self.directions.subscribe(move || callback());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatLng;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let state = MapState::new();
        assert_eq!(state.current_location(), CurrentLocation { lat: None, lng: None });
        assert_eq!(state.destination(), None);
        assert_eq!(state.directions(), None);
    }

    #[test]
    fn test_set_current_location_round_trip() {
        let state = MapState::new();
        state.set_destination(Some(LatLng::new(1.0, 2.0)));

        let location = CurrentLocation::from(LatLng::new(40.4168, -3.7038));
        state.set_current_location(location);

        assert_eq!(state.current_location(), location);
        assert_eq!(state.destination(), Some(LatLng::new(1.0, 2.0)));
        assert_eq!(state.directions(), None);
    }

    #[test]
    fn test_set_destination_round_trip() {
        let state = MapState::new();
        state.set_directions(Some(Directions::new(json!({ "routes": [] }))));

        state.set_destination(Some(LatLng::new(41.3874, 2.1686)));
        assert_eq!(state.destination(), Some(LatLng::new(41.3874, 2.1686)));
        assert_eq!(state.current_location(), CurrentLocation::default());
        assert!(state.directions().is_some());

        state.set_destination(None);
        assert_eq!(state.destination(), None);
    }

    #[test]
    fn test_set_directions_round_trip() {
        let state = MapState::new();
        let directions = Directions::new(json!({ "routes": [{ "summary": "M-30" }] }));

        state.set_directions(Some(directions.clone()));
        assert_eq!(state.directions(), Some(directions));
        assert_eq!(state.destination(), None);
    }

    #[test]
    fn test_setters_overwrite_wholesale() {
        let state = MapState::new();
        state.set_current_location(CurrentLocation::from(LatLng::new(1.0, 1.0)));
        state.set_current_location(CurrentLocation { lat: Some(5.0), lng: None });
        assert_eq!(state.current_location(), CurrentLocation { lat: Some(5.0), lng: None });
    }

    #[test]
    fn test_clone_shares_values() {
        let state = MapState::new();
        let page_handle = state.clone();
        page_handle.set_destination(Some(LatLng::new(3.0, 4.0)));
        assert_eq!(state.destination(), Some(LatLng::new(3.0, 4.0)));
    }

    #[test]
    fn test_subscribers_fire_once_per_setter() {
        let state = MapState::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        state.set_current_location(CurrentLocation::default());
        state.set_destination(None);
        state.set_directions(None);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_snapshot_serializes_all_fields() {
        let state = MapState::new();
        state.set_destination(Some(LatLng::new(1.5, 2.5)));
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json, json!({
            "current_location": { "lat": null, "lng": null },
            "destination": { "lat": 1.5, "lng": 2.5 },
            "directions": null
        }));
    }
}
