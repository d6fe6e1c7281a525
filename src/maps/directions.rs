// ============================================================================
// DIRECTIONS - google.maps.DirectionsService vía js_sys::Reflect
// ============================================================================

use js_sys::{Array, Function, Object, Promise, Reflect, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use crate::maps::loader::google_maps_namespace;
use crate::maps::MapsError;
use crate::models::{Directions, LatLng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Valor de `google.maps.TravelMode`
    pub fn as_sdk_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "DRIVING",
            TravelMode::Walking => "WALKING",
            TravelMode::Bicycling => "BICYCLING",
            TravelMode::Transit => "TRANSIT",
        }
    }
}

/// Pedir una ruta al SDK (ya cargado) y devolverla como `Directions` opaco
pub async fn request_directions(
    origin: LatLng,
    destination: LatLng,
    mode: TravelMode,
) -> Result<Directions, MapsError> {
    let maps = google_maps_namespace().ok_or(MapsError::NotLoaded)?;

    let constructor = Reflect::get(&maps, &JsValue::from_str("DirectionsService"))?
        .dyn_into::<Function>()
        .map_err(|_| MapsError::Js("DirectionsService is not a constructor".to_string()))?;
    let service = Reflect::construct(&constructor, &Array::new())?;
    let route = Reflect::get(&service, &JsValue::from_str("route"))?
        .dyn_into::<Function>()
        .map_err(|_| MapsError::Js("DirectionsService.route is not a function".to_string()))?;

    let request = Object::new();
    Reflect::set(&request, &JsValue::from_str("origin"), &lat_lng_literal(origin)?)?;
    Reflect::set(&request, &JsValue::from_str("destination"), &lat_lng_literal(destination)?)?;
    Reflect::set(&request, &JsValue::from_str("travelMode"), &JsValue::from_str(mode.as_sdk_str()))?;

    log::info!(
        "🧭 [MAPS] Pidiendo ruta ({}, {}) -> ({}, {}) [{}]",
        origin.lat, origin.lng, destination.lat, destination.lng, mode.as_sdk_str()
    );

    let promise = route
        .call1(&service, &request)?
        .dyn_into::<Promise>()
        .map_err(|_| MapsError::Js("DirectionsService.route did not return a Promise".to_string()))?;
    let result = JsFuture::from(promise).await?;

    let json = JSON::stringify(&result)?
        .as_string()
        .ok_or_else(|| MapsError::Decode("DirectionsResult is not serializable".to_string()))?;
    let raw: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| MapsError::Decode(e.to_string()))?;

    let directions = Directions::new(raw);
    log::info!("✅ [MAPS] Ruta recibida: {} ruta(s)", directions.route_count());
    Ok(directions)
}

/// `{ lat, lng }` como objeto JS
fn lat_lng_literal(point: LatLng) -> Result<JsValue, MapsError> {
    let literal = Object::new();
    Reflect::set(&literal, &JsValue::from_str("lat"), &JsValue::from_f64(point.lat))?;
    Reflect::set(&literal, &JsValue::from_str("lng"), &JsValue::from_f64(point.lng))?;
    Ok(literal.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_mode_sdk_values() {
        assert_eq!(TravelMode::default().as_sdk_str(), "DRIVING");
        assert_eq!(TravelMode::Walking.as_sdk_str(), "WALKING");
        assert_eq!(TravelMode::Bicycling.as_sdk_str(), "BICYCLING");
        assert_eq!(TravelMode::Transit.as_sdk_str(), "TRANSIT");
    }
}
