// ============================================================================
// MAPS - Integración con el SDK JavaScript de Google Maps
// ============================================================================

pub mod loader;
pub mod directions;

pub use loader::{get_google_maps_loader, GoogleMapsLoader, LoaderOptions, LoaderStatus};
pub use directions::{request_directions, TravelMode};

use wasm_bindgen::JsValue;

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapsError {
    /// `google.maps` todavía no existe en `window`
    NotLoaded,
    /// Falta origen o destino para pedir la ruta
    MissingPoint(&'static str),
    InvalidUrl(String),
    ScriptLoad(String),
    Js(String),
    Decode(String),
}

impl std::fmt::Display for MapsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapsError::NotLoaded => write!(f, "Google Maps SDK is not loaded"),
            MapsError::MissingPoint(which) => write!(f, "Missing route point: {}", which),
            MapsError::InvalidUrl(msg) => write!(f, "Invalid SDK url: {}", msg),
            MapsError::ScriptLoad(msg) => write!(f, "Failed to load Google Maps SDK: {}", msg),
            MapsError::Js(msg) => write!(f, "JavaScript error: {}", msg),
            MapsError::Decode(msg) => write!(f, "Could not decode SDK response: {}", msg),
        }
    }
}

impl std::error::Error for MapsError {}

impl From<JsValue> for MapsError {
    fn from(value: JsValue) -> Self {
        MapsError::Js(js_error_message(&value))
    }
}

/// Texto legible de un error JS (string, Error.message o Debug)
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MapsError::NotLoaded.to_string(), "Google Maps SDK is not loaded");
        assert_eq!(
            MapsError::ScriptLoad("network".to_string()).to_string(),
            "Failed to load Google Maps SDK: network"
        );
        assert_eq!(MapsError::MissingPoint("destination").to_string(), "Missing route point: destination");
        assert_eq!(MapsError::Decode("eof".to_string()).to_string(), "Could not decode SDK response: eof");
    }
}
