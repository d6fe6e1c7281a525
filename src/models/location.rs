use serde::{Deserialize, Serialize};

/// Par latitud / longitud
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Destino del viaje (mismo formato que una coordenada)
pub type Location = LatLng;

/// Ubicación actual. Empieza sin valores: `{ lat: null, lng: null }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CurrentLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl CurrentLocation {
    /// Solo si ambos componentes están definidos
    pub fn as_lat_lng(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.as_lat_lng().is_some()
    }
}

impl From<LatLng> for CurrentLocation {
    fn from(value: LatLng) -> Self {
        Self {
            lat: Some(value.lat),
            lng: Some(value.lng),
        }
    }
}
