// ============================================================================
// CONFIG - Configuración de la app en tiempo de compilación
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub enable_logging: bool,
    pub maps: MapsConfig,
}

/// Configuración del SDK de Google Maps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    pub api_key: String,
    pub version: String,
    pub libraries: Vec<String>,
    pub language: Option<String>,
    pub region: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            enable_logging: true,
            maps: MapsConfig::default(),
        }
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            version: "weekly".to_string(),
            libraries: vec!["places".to_string()],
            language: None,
            region: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(option_env!("BASE_URL").unwrap_or("/")),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            maps: MapsConfig {
                api_key: option_env!("GOOGLE_MAPS_API_KEY").unwrap_or("").to_string(),
                version: option_env!("GOOGLE_MAPS_VERSION").unwrap_or("weekly").to_string(),
                libraries: parse_libraries(option_env!("GOOGLE_MAPS_LIBRARIES").unwrap_or("places")),
                language: option_env!("GOOGLE_MAPS_LANGUAGE").map(|s| s.to_string()),
                region: option_env!("GOOGLE_MAPS_REGION").map(|s| s.to_string()),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Verifica si hay API key configurada
    pub fn has_maps_api_key(&self) -> bool {
        !self.maps.api_key.trim().is_empty()
    }
}

/// "places, geometry" -> ["places", "geometry"]
fn parse_libraries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|lib| !lib.is_empty())
        .map(str::to_string)
        .collect()
}

/// Siempre con "/" inicial y final ("app" -> "/app/")
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
