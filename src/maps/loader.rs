// ============================================================================
// GOOGLE MAPS LOADER - Singleton perezoso del cargador del SDK
// ============================================================================
// La primera llamada a get_google_maps_loader() construye el loader con la
// configuración global y lo guarda; las siguientes devuelven el mismo Rc.
// Construir no toca el DOM: el <script> solo se inyecta en load().
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;
use crate::config::{AppConfig, CONFIG};
use crate::maps::{js_error_message, MapsError};

const SDK_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";
const DEFAULT_SCRIPT_ID: &str = "__googleMapsScriptId";
const DEFAULT_CALLBACK: &str = "__googleMapsCallback";

thread_local! {
    static LOADER: RefCell<Option<Rc<GoogleMapsLoader>>> = RefCell::new(None);
}

/// Opciones fijas con las que se construye el loader
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    pub api_key: String,
    pub version: String,
    pub libraries: Vec<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub script_id: String,
    pub callback_name: String,
}

impl LoaderOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.maps.api_key.clone(),
            version: config.maps.version.clone(),
            libraries: config.maps.libraries.clone(),
            language: config.maps.language.clone(),
            region: config.maps.region.clone(),
            script_id: DEFAULT_SCRIPT_ID.to_string(),
            callback_name: DEFAULT_CALLBACK.to_string(),
        }
    }

    /// URL del <script> del SDK
    pub fn script_url(&self) -> Result<String, MapsError> {
        let mut params: Vec<(&str, String)> = vec![
            ("key", self.api_key.clone()),
            ("v", self.version.clone()),
        ];
        if !self.libraries.is_empty() {
            params.push(("libraries", self.libraries.join(",")));
        }
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if let Some(region) = &self.region {
            params.push(("region", region.clone()));
        }
        params.push(("callback", self.callback_name.clone()));

        url::Url::parse_with_params(SDK_BASE_URL, &params)
            .map(|url| url.to_string())
            .map_err(|e| MapsError::InvalidUrl(e.to_string()))
    }
}

/// Estado de carga del SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStatus {
    Initialized,
    Loading,
    Success,
    Failure,
}

impl LoaderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoaderStatus::Initialized => "initialized",
            LoaderStatus::Loading => "loading",
            LoaderStatus::Success => "loaded",
            LoaderStatus::Failure => "failed",
        }
    }
}

pub struct GoogleMapsLoader {
    options: LoaderOptions,
    status: Cell<LoaderStatus>,
    // Promesa compartida mientras el script está cargando
    pending: RefCell<Option<Promise>>,
}

impl GoogleMapsLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            status: Cell::new(LoaderStatus::Initialized),
            pending: RefCell::new(None),
        }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    pub fn status(&self) -> LoaderStatus {
        self.status.get()
    }

    /// Cargar el SDK. Las llamadas concurrentes esperan la misma promesa.
    pub async fn load(&self) -> Result<(), MapsError> {
        if self.status.get() == LoaderStatus::Success {
            return Ok(());
        }
        if sdk_present() {
            log::info!("🗺️ [MAPS] google.maps ya presente, no se inyecta script");
            self.status.set(LoaderStatus::Success);
            return Ok(());
        }

        let existing = self.pending.borrow().clone();
        let promise = match existing {
            Some(promise) => promise,
            None => {
                let promise = self.inject_script()?;
                *self.pending.borrow_mut() = Some(promise.clone());
                promise
            }
        };

        self.status.set(LoaderStatus::Loading);
        match JsFuture::from(promise).await {
            Ok(_) => {
                log::info!("✅ [MAPS] SDK de Google Maps cargado");
                self.status.set(LoaderStatus::Success);
                Ok(())
            }
            Err(e) => {
                let message = js_error_message(&e);
                log::error!("❌ [MAPS] Error cargando SDK: {}", message);
                self.status.set(LoaderStatus::Failure);
                // Permitir reintento en la próxima llamada
                self.pending.borrow_mut().take();
                remove_script(&self.options.script_id);
                Err(MapsError::ScriptLoad(message))
            }
        }
    }

    fn inject_script(&self) -> Result<Promise, MapsError> {
        if self.options.api_key.trim().is_empty() {
            log::warn!("⚠️ [MAPS] GOOGLE_MAPS_API_KEY vacía, el SDK rechazará las peticiones");
        }

        let url = self.options.script_url()?;
        let window = web_sys::window().ok_or_else(|| MapsError::Js("No window".to_string()))?;
        let document = window.document().ok_or_else(|| MapsError::Js("No document".to_string()))?;
        let head = document.head().ok_or_else(|| MapsError::Js("No <head>".to_string()))?;

        let script = document
            .create_element("script")?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| MapsError::Js("<script> is not an HtmlScriptElement".to_string()))?;
        script.set_id(&self.options.script_id);
        script.set_src(&url);
        script.set_async(true);
        script.set_defer(true);

        let callback_name = self.options.callback_name.clone();
        let mut setup_error: Option<JsValue> = None;
        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            // El SDK llama a window[callback] cuando termina de inicializarse
            if let Err(e) = Reflect::set(&window, &JsValue::from_str(&callback_name), &resolve) {
                setup_error = Some(e);
                return;
            }
            script.set_onerror(Some(&reject));
            if let Err(e) = head.append_child(&script) {
                setup_error = Some(e);
            }
        });

        if let Some(e) = setup_error {
            return Err(MapsError::ScriptLoad(js_error_message(&e)));
        }
        log::info!("🗺️ [MAPS] Script del SDK inyectado (v={})", self.options.version);
        Ok(promise)
    }
}

/// Acceso al loader único de la app (lo crea la primera vez)
pub fn get_google_maps_loader() -> Rc<GoogleMapsLoader> {
    LOADER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(loader) = slot.as_ref() {
            return loader.clone();
        }
        log::info!("🗺️ [MAPS] Creando GoogleMapsLoader");
        let loader = Rc::new(GoogleMapsLoader::new(LoaderOptions::from_config(&CONFIG)));
        *slot = Some(loader.clone());
        loader
    })
}

/// `window.google.maps` existe
pub(crate) fn sdk_present() -> bool {
    google_maps_namespace().is_some()
}

pub(crate) fn google_maps_namespace() -> Option<JsValue> {
    let window = web_sys::window()?;
    let google = Reflect::get(&window, &JsValue::from_str("google")).ok()?;
    if google.is_undefined() || google.is_null() {
        return None;
    }
    let maps = Reflect::get(&google, &JsValue::from_str("maps")).ok()?;
    if maps.is_undefined() || maps.is_null() {
        return None;
    }
    Some(maps)
}

fn remove_script(script_id: &str) {
    if let Some(script) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(script_id))
    {
        script.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapsConfig;

    fn options() -> LoaderOptions {
        let config = AppConfig {
            maps: MapsConfig {
                api_key: "test-key".to_string(),
                ..MapsConfig::default()
            },
            ..AppConfig::default()
        };
        LoaderOptions::from_config(&config)
    }

    fn query(url: &str) -> Vec<(String, String)> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_options_use_fixed_configuration() {
        let options = options();
        assert_eq!(options.api_key, "test-key");
        assert_eq!(options.version, "weekly");
        assert_eq!(options.libraries, vec!["places".to_string()]);
        assert_eq!(options.callback_name, DEFAULT_CALLBACK);
    }

    #[test]
    fn test_script_url() {
        let url = options().script_url().unwrap();
        assert!(url.starts_with(SDK_BASE_URL));
        assert_eq!(query(&url), vec![
            ("key".to_string(), "test-key".to_string()),
            ("v".to_string(), "weekly".to_string()),
            ("libraries".to_string(), "places".to_string()),
            ("callback".to_string(), DEFAULT_CALLBACK.to_string()),
        ]);
    }

    #[test]
    fn test_script_url_optional_params_and_encoding() {
        let mut options = options();
        options.api_key = "a b&c".to_string();
        options.libraries = vec!["places".to_string(), "geometry".to_string()];
        options.language = Some("es".to_string());
        options.region = Some("ES".to_string());

        let pairs = query(&options.script_url().unwrap());
        assert!(pairs.contains(&("key".to_string(), "a b&c".to_string())));
        assert!(pairs.contains(&("libraries".to_string(), "places,geometry".to_string())));
        assert!(pairs.contains(&("language".to_string(), "es".to_string())));
        assert!(pairs.contains(&("region".to_string(), "ES".to_string())));
    }

    #[test]
    fn test_new_loader_is_initialized() {
        let loader = GoogleMapsLoader::new(options());
        assert_eq!(loader.status(), LoaderStatus::Initialized);
        assert_eq!(loader.options().api_key, "test-key");
    }

    #[test]
    fn test_singleton_returns_same_instance() {
        let first = get_google_maps_loader();
        let second = get_google_maps_loader();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.options(), &LoaderOptions::from_config(&CONFIG));
    }
}
