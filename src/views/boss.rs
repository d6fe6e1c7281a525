// ============================================================================
// BOSS DASHBOARD - Vista completa del estado de mapa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::maps::get_google_maps_loader;
use crate::state::AppState;
use crate::views::format::{format_current_location, format_destination, format_directions};
use crate::views::rider::info_row;

pub fn render_boss_page(state: &AppState) -> Result<Element, JsValue> {
    let snapshot = state.map.snapshot();
    let loader_status = get_google_maps_loader().status();

    let page = ElementBuilder::new("section")?.class("boss-page").build();
    append_child(&page, &ElementBuilder::new("h2")?.text("Panel").build())?;
    append_child(&page, &info_row("Ubicación", &format_current_location(&snapshot.current_location))?)?;
    append_child(&page, &info_row("Destino", &format_destination(snapshot.destination.as_ref()))?)?;
    append_child(&page, &info_row("Ruta", &format_directions(snapshot.directions.as_ref()))?)?;
    append_child(&page, &info_row("SDK", loader_status.label())?)?;

    let raw = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| JsValue::from_str(&format!("Error serializando estado: {}", e)))?;
    let pre = ElementBuilder::new("pre")?.class("state-dump").text(&raw).build();
    append_child(&page, &pre)?;

    Ok(page)
}
