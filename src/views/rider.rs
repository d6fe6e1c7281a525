// ============================================================================
// RIDER PAGE (home) - Destino y ruta asignada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::views::format::{format_destination, format_directions};

pub fn render_rider_page(state: &AppState) -> Result<Element, JsValue> {
    let destination = state.map.destination();
    let directions = state.map.directions();

    let page = ElementBuilder::new("section")?.class("rider-page").build();
    append_child(&page, &ElementBuilder::new("h2")?.text("Repartidor").build())?;
    append_child(&page, &info_row("Destino", &format_destination(destination.as_ref()))?)?;
    append_child(&page, &info_row("Ruta", &format_directions(directions.as_ref()))?)?;

    if directions.is_some() {
        let clear = ElementBuilder::new("button")?
            .class("secondary-button")
            .attr("type", "button")?
            .text("Limpiar ruta")
            .build();
        let state = state.clone();
        on_click(&clear, move |_| {
            log::info!("🧹 [RIDER] Ruta limpiada");
            state.map.set_directions(None);
        })?;
        append_child(&page, &clear)?;
    }

    Ok(page)
}

pub(crate) fn info_row(label: &str, value: &str) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("dt")?.text(label).build();
    let value = ElementBuilder::new("dd")?.text(value).build();
    Ok(ElementBuilder::new("dl")?
        .class("info-row")
        .child(label)?
        .child(value)?
        .build())
}
