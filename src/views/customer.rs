// ============================================================================
// CUSTOMER PAGE - Ubicación, destino y cálculo de ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, input_value, on_click, on_submit, ElementBuilder};
use crate::maps::{get_google_maps_loader, request_directions, MapsError, TravelMode};
use crate::models::CurrentLocation;
use crate::state::AppState;
use crate::views::format::{format_current_location, format_destination, parse_coordinate, parse_lat_lng};

pub fn render_customer_page(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("customer-page").build();

    append_child(&page, &ElementBuilder::new("h2")?.text("Cliente").build())?;
    append_child(&page, &render_location_form(state)?)?;
    append_child(&page, &render_destination_form(state)?)?;
    append_child(&page, &render_directions_button(state)?)?;

    Ok(page)
}

fn render_location_form(state: &AppState) -> Result<Element, JsValue> {
    let current = state.map.current_location();
    let form = coordinate_form(
        "Tu ubicación",
        &format_current_location(&current),
        "current-lat",
        "current-lng",
        "Guardar ubicación",
    )?;

    let state = state.clone();
    on_submit(&form, move || {
        // Cada componente por separado: la ubicación puede quedar a medias
        let location = CurrentLocation {
            lat: input_value("current-lat").as_deref().and_then(parse_coordinate),
            lng: input_value("current-lng").as_deref().and_then(parse_coordinate),
        };
        state.map.set_current_location(location);
    })?;
    Ok(form)
}

fn render_destination_form(state: &AppState) -> Result<Element, JsValue> {
    let destination = state.map.destination();
    let form = coordinate_form(
        "Destino",
        &format_destination(destination.as_ref()),
        "dest-lat",
        "dest-lng",
        "Guardar destino",
    )?;

    let state = state.clone();
    on_submit(&form, move || {
        let lat = input_value("dest-lat").unwrap_or_default();
        let lng = input_value("dest-lng").unwrap_or_default();
        match parse_lat_lng(&lat, &lng) {
            Some(location) => {
                state.set_error(None);
                state.map.set_destination(Some(location));
            }
            None => state.set_error(Some(format!("Destino inválido: {}, {}", lat, lng))),
        }
    })?;
    Ok(form)
}

fn render_directions_button(state: &AppState) -> Result<Element, JsValue> {
    let loading = state.is_directions_loading();
    let mut button = ElementBuilder::new("button")?
        .class("primary-button")
        .attr("type", "button")?
        .text(if loading { "Calculando…" } else { "Calcular ruta" });
    if loading {
        button = button.attr("disabled", "true")?;
    }
    let button = button.build();

    let state = state.clone();
    on_click(&button, move |_| {
        if state.is_directions_loading() {
            return;
        }
        let state = state.clone();
        spawn_local(async move {
            state.set_directions_loading(true);
            let result = load_directions(&state).await;
            state.set_directions_loading(false);
            match result {
                Ok(()) => state.set_error(None),
                Err(e) => {
                    log::error!("❌ [CUSTOMER] {}", e);
                    state.set_error(Some(e.to_string()));
                }
            }
        });
    })?;
    Ok(button)
}

/// Carga el SDK (una sola vez) y guarda la ruta ubicación -> destino
async fn load_directions(state: &AppState) -> Result<(), MapsError> {
    let origin = state
        .map
        .current_location()
        .as_lat_lng()
        .ok_or(MapsError::MissingPoint("current location"))?;
    let destination = state
        .map
        .destination()
        .ok_or(MapsError::MissingPoint("destination"))?;

    get_google_maps_loader().load().await?;
    let directions = request_directions(origin, destination, TravelMode::Driving).await?;
    state.map.set_directions(Some(directions));
    Ok(())
}

/// <form> con valor actual + inputs lat/lng
fn coordinate_form(
    title: &str,
    current: &str,
    lat_id: &str,
    lng_id: &str,
    submit_label: &str,
) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h3")?.text(title).build();
    let value = ElementBuilder::new("p")?.class("current-value").text(current).build();
    let lat = ElementBuilder::new("input")?
        .id(lat_id)?
        .attr("name", lat_id)?
        .attr("placeholder", "Latitud")?
        .attr("inputmode", "decimal")?
        .build();
    let lng = ElementBuilder::new("input")?
        .id(lng_id)?
        .attr("name", lng_id)?
        .attr("placeholder", "Longitud")?
        .attr("inputmode", "decimal")?
        .build();
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .text(submit_label)
        .build();

    Ok(ElementBuilder::new("form")?
        .class("coordinate-form")
        .child(heading)?
        .child(value)?
        .child(lat)?
        .child(lng)?
        .child(submit)?
        .build())
}
