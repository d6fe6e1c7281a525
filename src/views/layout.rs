// ============================================================================
// MAIN LAYOUT - Cabecera + navegación + página de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{href, navigate, Page, LAYOUT_NAME};
use crate::state::AppState;
use crate::views::{render_boss_page, render_customer_page, render_rider_page};

/// Renderizar la app completa para la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    let current_page = route.record.map(|record| record.page);

    let container = ElementBuilder::new("div")?
        .class("main-layout")
        .attr("data-layout", LAYOUT_NAME)?
        .build();

    append_child(&container, &render_header(state, current_page)?)?;

    if let Some(error) = state.error() {
        append_child(&container, &render_error_banner(state, &error)?)?;
    }

    let page = match current_page {
        Some(Page::Customer) => render_customer_page(state)?,
        Some(Page::Rider) => render_rider_page(state)?,
        Some(Page::Boss) => render_boss_page(state)?,
        None => render_not_found(&route.path)?,
    };
    let main = ElementBuilder::new("main")?
        .class("page")
        .child(page)?
        .build();
    append_child(&container, &main)?;

    Ok(container)
}

fn render_header(state: &AppState, current: Option<Page>) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("nav").build();

    for page in Page::ALL {
        let class = if current == Some(page) { "nav-link active" } else { "nav-link" };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &href(page))?
            .text(page.title())
            .build();

        let state = state.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            if let Err(err) = navigate(page, &state) {
                log::error!("❌ [ROUTER] Error navegando a {}: {:?}", page.name(), err);
            }
        })?;
        append_child(&nav, &link)?;
    }

    let title = ElementBuilder::new("h1")?.class("app-title").text("Rider Map").build();
    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(title)?
        .child(nav)?
        .build())
}

fn render_error_banner(state: &AppState, error: &str) -> Result<Element, JsValue> {
    let message = ElementBuilder::new("span")?.text(error).build();
    let close = ElementBuilder::new("button")?
        .class("error-close")
        .attr("type", "button")?
        .text("✕")
        .build();

    let state = state.clone();
    on_click(&close, move |_| state.set_error(None))?;

    Ok(ElementBuilder::new("div")?
        .class("error-banner")
        .attr("role", "alert")?
        .child(message)?
        .child(close)?
        .build())
}

fn render_not_found(path: &str) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?.text("Página no encontrada").build();
    let detail = ElementBuilder::new("p")?.text(&format!("No hay ninguna página en {}", path)).build();
    Ok(ElementBuilder::new("section")?
        .class("not-found")
        .child(title)?
        .child(detail)?
        .build())
}
