// ============================================================================
// EVENT HANDLING - Listeners del documento y de botones
// ============================================================================
// - Listeners en elementos del DOM: el navegador los limpia al destruir el
//   elemento, por lo que closure.forget() es seguro.
// - DOMContentLoaded se registra una sola vez con un closure FnOnce.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};
use super::element::document;

/// Ejecutar `handler` cuando el documento esté listo
///
/// Si el DOM ya está cargado (script con `defer`, o wasm que llega tarde)
/// se ejecuta inmediatamente.
pub fn on_dom_ready<F>(handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    if doc.ready_state() != "loading" {
        handler();
        return Ok(());
    }

    let closure = Closure::once_into_js(handler);
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
}

/// Registrar click handler en un elemento
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
