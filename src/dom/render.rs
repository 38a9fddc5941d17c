// ============================================================================
// RENDER TARGET - Escritura de texto en elementos por ID
// ============================================================================

use std::rc::Rc;
use super::element::{get_element_by_id, set_text_content};

/// Destino donde el panel escribe sus valores
pub trait RenderTarget {
    /// Reemplazar el texto del elemento `id`; error si no existe
    fn set_text(&self, id: &str, text: &str) -> Result<(), String>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &T {
    fn set_text(&self, id: &str, text: &str) -> Result<(), String> {
        (**self).set_text(id, text)
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for Rc<T> {
    fn set_text(&self, id: &str, text: &str) -> Result<(), String> {
        (**self).set_text(id, text)
    }
}

/// Documento real del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct DomRenderTarget;

impl DomRenderTarget {
    pub fn new() -> Self {
        Self
    }
}

impl RenderTarget for DomRenderTarget {
    fn set_text(&self, id: &str, text: &str) -> Result<(), String> {
        let element = get_element_by_id(id).ok_or_else(|| format!("Elemento #{} no encontrado", id))?;
        set_text_content(&element, text);
        Ok(())
    }
}
