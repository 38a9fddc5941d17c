use std::rc::Rc;
use web_sys::window;

/// Acceso a la ubicación actual del navegador
pub trait Navigator {
    /// `location.pathname`
    fn current_path(&self) -> String;
    /// `location.href = path`
    fn navigate(&self, path: &str) -> Result<(), String>;
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, path: &str) -> Result<(), String> {
        (**self).navigate(path)
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, path: &str) -> Result<(), String> {
        (**self).navigate(path)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, path: &str) -> Result<(), String> {
        let win = window().ok_or("No window")?;
        win.location()
            .set_href(path)
            .map_err(|e| format!("Error navegando a {}: {:?}", path, e))
    }
}
