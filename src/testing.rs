// Fakes compartidos por los tests (sin navegador)

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Once;
use log::{Level, Log, Metadata, Record};
use crate::dom::render::RenderTarget;
use crate::models::DashboardStats;
use crate::services::api_client::{ApiError, StatsClient};
use crate::services::navigation::Navigator;

// ---------------------------------------------------------------------------
// Logger que guarda los registros por hilo (los tests corren en paralelo)
// ---------------------------------------------------------------------------

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records.borrow_mut().push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Instalar el logger (una vez) y vaciar los registros del hilo actual
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn captured_logs() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}

// ---------------------------------------------------------------------------

pub struct RecordingNavigator {
    path: String,
    visits: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            visits: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing(path: &str) -> Self {
        Self {
            fail: true,
            ..Self::at(path)
        }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, path: &str) -> Result<(), String> {
        self.visits.borrow_mut().push(path.to_string());
        if self.fail {
            return Err(format!("navigation to {} blocked", path));
        }
        Ok(())
    }
}

/// Documento falso: solo existen los ids creados con un placeholder
pub struct RecordingTarget {
    texts: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl RecordingTarget {
    pub fn with_placeholders(ids: &[&str], placeholder: &str) -> Self {
        let texts = ids
            .iter()
            .map(|id| (id.to_string(), placeholder.to_string()))
            .collect();
        Self {
            texts: RefCell::new(texts),
            writes: Cell::new(0),
        }
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl RenderTarget for RecordingTarget {
    fn set_text(&self, id: &str, text: &str) -> Result<(), String> {
        let mut texts = self.texts.borrow_mut();
        let slot = texts.get_mut(id).ok_or_else(|| format!("Elemento #{} no encontrado", id))?;
        *slot = text.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Cliente con respuesta fija que anota los tokens recibidos
pub struct ScriptedClient {
    response: Result<DashboardStats, ApiError>,
    tokens: RefCell<Vec<Option<String>>>,
}

impl ScriptedClient {
    pub fn ok(stats: DashboardStats) -> Self {
        Self {
            response: Ok(stats),
            tokens: RefCell::new(Vec::new()),
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            response: Err(error),
            tokens: RefCell::new(Vec::new()),
        }
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.tokens.borrow().len()
    }
}

impl StatsClient for ScriptedClient {
    async fn fetch_stats(&self, token: Option<&str>) -> Result<DashboardStats, ApiError> {
        self.tokens.borrow_mut().push(token.map(str::to_string));
        self.response.clone()
    }
}
