use std::sync::Arc;

use services::{ExportService, SurveyController};

pub trait UiApp: Send + Sync {
    fn controller(&self) -> Arc<SurveyController>;
    fn exports(&self) -> Arc<ExportService>;
}

#[derive(Clone)]
pub struct AppContext {
    controller: Arc<SurveyController>,
    exports: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            controller: app.controller(),
            exports: app.exports(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> Arc<SurveyController> {
        Arc::clone(&self.controller)
    }

    #[must_use]
    pub fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
