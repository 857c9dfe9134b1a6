use std::sync::Arc;

use quiz_core::{Catalog, Clock};

/// What the composition root (e.g. `crates/app`) must provide to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn clock(&self) -> Clock;

    /// Category to jump straight into on launch, if any. Must name a
    /// catalog category; the view silently ignores anything else.
    fn start_category(&self) -> Option<String>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    clock: Clock,
    start_category: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            clock: app.clock(),
            start_category: app.start_category(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn start_category(&self) -> Option<&str> {
        self.start_category.as_deref()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
