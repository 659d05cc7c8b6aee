use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::export::DocumentExporter;
use crate::layout::PageConfig;
use crate::models::template::Template;
use crate::wizard::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// The static template catalog, loaded once at startup.
    pub catalog: Arc<[Template]>,
    /// In-memory wizard sessions; one draft per session.
    pub sessions: SessionStore,
    /// Pluggable export backend. Default: PlainTextExporter.
    pub exporter: Arc<dyn DocumentExporter>,
    /// Page geometry shared by the resume preview and the export path.
    pub page_config: PageConfig,
}
