use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::list_cache::BlogListCache;
use crate::logos::LogoService;
use crate::store::BlogStore;

/// Shared application state passed to all route handlers.
///
/// Both caches are constructed exactly once per process instance and are
/// never torn down mid-instance; handlers receive them through this state
/// rather than reaching for module-level globals, so tests can substitute
/// fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub list_cache: Arc<BlogListCache>,
    pub logos: Arc<LogoService>,
    pub started_at: DateTime<Utc>,
}
